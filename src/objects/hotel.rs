use super::Record;
use crate::constants::CollectionNames;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Hotel {
    pub hotel_id: String,
    pub name: String,
    pub location: String,
    //Negative counts are accepted, nothing enforces a floor
    pub rooms_available: i64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Hotel {
    pub fn new(hotel_id: String, name: String, location: String, rooms_available: i64) -> Hotel {
        Hotel {
            hotel_id,
            name,
            location,
            rooms_available,
            extra: Map::new(),
        }
    }
}

impl Record for Hotel {
    type Update = HotelUpdate;

    const COLLECTION: CollectionNames = CollectionNames::Hotels;

    const ID_FIELD: &'static str = "hotel_id";

    fn id(&self) -> &str {
        &self.hotel_id
    }

    fn apply(&mut self, update: &HotelUpdate) {
        if let Some(name) = &update.name {
            self.name = name.clone();
        }
        if let Some(location) = &update.location {
            self.location = location.clone();
        }
        if let Some(rooms_available) = update.rooms_available {
            self.rooms_available = rooms_available;
        }
    }
}

impl fmt::Display for Hotel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Hotel({}, {}, {} rooms)",
            self.name, self.location, self.rooms_available
        )
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct HotelUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rooms_available: Option<i64>,
}
