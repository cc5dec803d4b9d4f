use super::Record;
use crate::constants::CollectionNames;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Links a customer to a hotel. Neither id is checked against its collection,
/// a reservation can point at records that never existed or were deleted.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Reservation {
    pub reservation_id: String,
    pub customer_id: String,
    pub hotel_id: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Reservation {
    pub fn new(reservation_id: String, customer_id: String, hotel_id: String) -> Reservation {
        Reservation {
            reservation_id,
            customer_id,
            hotel_id,
            extra: Map::new(),
        }
    }
}

impl Record for Reservation {
    type Update = ReservationUpdate;

    const COLLECTION: CollectionNames = CollectionNames::Reservations;

    const ID_FIELD: &'static str = "reservation_id";

    fn id(&self) -> &str {
        &self.reservation_id
    }

    fn apply(&mut self, update: &ReservationUpdate) {
        if let Some(customer_id) = &update.customer_id {
            self.customer_id = customer_id.clone();
        }
        if let Some(hotel_id) = &update.hotel_id {
            self.hotel_id = hotel_id.clone();
        }
    }
}

impl fmt::Display for Reservation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Reservation(Customer ID: {}, Hotel ID: {})",
            self.customer_id, self.hotel_id
        )
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ReservationUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hotel_id: Option<String>,
}
