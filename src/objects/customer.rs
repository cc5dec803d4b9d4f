use super::Record;
use crate::constants::CollectionNames;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Customer {
    pub customer_id: String,
    pub name: String,
    pub email: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Customer {
    pub fn new(customer_id: String, name: String, email: String) -> Customer {
        Customer {
            customer_id,
            name,
            email,
            extra: Map::new(),
        }
    }
}

impl Record for Customer {
    type Update = CustomerUpdate;

    const COLLECTION: CollectionNames = CollectionNames::Customers;

    const ID_FIELD: &'static str = "customer_id";

    fn id(&self) -> &str {
        &self.customer_id
    }

    fn apply(&mut self, update: &CustomerUpdate) {
        if let Some(name) = &update.name {
            self.name = name.clone();
        }
        if let Some(email) = &update.email {
            self.email = email.clone();
        }
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Customer({}, {})", self.name, self.email)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct CustomerUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}
