//! The fixed set of collections, each one is persisted as its own file

use std::fmt;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum CollectionNames {
    Hotels,
    Customers,
    Reservations,
}

impl CollectionNames {
    pub const VALUES: [CollectionNames; 3] = [
        CollectionNames::Hotels,
        CollectionNames::Customers,
        CollectionNames::Reservations,
    ];

    pub fn value(self) -> &'static str {
        match self {
            CollectionNames::Hotels => "hotels.json",
            CollectionNames::Customers => "customers.json",
            CollectionNames::Reservations => "reservations.json",
        }
    }
}

impl fmt::Display for CollectionNames {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}
