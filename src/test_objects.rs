//! Set of functions used for testing and benchmarks instead of copying them everywhere

use crate::objects::{Customer, Hotel, Reservation};

pub fn get_hotel(hotel_id: &str) -> Hotel {
    Hotel::new(
        hotel_id.to_string(),
        "Grand Plaza".to_string(),
        "New York".to_string(),
        100,
    )
}

pub fn get_customer(customer_id: &str) -> Customer {
    Customer::new(
        customer_id.to_string(),
        "John Doe".to_string(),
        "john@example.com".to_string(),
    )
}

pub fn get_reservation(reservation_id: &str, customer_id: &str, hotel_id: &str) -> Reservation {
    Reservation::new(
        reservation_id.to_string(),
        customer_id.to_string(),
        hotel_id.to_string(),
    )
}
