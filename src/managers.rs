mod entity_manager;
pub use entity_manager::EntityManager;
pub use entity_manager::EntityManagerError;

use crate::objects::{Customer, Hotel, Reservation};

pub type HotelManager<S> = EntityManager<Hotel, S>;
pub type CustomerManager<S> = EntityManager<Customer, S>;
pub type ReservationManager<S> = EntityManager<Reservation, S>;
