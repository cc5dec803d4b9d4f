mod record;
pub use record::Record;

mod customer;
pub use customer::Customer;
pub use customer::CustomerUpdate;

mod hotel;
pub use hotel::Hotel;
pub use hotel::HotelUpdate;

mod reservation;
pub use reservation::Reservation;
pub use reservation::ReservationUpdate;
