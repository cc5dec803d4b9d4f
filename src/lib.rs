#![forbid(unsafe_code)]

#[macro_use]
extern crate log;

//Application Imports/Exports
pub mod config;
pub mod constants;
pub mod io;
pub mod managers;
pub mod objects;
pub mod self_check;

mod test_objects;
pub use test_objects::{get_customer, get_hotel, get_reservation};
