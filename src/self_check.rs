//! Exercises every manager against a storage, what the binary runs at startup.
//!
//! All records use fresh random ids and are deleted again at the end, so it is
//! safe to point this at a data directory holding real collections.
use crate::io::Storage;
use crate::managers::{
    CustomerManager, EntityManager, EntityManagerError, HotelManager, ReservationManager,
};
use crate::objects::{
    Customer, CustomerUpdate, Hotel, HotelUpdate, Record, Reservation, ReservationUpdate,
};
use thiserror::Error;
use uuid::Uuid;

pub struct SelfCheck<S: Storage + Clone> {
    hotels: HotelManager<S>,
    customers: CustomerManager<S>,
    reservations: ReservationManager<S>,
    passed: usize,
}

impl<S: Storage + Clone> SelfCheck<S> {
    pub fn new(storage: S) -> SelfCheck<S> {
        SelfCheck {
            hotels: EntityManager::new(storage.clone()),
            customers: EntityManager::new(storage.clone()),
            reservations: EntityManager::new(storage),
            passed: 0,
        }
    }

    /// Runs all checks, returns how many passed or the first failure
    pub fn run(mut self) -> Result<usize, SelfCheckError> {
        let hotel_id = Uuid::new_v4().to_string();
        let customer_id = Uuid::new_v4().to_string();
        let reservation_id = Uuid::new_v4().to_string();

        let hotel = Hotel::new(
            hotel_id.clone(),
            "Self Check Hotel".to_string(),
            "Nowhere".to_string(),
            10,
        );
        let customer = Customer::new(
            customer_id.clone(),
            "Self Check".to_string(),
            "selfcheck@example.com".to_string(),
        );
        let reservation =
            Reservation::new(reservation_id.clone(), customer_id.clone(), hotel_id.clone());

        Self::create_and_find(&self.hotels, hotel)?;
        self.pass("create hotel");
        Self::create_and_find(&self.customers, customer)?;
        self.pass("create customer");
        Self::create_and_find(&self.reservations, reservation)?;
        self.pass("create reservation");

        let hotel_update = HotelUpdate {
            rooms_available: Some(9),
            ..Default::default()
        };
        let changed = Self::modify_and_find(&self.hotels, &hotel_id, &hotel_update)?;
        Self::check(
            changed.rooms_available == 9 && changed.name == "Self Check Hotel",
            "modify hotel left other fields alone",
        )?;
        self.pass("modify hotel");

        let customer_update = CustomerUpdate {
            email: Some("selfcheck@example.org".to_string()),
            ..Default::default()
        };
        let changed = Self::modify_and_find(&self.customers, &customer_id, &customer_update)?;
        Self::check(
            changed.email == "selfcheck@example.org" && changed.customer_id == customer_id,
            "modify customer left other fields alone",
        )?;
        self.pass("modify customer");

        let reservation_update = ReservationUpdate {
            hotel_id: Some(hotel_id.clone()),
            ..Default::default()
        };
        Self::modify_and_find(&self.reservations, &reservation_id, &reservation_update)?;
        self.pass("modify reservation");

        self.hotels.display(&hotel_id)?;
        self.customers.display(&customer_id)?;
        self.reservations.display(&reservation_id)?;
        self.pass("display");

        self.reservations.cancel(&reservation_id)?;
        Self::expect_absent(&self.reservations, &reservation_id)?;
        self.pass("cancel reservation");
        self.customers.delete(&customer_id)?;
        Self::expect_absent(&self.customers, &customer_id)?;
        self.pass("delete customer");
        self.hotels.delete(&hotel_id)?;
        Self::expect_absent(&self.hotels, &hotel_id)?;
        self.pass("delete hotel");

        Ok(self.passed)
    }

    fn pass(&mut self, name: &str) {
        self.passed += 1;
        info!("Self check passed: {}", name);
    }

    fn check(condition: bool, what: &'static str) -> Result<(), SelfCheckError> {
        if condition {
            Ok(())
        } else {
            Err(SelfCheckError::Failed(what))
        }
    }

    fn create_and_find<R: Record>(
        manager: &EntityManager<R, S>,
        record: R,
    ) -> Result<(), SelfCheckError> {
        let id = record.id().to_string();
        manager.create(record)?;

        let matches = manager.list()?.iter().filter(|r| r.id() == id).count();
        Self::check(matches == 1, "created record is stored exactly once")
    }

    fn modify_and_find<R: Record>(
        manager: &EntityManager<R, S>,
        id: &str,
        update: &R::Update,
    ) -> Result<R, SelfCheckError> {
        let changed = manager.modify(id, update)?;
        Self::check(changed == 1, "modify matched exactly one record")?;

        manager
            .find(id)?
            .ok_or(SelfCheckError::Failed("modified record is still present"))
    }

    fn expect_absent<R: Record>(
        manager: &EntityManager<R, S>,
        id: &str,
    ) -> Result<(), SelfCheckError> {
        Self::check(manager.find(id)?.is_none(), "deleted record is gone")
    }
}

#[derive(Debug, Error)]
pub enum SelfCheckError {
    #[error(transparent)]
    EntityManagerError(#[from] EntityManagerError),
    #[error("Self check failed: {0}")]
    Failed(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::CollectionNames;
    use crate::io::{FileStorage, MemoryStorage};
    use crate::{get_customer, get_hotel};
    use tempfile::TempDir;

    #[test]
    fn test_memory_self_check() -> Result<(), Box<dyn std::error::Error>> {
        let storage = MemoryStorage::new();
        assert_eq!(10, SelfCheck::new(storage.clone()).run()?);

        //Everything it made is cleaned back up
        assert_eq!(Some("[]".to_string()), storage.read(CollectionNames::Hotels)?);
        assert_eq!(Some("[]".to_string()), storage.read(CollectionNames::Reservations)?);
        Ok(())
    }

    #[test]
    fn test_leaves_existing_data() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = TempDir::new()?;
        let storage = FileStorage::new(tmp.path());

        let hotels: HotelManager<_> = EntityManager::new(storage.clone());
        let customers: CustomerManager<_> = EntityManager::new(storage.clone());
        hotels.create(get_hotel("1"))?;
        customers.create(get_customer("1"))?;

        SelfCheck::new(storage).run()?;

        assert_eq!(vec![get_hotel("1")], hotels.list()?);
        assert_eq!(vec![get_customer("1")], customers.list()?);
        Ok(())
    }
}
