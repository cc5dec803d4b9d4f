//! Turns whole collections into text and back.
//!
//! Collections are stored as a single pretty printed JSON array. Only content
//! that isn't a JSON array at all is malformed, that is logged and treated as an
//! empty collection so callers never see it. Individual entries are kept as raw
//! JSON values, an entry that doesn't fit its record type is skipped when reading
//! records but is written back untouched.
use super::{Storage, StorageError};
use crate::constants::{CollectionNames, JSON_INDENT};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::ser::PrettyFormatter;
use serde_json::{Serializer, Value};
use std::string::FromUtf8Error;
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct Persistence<S: Storage> {
    storage: S,
}

impl<S: Storage> Persistence<S> {
    pub fn new(storage: S) -> Persistence<S> {
        Persistence { storage }
    }

    /// Every entry of the collection, exactly as stored
    pub fn load(&self, collection: CollectionNames) -> Result<Vec<Value>, PersistenceError> {
        let contents = match self.storage.read(collection)? {
            Some(c) => c,
            None => return Ok(vec![]),
        };

        match serde_json::from_str(&contents) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                error!("Error reading {}. Invalid format: {}", collection, e);
                Ok(vec![])
            }
        }
    }

    /// The entries that fit the record type, anything else is logged and skipped
    pub fn load_records<R: DeserializeOwned>(
        &self,
        collection: CollectionNames,
    ) -> Result<Vec<R>, PersistenceError> {
        Ok(self
            .load(collection)?
            .into_iter()
            .filter_map(|entry| parse_record(collection, entry))
            .collect())
    }

    pub fn save<R: Serialize>(
        &self,
        collection: CollectionNames,
        records: &[R],
    ) -> Result<(), PersistenceError> {
        let mut buffer = Vec::new();
        let mut serializer =
            Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(JSON_INDENT));
        records.serialize(&mut serializer)?;

        let contents = String::from_utf8(buffer)?;
        self.storage.write(collection, &contents)?;
        Ok(())
    }
}

pub fn parse_record<R: DeserializeOwned>(collection: CollectionNames, entry: Value) -> Option<R> {
    match serde_json::from_value(entry) {
        Ok(record) => Some(record),
        Err(e) => {
            warn!("Entry in {} doesn't fit its record type: {}", collection, e);
            None
        }
    }
}

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error(transparent)]
    FromUtf8Error(#[from] FromUtf8Error),
    #[error(transparent)]
    SerdeJsonError(#[from] serde_json::Error),
    #[error(transparent)]
    StorageError(#[from] StorageError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::{FileStorage, MemoryStorage};
    use crate::objects::{Customer, Hotel};
    use tempfile::TempDir;

    fn get_hotels() -> Vec<Hotel> {
        vec![
            Hotel::new(
                "1".to_string(),
                "Grand Plaza".to_string(),
                "New York".to_string(),
                100,
            ),
            Hotel::new(
                "2".to_string(),
                "Harbor Inn".to_string(),
                "Boston".to_string(),
                12,
            ),
        ]
    }

    #[test]
    fn test_load_missing_is_empty() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = TempDir::new()?;
        let pers = Persistence::new(FileStorage::new(tmp.path()));

        assert!(pers.load(CollectionNames::Hotels)?.is_empty());
        let hotels: Vec<Hotel> = pers.load_records(CollectionNames::Hotels)?;
        assert!(hotels.is_empty());
        Ok(())
    }

    #[test]
    fn test_load_malformed_is_empty() -> Result<(), Box<dyn std::error::Error>> {
        let storage = MemoryStorage::new();
        let pers = Persistence::new(storage.clone());

        for bad in &["", "{not json", r#"{"hotel_id": "1"}"#, "42"] {
            storage.write(CollectionNames::Hotels, bad)?;
            assert!(
                pers.load(CollectionNames::Hotels)?.is_empty(),
                "Expected nothing from {}",
                bad
            );
        }
        Ok(())
    }

    #[test]
    fn test_ill_fitting_entries_are_kept() -> Result<(), Box<dyn std::error::Error>> {
        let storage = MemoryStorage::new();
        let pers = Persistence::new(storage.clone());

        storage.write(
            CollectionNames::Hotels,
            r#"[
                {"hotel_id": "1", "name": "Grand Plaza", "location": "New York", "rooms_available": 100},
                {"hotel_id": "2", "name": "Harbor Inn", "location": "Boston", "rooms_available": "12"},
                {"hotel_id": "3", "name": "No Location"}
            ]"#,
        )?;

        let entries = pers.load(CollectionNames::Hotels)?;
        assert_eq!(3, entries.len());
        assert_eq!("12", entries[1]["rooms_available"]);

        let hotels: Vec<Hotel> = pers.load_records(CollectionNames::Hotels)?;
        assert_eq!(vec![get_hotels()[0].clone()], hotels);
        Ok(())
    }

    #[test]
    fn test_save_then_load() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = TempDir::new()?;
        let pers = Persistence::new(FileStorage::new(tmp.path()));

        pers.save(CollectionNames::Hotels, &get_hotels())?;
        let hotels: Vec<Hotel> = pers.load_records(CollectionNames::Hotels)?;

        assert_eq!(get_hotels(), hotels);
        Ok(())
    }

    #[test]
    fn test_save_is_indented() -> Result<(), Box<dyn std::error::Error>> {
        let storage = MemoryStorage::new();
        let pers = Persistence::new(storage.clone());

        pers.save(
            CollectionNames::Customers,
            &[Customer::new(
                "1".to_string(),
                "John Doe".to_string(),
                "john@example.com".to_string(),
            )],
        )?;

        let expected = "[\n    {\n        \"customer_id\": \"1\",\n        \"name\": \"John Doe\",\n        \"email\": \"john@example.com\"\n    }\n]";
        assert_eq!(Some(expected.to_string()), storage.read(CollectionNames::Customers)?);
        Ok(())
    }

    #[test]
    fn test_save_empty() -> Result<(), Box<dyn std::error::Error>> {
        let storage = MemoryStorage::new();
        let pers = Persistence::new(storage.clone());

        let nothing: Vec<Hotel> = vec![];
        pers.save(CollectionNames::Hotels, &nothing)?;

        assert_eq!(Some("[]".to_string()), storage.read(CollectionNames::Hotels)?);
        Ok(())
    }

    #[test]
    fn test_extra_fields_round_trip() -> Result<(), Box<dyn std::error::Error>> {
        let storage = MemoryStorage::new();
        let pers = Persistence::new(storage.clone());

        storage.write(
            CollectionNames::Customers,
            r#"[{"customer_id": "1", "name": "John Doe", "email": "john@example.com", "phone": "555"}]"#,
        )?;

        let customers: Vec<Customer> = pers.load_records(CollectionNames::Customers)?;
        assert_eq!(1, customers.len());
        assert_eq!("john@example.com", customers[0].email);
        assert_eq!(Some(&Value::from("555")), customers[0].extra.get("phone"));

        pers.save(CollectionNames::Customers, &customers)?;
        assert_eq!("555", pers.load(CollectionNames::Customers)?[0]["phone"]);
        Ok(())
    }
}
