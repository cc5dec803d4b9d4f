//! In memory stand in for FileStorage, clones share the same map so a test can
//! hand one copy to a manager and inspect or corrupt collections through another.
use super::{Storage, StorageError};
use crate::constants::CollectionNames;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    data: Arc<RwLock<HashMap<&'static str, String>>>, //Keyed by collection file name
}

impl MemoryStorage {
    pub fn new() -> MemoryStorage {
        MemoryStorage {
            data: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Storage for MemoryStorage {
    fn read(&self, collection: CollectionNames) -> Result<Option<String>, StorageError> {
        let read_lock = self
            .data
            .read()
            .map_err(|_| StorageError::LockPoisoned(collection))?;

        Ok(read_lock.get(collection.value()).cloned())
    }

    fn write(&self, collection: CollectionNames, contents: &str) -> Result<(), StorageError> {
        let mut write_lock = self
            .data
            .write()
            .map_err(|_| StorageError::LockPoisoned(collection))?;

        write_lock.insert(collection.value(), contents.to_string());
        Ok(())
    }
}
