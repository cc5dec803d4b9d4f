use crate::constants::CollectionNames;
use thiserror::Error;

/// Raw text storage of whole collections. Implementations know nothing about
/// the format, that is left to Persistence.
pub trait Storage {
    /// Returns None if the collection has never been written
    fn read(&self, collection: CollectionNames) -> Result<Option<String>, StorageError>;

    /// Replaces the entire content of the collection
    fn write(&self, collection: CollectionNames, contents: &str) -> Result<(), StorageError>;
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error(transparent)]
    IOError(#[from] std::io::Error),
    #[error("Storage lock poisoned accessing {0}")]
    LockPoisoned(CollectionNames),
}
