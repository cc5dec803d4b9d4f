//! The entity manager runs every operation as a full round trip: load the whole
//! collection, change it in memory, save the whole collection back. Nothing is
//! held between calls so two managers over the same storage always agree, but
//! interleaved writers lose updates.
//!
//! Changes are made on the stored entries rather than on typed records, so an
//! entry that doesn't fit the record type, or carries keys the record lacks, is
//! written back as it was found. Entries are matched on their id key alone.
use crate::io::{parse_record, Persistence, PersistenceError, Storage};
use crate::objects::{Record, Reservation};
use serde_json::Value;
use std::io::{self, Write};
use std::marker::PhantomData;
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct EntityManager<R: Record, S: Storage> {
    persistence: Persistence<S>,
    record_type: PhantomData<R>,
}

impl<R: Record, S: Storage> EntityManager<R, S> {
    pub fn new(storage: S) -> EntityManager<R, S> {
        EntityManager {
            persistence: Persistence::new(storage),
            record_type: PhantomData,
        }
    }

    /// Appends the record, duplicates of an existing id are written as is.
    pub fn create(&self, record: R) -> Result<(), EntityManagerError> {
        let mut entries = self.persistence.load(R::COLLECTION)?;
        debug!("Adding {} to {}", record.id(), R::COLLECTION);
        entries.push(serde_json::to_value(record)?);
        self.save(&entries)
    }

    /// Removes every entry with the id, returns how many were removed.
    pub fn delete(&self, id: &str) -> Result<usize, EntityManagerError> {
        let mut entries = self.persistence.load(R::COLLECTION)?;
        let before = entries.len();
        entries.retain(|e| !Self::matches(e, id));
        let removed = before - entries.len();

        debug!("Removed {} record(s) with id {} from {}", removed, id, R::COLLECTION);
        self.save(&entries)?;
        Ok(removed)
    }

    /// Prints the first record with the id to stdout, nothing is printed if it isn't there.
    pub fn display(&self, id: &str) -> Result<Option<R>, EntityManagerError> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        self.display_to(id, &mut handle)
    }

    pub fn display_to<W: Write>(
        &self,
        id: &str,
        writer: &mut W,
    ) -> Result<Option<R>, EntityManagerError> {
        let found = self.find(id)?;
        if let Some(record) = &found {
            writeln!(writer, "{}", record)?;
        }
        Ok(found)
    }

    /// First entry with the id that fits the record type
    pub fn find(&self, id: &str) -> Result<Option<R>, EntityManagerError> {
        Ok(self
            .persistence
            .load(R::COLLECTION)?
            .into_iter()
            .filter(|e| Self::matches(e, id))
            .find_map(|e| parse_record(R::COLLECTION, e)))
    }

    pub fn list(&self) -> Result<Vec<R>, EntityManagerError> {
        Ok(self.persistence.load_records(R::COLLECTION)?)
    }

    /// Applies the update to every entry with the id, returns how many were changed.
    ///
    /// Entries that don't fit the record type get the set fields written straight
    /// over their stored keys.
    pub fn modify(&self, id: &str, update: &R::Update) -> Result<usize, EntityManagerError> {
        let mut entries = self.persistence.load(R::COLLECTION)?;
        let mut changed = 0;
        for entry in entries.iter_mut().filter(|e| Self::matches(e, id)) {
            match parse_record::<R>(R::COLLECTION, entry.clone()) {
                Some(mut record) => {
                    record.apply(update);
                    *entry = serde_json::to_value(record)?;
                }
                None => {
                    if let (Some(fields), Value::Object(changes)) =
                        (entry.as_object_mut(), serde_json::to_value(update)?)
                    {
                        fields.extend(changes);
                    }
                }
            }
            changed += 1;
        }

        debug!("Modified {} record(s) with id {} in {}", changed, id, R::COLLECTION);
        self.save(&entries)?;
        Ok(changed)
    }

    fn matches(entry: &Value, id: &str) -> bool {
        entry.get(R::ID_FIELD).and_then(Value::as_str) == Some(id)
    }

    fn save(&self, entries: &[Value]) -> Result<(), EntityManagerError> {
        Ok(self.persistence.save(R::COLLECTION, entries)?)
    }
}

impl<S: Storage> EntityManager<Reservation, S> {
    pub fn cancel(&self, reservation_id: &str) -> Result<usize, EntityManagerError> {
        info!("Cancelling reservation {}", reservation_id);
        self.delete(reservation_id)
    }
}

#[derive(Debug, Error)]
pub enum EntityManagerError {
    #[error(transparent)]
    IOError(#[from] std::io::Error),
    #[error(transparent)]
    PersistenceError(#[from] PersistenceError),
    #[error(transparent)]
    SerdeJsonError(#[from] serde_json::Error),
}
