//! Common behavior of everything stored in a collection.
use crate::constants::CollectionNames;
use serde::{de::DeserializeOwned, Serialize};
use std::fmt::{Debug, Display};

/// A record is a flat structure with a single identifying field.
///
/// Identifiers are expected to be unique within a collection but nothing checks
/// that, a collection can hold several records with the same id. Keys the record
/// doesn't know about are carried along in its extra map.
pub trait Record: Clone + Debug + Display + Serialize + DeserializeOwned {
    /// Partial update applied by modify, every field is optional and unset fields
    /// must not serialize.
    type Update: Debug + Serialize;

    const COLLECTION: CollectionNames;

    /// Name of the identifying key in the stored entries
    const ID_FIELD: &'static str;

    fn id(&self) -> &str;

    /// Overwrites the fields set in the update, the identifier is never touched.
    fn apply(&mut self, update: &Self::Update);
}
