mod collection_names;
pub use collection_names::CollectionNames;

mod environment;
pub use environment::DATA_DIR_VAR;
pub use environment::DEFAULT_LOG_LEVEL;
pub use environment::LOG_LEVEL_VAR;

/// Indentation used when writing collections, matches what older tooling produced
pub const JSON_INDENT: &[u8] = b"    ";
