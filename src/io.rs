mod file_storage;
pub use file_storage::FileStorage;

mod memory_storage;
pub use memory_storage::MemoryStorage;

mod persistence;
pub use persistence::parse_record;
pub use persistence::Persistence;
pub use persistence::PersistenceError;

mod storage;
pub use storage::Storage;
pub use storage::StorageError;
