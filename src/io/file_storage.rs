//! Each collection lives in its own file directly under the data directory.
//!
//! There is no locking and no write-then-rename, a crash in the middle of a write
//! can leave a truncated file behind. Persistence treats that as a malformed
//! collection.
use super::{Storage, StorageError};
use crate::constants::CollectionNames;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug)]
pub struct FileStorage {
    data_dir: PathBuf,
}

impl FileStorage {
    pub fn new<P: AsRef<Path>>(data_dir: P) -> FileStorage {
        FileStorage {
            data_dir: data_dir.as_ref().to_path_buf(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn collection_path(&self, collection: CollectionNames) -> PathBuf {
        self.data_dir.join(collection.value())
    }
}

impl Storage for FileStorage {
    fn read(&self, collection: CollectionNames) -> Result<Option<String>, StorageError> {
        let path = self.collection_path(collection);
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No file at {}, treating as empty", path.display());
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, collection: CollectionNames, contents: &str) -> Result<(), StorageError> {
        //Must be able to write into a data dir that hasn't been made yet
        fs::create_dir_all(&self.data_dir)?;

        let path = self.collection_path(collection);
        fs::write(&path, contents)?;
        trace!("Wrote {} bytes to {}", contents.len(), path.display());
        Ok(())
    }
}
