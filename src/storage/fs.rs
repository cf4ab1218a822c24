//! File-backed storage backend.

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;

use super::{KeyValueStore, StorageError};

/// A [`KeyValueStore`] that keeps one file per key under a root directory.
///
/// This is the durable backend for on-device sessions; the root directory is
/// created lazily on the first write.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        FileStore { root: root.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key)).await {
            Ok(blob) => Ok(Some(blob)),
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(error) => Err(StorageError::Io(error)),
        }
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StorageError> {
        fs::create_dir_all(&self.root).await?;
        fs::write(self.path_for(key), value).await?;

        Ok(())
    }
}
