use crate::error::{Result as StorageResult, StorageError};
use crate::storage::{KeyValueStore, validate_key};

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use log::{debug, warn};
use tokio::fs;
use tokio::io::AsyncWriteExt;

const VALUE_EXTENSION: &str = "json";

/// Key-value store keeping one file per key under a root directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// The root directory is created lazily on first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Gets the file path for a key.
    fn path_for(&self, key: &str) -> StorageResult<PathBuf> {
        validate_key(key)?;
        Ok(self.root.join(format!("{key}.{VALUE_EXTENSION}")))
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let path = self.path_for(key)?;

        match fs::read_to_string(&path).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No stored value for '{key}' at {path:?}");
                Ok(None)
            }
            Err(e) => Err(StorageError::file_read(path, e)),
        }
    }

    /// Writes using the atomic pattern.
    ///
    /// 1. Writes to temp file
    /// 2. Syncs to disk (fsync)
    /// 3. Atomic rename to final location
    async fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let final_path = self.path_for(key)?;

        fs::create_dir_all(&self.root)
            .await
            .map_err(|e| StorageError::dir_creation(self.root.clone(), e))?;

        let temp_path = self.root.join(format!(
            "{key}.{VALUE_EXTENSION}.tmp.{}",
            std::process::id()
        ));

        {
            let mut file = fs::File::create(&temp_path)
                .await
                .map_err(|e| StorageError::file_write(temp_path.clone(), e))?;

            file.write_all(value.as_bytes())
                .await
                .map_err(|e| StorageError::file_write(temp_path.clone(), e))?;

            file.sync_all()
                .await
                .map_err(|e| StorageError::file_write(temp_path.clone(), e))?;
        }

        if let Err(e) = fs::rename(&temp_path, &final_path).await {
            if let Err(cleanup) = fs::remove_file(&temp_path).await {
                warn!("Failed to clean up temp file {temp_path:?}: {cleanup}");
            }
            return Err(StorageError::atomic_rename(temp_path, final_path, e));
        }

        debug!("Stored value for '{key}' at {final_path:?}");
        Ok(())
    }

    async fn remove(&self, key: &str) -> StorageResult<()> {
        let path = self.path_for(key)?;

        match fs::remove_file(&path).await {
            Ok(()) => {
                debug!("Removed stored value for '{key}'");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::file_remove(path, e)),
        }
    }
}
