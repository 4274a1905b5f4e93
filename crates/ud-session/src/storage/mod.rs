pub(crate) mod file_store;
pub(crate) mod memory_store;

use crate::error::{Result as StorageResult, StorageError};

use async_trait::async_trait;

/// On-device string storage addressed by key.
///
/// Removing a key that is not present succeeds.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> StorageResult<Option<String>>;

    async fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    async fn remove(&self, key: &str) -> StorageResult<()>;
}

/// Keys are ASCII alphanumerics plus `-`, `_` and `.`, never leading with `.`.
#[track_caller]
pub(crate) fn validate_key(key: &str) -> StorageResult<()> {
    if key.is_empty() {
        return Err(StorageError::invalid_key(key, "key cannot be empty"));
    }

    if key.starts_with('.') {
        return Err(StorageError::invalid_key(key, "key cannot start with '.'"));
    }

    if let Some(c) = key
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')))
    {
        return Err(StorageError::invalid_key(
            key,
            format!("unsupported character {c:?}"),
        ));
    }

    Ok(())
}
