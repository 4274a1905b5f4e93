mod error;
mod file_store;

use crate::{KeyValueStore, MemoryStore, StorageError, StorageResult};

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::Notify;

/// Memory-backed store whose operations can be switched to fail.
#[derive(Default)]
pub(crate) struct FaultyStore {
    pub(crate) inner: MemoryStore,
    pub(crate) fail_get: AtomicBool,
    pub(crate) fail_set: AtomicBool,
    pub(crate) fail_remove: AtomicBool,
}

impl FaultyStore {
    pub(crate) fn over(inner: MemoryStore) -> Self {
        Self {
            inner,
            ..Self::default()
        }
    }

    pub(crate) fn failing(flag: &AtomicBool) {
        flag.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl KeyValueStore for FaultyStore {
    async fn get(&self, key: &str) -> StorageResult<Option<String>> {
        if self.fail_get.load(Ordering::SeqCst) {
            return Err(StorageError::unavailable("injected read fault"));
        }
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        if self.fail_set.load(Ordering::SeqCst) {
            return Err(StorageError::unavailable("injected write fault"));
        }
        self.inner.set(key, value).await
    }

    async fn remove(&self, key: &str) -> StorageResult<()> {
        if self.fail_remove.load(Ordering::SeqCst) {
            return Err(StorageError::unavailable("injected remove fault"));
        }
        self.inner.remove(key).await
    }
}

/// Memory-backed store whose reads park until released.
#[derive(Default)]
pub(crate) struct GatedStore {
    pub(crate) inner: MemoryStore,
    /// Signalled when a read has started
    pub(crate) entered: Notify,
    /// Lets one parked read continue
    pub(crate) release: Notify,
}

#[async_trait]
impl KeyValueStore for GatedStore {
    async fn get(&self, key: &str) -> StorageResult<Option<String>> {
        self.entered.notify_one();
        self.release.notified().await;
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.inner.set(key, value).await
    }

    async fn remove(&self, key: &str) -> StorageResult<()> {
        self.inner.remove(key).await
    }
}
