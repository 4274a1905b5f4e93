use crate::{ConfigError, ConfigErrorResult, DEFAULT_STORAGE_PATH};

use std::path::Path;

use serde::Deserialize;

/// On-device key-value storage settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Storage directory, relative to the config directory
    pub path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: String::from(DEFAULT_STORAGE_PATH),
        }
    }
}

impl StorageConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.path.trim().is_empty() {
            return Err(ConfigError::storage("storage.path cannot be empty"));
        }

        // Must stay inside the config dir
        if Path::new(&self.path).is_absolute() || self.path.contains("..") {
            return Err(ConfigError::storage(
                "storage.path must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }
}
