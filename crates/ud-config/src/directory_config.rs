use crate::{ConfigError, ConfigErrorResult, DEFAULT_BASE_URL};

use serde::Deserialize;

/// Remote user directory settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DirectoryConfig {
    /// Base address of the directory API, without the `/users` suffix
    pub base_url: String,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_BASE_URL),
        }
    }
}

impl DirectoryConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let base_url = self.base_url.trim();

        if base_url.is_empty() {
            return Err(ConfigError::directory("directory.base_url cannot be empty"));
        }

        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ConfigError::directory(format!(
                "directory.base_url must start with http:// or https://, got '{}'",
                self.base_url
            )));
        }

        Ok(())
    }
}
