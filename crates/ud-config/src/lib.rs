mod config;
mod directory_config;
mod error;
mod log_level;
mod logging_config;
mod storage_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use directory_config::DirectoryConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use storage_config::StorageConfig;

const CONFIG_DIR_ENV: &str = "UD_CONFIG_DIR";
const DEFAULT_CONFIG_DIRECTORY: &str = ".userdeck";
const CONFIG_FILENAME: &str = "config.toml";
const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";
const DEFAULT_STORAGE_PATH: &str = "storage";
const DEFAULT_LOG_LEVEL_STRING: &str = "warn";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Warn;
const DEFAULT_LOG_COLORED: bool = true;
const DEFAULT_LOG_DIRECTORY: &str = "log";
