//! ud-cli library
//!
//! Wires configuration, local session state and the directory client into
//! the `ud` command-line app. Exported for integration tests.

pub mod app;
pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod session_commands;
pub mod user_commands;
pub mod views;

#[cfg(test)]
mod tests;

pub use app::App;
pub use cli::Cli;
pub use error::{CliError, Result as CliResult};
