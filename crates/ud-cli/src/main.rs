//! ud - userdeck CLI
//!
//! Sign up locally, then browse the public user directory.
//!
//! # Examples
//!
//! ```bash
//! # Create a local account
//! ud session sign-up --name "Ada" --email ada@example.com
//!
//! # List directory users
//! ud users list --pretty
//!
//! # Show one user
//! ud users get 3
//! ```

use ud_cli::{App, Cli, CliError, CliResult, logger};

use std::process::ExitCode;

use clap::Parser;
use log::info;
use ud_config::Config;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> CliResult<String> {
    let mut config = Config::load()?;
    if let Some(base_url) = cli.base_url {
        config.directory.base_url = base_url;
    }
    config.validate()?;

    // Initialize logger (before any other logging)
    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;

    info!("Starting ud v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let app = App::from_config(&config).await?;
    let value = app.execute(cli.command).await?;

    let output = if cli.pretty {
        serde_json::to_string_pretty(&value)
    } else {
        serde_json::to_string(&value)
    };

    output.map_err(CliError::from)
}
