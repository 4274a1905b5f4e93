use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "ud")]
#[command(about = "Sign in locally and browse the user directory")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory base URL (overrides config.toml and UD_DIRECTORY_BASE_URL)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}
