use crate::{session_commands::SessionCommands, user_commands::UserCommands};

use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Local session operations
    Session {
        #[command(subcommand)]
        action: SessionCommands,
    },

    /// Directory operations (requires a session)
    Users {
        #[command(subcommand)]
        action: UserCommands,
    },
}
