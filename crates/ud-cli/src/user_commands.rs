use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum UserCommands {
    /// List all directory users
    List,

    /// Get a directory user by ID
    Get {
        /// User ID
        id: u64,
    },
}
