use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum SessionCommands {
    /// Show the signed-in user, or null
    Show,

    /// Create a local account and sign in
    SignUp {
        /// Display name
        #[arg(long)]
        name: String,

        /// Email address
        #[arg(long)]
        email: String,
    },

    /// Sign out and forget the local account
    SignOut,
}
