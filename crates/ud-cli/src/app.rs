use crate::{
    CliError, CliResult,
    commands::Commands,
    error::SIGN_UP_FIELDS_MESSAGE,
    session_commands::SessionCommands,
    user_commands::UserCommands,
    views::{UserDetails, UserListItem},
};

use std::sync::Arc;

use log::{debug, info};
use serde_json::{Value, json};
use ud_config::Config;
use ud_directory::DirectoryClient;
use ud_session::{FileStore, KeyValueStore, LoadResult, SessionStore};

/// Application state shared by every command.
///
/// Built once at startup; the session is restored before the first command
/// runs, so commands never see it mid-load.
pub struct App<S: KeyValueStore = FileStore> {
    session: Arc<SessionStore<S>>,
    restored: LoadResult,
    directory: DirectoryClient,
}

impl App<FileStore> {
    /// Build from configuration: file-backed storage under the config dir.
    pub async fn from_config(config: &Config) -> CliResult<Self> {
        let storage_path = config.storage_path()?;
        info!("Using storage at {}", storage_path.display());

        let storage = FileStore::new(storage_path);
        let directory = DirectoryClient::new(&config.directory.base_url);

        Ok(Self::start(storage, directory).await)
    }
}

impl<S: KeyValueStore> App<S> {
    /// Restore the saved session and return a ready app.
    pub async fn start(storage: S, directory: DirectoryClient) -> Self {
        let session = Arc::new(SessionStore::new(storage));

        // Faults are already logged by the store
        let restored = session.restore().await;
        if let Some(ref message) = restored.corruption_error {
            debug!("Starting signed out; stored session unreadable: {message}");
        }
        if let Some(ref message) = restored.storage_error {
            debug!("Starting signed out; storage read failed: {message}");
        }

        Self {
            session,
            restored,
            directory,
        }
    }

    /// Outcome of the startup restore.
    pub fn restored(&self) -> &LoadResult {
        &self.restored
    }

    pub fn session(&self) -> &Arc<SessionStore<S>> {
        &self.session
    }

    pub fn directory(&self) -> &DirectoryClient {
        &self.directory
    }

    /// Run one command and return its JSON output.
    pub async fn execute(&self, command: Commands) -> CliResult<Value> {
        match command {
            Commands::Session { action } => self.execute_session(action).await,
            Commands::Users { action } => self.execute_users(action).await,
        }
    }

    async fn execute_session(&self, action: SessionCommands) -> CliResult<Value> {
        match action {
            SessionCommands::Show => Ok(serde_json::to_value(self.session.current())?),
            SessionCommands::SignUp { name, email } => {
                validate_sign_up(&name, &email)?;

                if !self.session.sign_up(name, email).await {
                    return Err(CliError::sign_up_failed());
                }

                Ok(serde_json::to_value(self.session.current())?)
            }
            SessionCommands::SignOut => {
                self.session.sign_out().await;
                Ok(json!({ "signed_out": true }))
            }
        }
    }

    async fn execute_users(&self, action: UserCommands) -> CliResult<Value> {
        if !self.session.is_authenticated() {
            return Err(CliError::not_signed_in());
        }

        match action {
            UserCommands::List => {
                let users = self.directory.list_users().await?;
                let rows: Vec<UserListItem> = users.iter().map(UserListItem::from).collect();
                Ok(serde_json::to_value(rows)?)
            }
            UserCommands::Get { id } => {
                let user = self.directory.get_user(id).await?;
                Ok(serde_json::to_value(UserDetails::from(&user))?)
            }
        }
    }
}

/// Sign-up form guard. The session store itself accepts anything.
pub fn validate_sign_up(name: &str, email: &str) -> CliResult<()> {
    if name.trim().is_empty() || email.trim().is_empty() {
        return Err(CliError::validation(SIGN_UP_FIELDS_MESSAGE));
    }
    Ok(())
}
