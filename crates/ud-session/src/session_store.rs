use crate::{
    auth_state::AuthState, load_result::LoadResult, session::Session, storage::KeyValueStore,
};

use log::{error, info, warn};
use tokio::sync::watch;

/// Storage key the session is persisted under.
pub const SESSION_KEY: &str = "user";

/// Single source of truth for who is signed in.
///
/// Storage faults are logged and turned into `bool` / empty outcomes; none of
/// the operations return an error. Sign-up and sign-out are not serialized
/// against each other, so callers must not race them.
pub struct SessionStore<S: KeyValueStore> {
    storage: S,
    state: watch::Sender<AuthState>,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        let (state, _) = watch::channel(AuthState::Uninitialized);
        Self { storage, state }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Restores the persisted session.
    ///
    /// The first call publishes `Loading` before reading storage. Later calls
    /// re-read storage and publish the outcome without passing through
    /// `Loading` again. Any fault leaves the store unauthenticated.
    pub async fn restore(&self) -> LoadResult {
        let first_restore = matches!(*self.state.borrow(), AuthState::Uninitialized);
        if first_restore {
            self.state.send_replace(AuthState::Loading);
        }

        let result = self.load().await;

        let next = match result.session {
            Some(ref session) => AuthState::Authenticated(session.clone()),
            None => AuthState::Unauthenticated,
        };
        self.state.send_replace(next);

        result
    }

    async fn load(&self) -> LoadResult {
        let raw = match self.storage.get(SESSION_KEY).await {
            Ok(Some(raw)) if !raw.trim().is_empty() => raw,
            Ok(_) => {
                info!("No stored session (first launch or signed out)");
                return LoadResult::empty();
            }
            Err(e) => {
                error!("Failed to load user from storage: {e}");
                warn!("{}", e.recovery_hint());
                return LoadResult::storage_failed(e.to_string());
            }
        };

        // A stored `null` means no session, same as an absent key
        match serde_json::from_str::<Option<Session>>(&raw) {
            Ok(Some(session)) => {
                info!("Restored session for {}", session.name);
                LoadResult::restored(session)
            }
            Ok(None) => {
                info!("Stored session is null; treating as signed out");
                LoadResult::empty()
            }
            Err(e) => {
                error!("Failed to load user from storage: stored session is corrupted: {e}");
                LoadResult::corrupted(e.to_string())
            }
        }
    }

    /// Persists a new session and makes it current.
    ///
    /// Name and email are stored verbatim; empty strings are accepted here.
    /// Returns `false` and leaves the current session untouched if the write
    /// fails.
    pub async fn sign_up(&self, name: impl Into<String>, email: impl Into<String>) -> bool {
        let session = Session::new(name, email);

        let json = match serde_json::to_string(&session) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to save user: {e}");
                return false;
            }
        };

        if let Err(e) = self.storage.set(SESSION_KEY, &json).await {
            error!("Failed to save user: {e}");
            warn!("{}", e.recovery_hint());
            return false;
        }

        info!("Signed up as {}", session.name);
        self.state.send_replace(AuthState::Authenticated(session));
        true
    }

    /// Removes the persisted session and clears the current one.
    ///
    /// The in-memory session is cleared even when removal fails, in which
    /// case the stale value is still in storage and the next restore brings
    /// it back.
    pub async fn sign_out(&self) {
        if let Err(e) = self.storage.remove(SESSION_KEY).await {
            error!("Failed to remove user: {e}");
            warn!(
                "Stored session left in place; it will be restored on next launch. {}",
                e.recovery_hint()
            );
        } else {
            info!("Signed out");
        }

        self.state.send_replace(AuthState::Unauthenticated);
    }

    pub fn current(&self) -> Option<Session> {
        self.state.borrow().session().cloned()
    }

    pub fn state(&self) -> AuthState {
        self.state.borrow().clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().is_loading()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().is_authenticated()
    }

    /// Receiver notified on every state publication, including repeats.
    pub fn subscribe(&self) -> watch::Receiver<AuthState> {
        self.state.subscribe()
    }

    /// Waits until the initial restore has settled and returns that state.
    pub async fn ready(&self) -> AuthState {
        let mut rx = self.state.subscribe();
        match rx.wait_for(|state| !state.is_loading()).await {
            Ok(state) => state.clone(),
            // The sender lives in `self`, so the channel cannot close here.
            Err(_) => self.state(),
        }
    }
}
