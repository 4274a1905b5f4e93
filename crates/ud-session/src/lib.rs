//! ud-session
//!
//! Local sign-in state for userdeck. A [`SessionStore`] owns the current
//! [`Session`] and persists it through any [`KeyValueStore`] under the fixed
//! key [`SESSION_KEY`].

pub(crate) mod auth_state;
pub(crate) mod error;
pub(crate) mod load_result;
pub(crate) mod session;
pub(crate) mod session_store;
pub(crate) mod storage;

#[cfg(test)]
mod tests;

pub use auth_state::AuthState;
pub use error::{Result as StorageResult, StorageError};
pub use load_result::LoadResult;
pub use session::Session;
pub use session_store::{SESSION_KEY, SessionStore};
pub use storage::{KeyValueStore, file_store::FileStore, memory_store::MemoryStore};
