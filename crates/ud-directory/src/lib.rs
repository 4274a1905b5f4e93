//! ud-directory
//!
//! Read-only client for the remote user directory.

pub(crate) mod client;
pub(crate) mod directory_user;
pub(crate) mod error;


pub use client::{DEFAULT_BASE_URL, DirectoryClient};
pub use directory_user::{Address, Company, DirectoryUser};
pub use error::{DirectoryError, NETWORK_NOT_OK_MESSAGE, Result as DirectoryResult};
