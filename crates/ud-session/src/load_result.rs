use crate::session::Session;

use serde::Serialize;

/// Result of restoring a session - distinguishes "not found" from faults.
///
/// Faults never escape as errors; they are reported here after being logged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadResult {
    pub session: Option<Session>,
    /// Present if a stored value exists but does not decode as a session
    pub corruption_error: Option<String>,
    /// Present if the storage read itself failed
    pub storage_error: Option<String>,
}

impl LoadResult {
    pub(crate) fn restored(session: Session) -> Self {
        Self {
            session: Some(session),
            corruption_error: None,
            storage_error: None,
        }
    }

    pub(crate) fn empty() -> Self {
        Self {
            session: None,
            corruption_error: None,
            storage_error: None,
        }
    }

    pub(crate) fn corrupted(message: impl Into<String>) -> Self {
        Self {
            session: None,
            corruption_error: Some(message.into()),
            storage_error: None,
        }
    }

    pub(crate) fn storage_failed(message: impl Into<String>) -> Self {
        Self {
            session: None,
            corruption_error: None,
            storage_error: Some(message.into()),
        }
    }

    /// Whether restoring hit a fault (corruption or storage failure).
    pub fn is_fault(&self) -> bool {
        self.corruption_error.is_some() || self.storage_error.is_some()
    }
}
