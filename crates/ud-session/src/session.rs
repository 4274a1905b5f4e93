use serde::{Deserialize, Serialize};

/// Locally signed-in identity.
///
/// Both fields are required when decoding, so a stored value missing either
/// one is treated as corrupted rather than restored half-populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub name: String,
    pub email: String,
}

impl Session {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}
