use crate::session::Session;

/// Sign-in lifecycle.
///
/// `Uninitialized -> Loading -> {Authenticated, Unauthenticated}`, then
/// sign-up and sign-out move between the two settled states. Nothing goes
/// back to `Loading` once the first restore has finished.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AuthState {
    #[default]
    Uninitialized,
    Loading,
    Authenticated(Session),
    Unauthenticated,
}

impl AuthState {
    /// True until the first restore settles. Callers gate rendering on this.
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Uninitialized | Self::Loading)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    pub fn session(&self) -> Option<&Session> {
        match self {
            Self::Authenticated(session) => Some(session),
            _ => None,
        }
    }
}
