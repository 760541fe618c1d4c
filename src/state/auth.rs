#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Authentication state: the current user plus whether the startup
/// restoration attempt is still in flight.
///
/// `initializing` starts true and flips to false exactly once, when
/// restoration resolves; it never returns to true for the lifetime of the
/// page session. All mutation goes through `state::session`.
#[derive(Clone, Debug)]
pub struct AuthState {
    pub user: Option<User>,
    pub initializing: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            initializing: true,
        }
    }
}

impl AuthState {
    /// True once restoration has finished and nobody is signed in.
    pub fn is_anonymous(&self) -> bool {
        !self.initializing && self.user.is_none()
    }
}
