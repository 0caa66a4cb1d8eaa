//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided as an `RwSignal<AuthState>` at the app root. Route guards and
//! user-aware components read it; only the `state::session` operations and
//! the startup probe write it.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Authentication state tracking the current user and the startup probe.
///
/// `loading` starts `true` and flips once the session restore settles, so
/// guards can tell "not checked yet" apart from "checked, unauthenticated"
/// and avoid bouncing a still-valid session to the login page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

impl AuthState {
    /// State after the startup probe or a session operation has settled.
    pub fn settled(user: Option<User>) -> Self {
        Self {
            user,
            loading: false,
        }
    }

    /// Whether a signed-in user is present.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}
