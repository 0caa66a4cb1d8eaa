//! Session lifecycle operations: restore, login, register, logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend authenticates with an HTTP-only session cookie and returns no
//! identity object, so the client keeps its own record of who signed in
//! inside one localStorage slot. The operations here are the only writers of
//! that slot; the startup probe is its only reader.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::api;
use crate::net::types::User;
use crate::util::persistence;

/// localStorage slot holding the cached identity.
const USER_CACHE_KEY: &str = "zbook_user";

/// Placeholder id recorded until the backend exposes a canonical identity
/// endpoint; nothing client-side keys off it.
const LOCAL_USER_ID: &str = "local";

/// Synthesize the identity record persisted after a successful login.
fn user_for_email(email: &str) -> User {
    User {
        user_id: LOCAL_USER_ID.to_owned(),
        email: email.to_owned(),
    }
}

/// Check whether a previously-established session is still valid and restore
/// the cached identity if so.
///
/// Never fails the caller: transport errors, non-success statuses, and a
/// missing cache all resolve to "not authenticated".
pub async fn restore() -> Option<User> {
    if api::probe_session().await {
        persistence::load_json(USER_CACHE_KEY)
    } else {
        None
    }
}

/// Submit credentials and establish a session.
///
/// On success the backend sets its session cookie; the returned `User` is
/// synthesized from the submitted email and persisted to the cache so a
/// reload can restore it.
///
/// # Errors
///
/// Returns the backend `detail` message, or a generic fallback, when the
/// credentials are rejected or the request fails. A failed login leaves the
/// cache untouched, so retrying is safe.
pub async fn login(email: &str, password: &str) -> Result<User, String> {
    api::login(email, password).await?;
    let user = user_for_email(email);
    persistence::save_json(USER_CACHE_KEY, &user);
    Ok(user)
}

/// Create a new account. Success does not establish a session; the user
/// still signs in afterwards.
///
/// # Errors
///
/// Returns the backend `detail` message, or a generic fallback, when the
/// registration is rejected or the request fails.
pub async fn register(email: &str, password: &str) -> Result<(), String> {
    api::register(email, password).await
}

/// Terminate the session server-side, then clear the local identity
/// unconditionally: a failed server call still signs the browser out.
pub async fn logout() {
    api::logout().await;
    persistence::remove(USER_CACHE_KEY);
}
