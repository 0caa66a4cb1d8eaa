//! Shared auth routing guards.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components apply identical redirect behavior: the workspace is never
//! shown without a user, and the login page bounces signed-in users home.
//! Both guards wait for the startup probe to settle before navigating.

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

/// Redirect to `/login` whenever auth has settled and no user is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let state = auth.get();
        if !state.loading && state.user.is_none() {
            navigate("/login", NavigateOptions::default());
        }
    });
}

/// Redirect home whenever auth has settled with a signed-in user.
pub fn install_auth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let state = auth.get();
        if !state.loading && state.user.is_some() {
            navigate("/", NavigateOptions::default());
        }
    });
}
