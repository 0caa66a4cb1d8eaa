use super::*;

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_starts_loading_with_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(state.loading);
    assert!(!state.is_authenticated());
}

// =============================================================
// Settled states
// =============================================================

#[test]
fn settled_without_user_is_unauthenticated() {
    let state = AuthState::settled(None);
    assert!(!state.loading);
    assert!(!state.is_authenticated());
}

#[test]
fn settled_with_user_is_authenticated() {
    let user = User {
        user_id: "local".to_owned(),
        email: "reader@example.com".to_owned(),
    };
    let state = AuthState::settled(Some(user.clone()));
    assert!(!state.loading);
    assert!(state.is_authenticated());
    assert_eq!(state.user, Some(user));
}
