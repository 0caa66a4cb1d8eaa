#![cfg(not(feature = "hydrate"))]

use futures::executor::block_on;

use super::*;

// =============================================================
// Identity synthesis
// =============================================================

#[test]
fn user_for_email_carries_the_submitted_email() {
    let user = user_for_email("reader@example.com");
    assert_eq!(user.email, "reader@example.com");
    assert_eq!(user.user_id, LOCAL_USER_ID);
}

// =============================================================
// Stub behavior outside the browser
// =============================================================

#[test]
fn restore_resolves_unauthenticated_without_a_browser() {
    assert!(block_on(restore()).is_none());
}

#[test]
fn login_fails_cleanly_without_a_browser() {
    let result = block_on(login("reader@example.com", "hunter2"));
    assert_eq!(result, Err("not available on server".to_owned()));
}

#[test]
fn register_fails_cleanly_without_a_browser() {
    let result = block_on(register("reader@example.com", "hunter2"));
    assert_eq!(result, Err("not available on server".to_owned()));
}

#[test]
fn logout_is_a_safe_no_op_without_a_browser() {
    block_on(logout());
}
