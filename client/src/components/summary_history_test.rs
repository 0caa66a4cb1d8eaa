use super::*;

// =============================================================
// Expand-state toggling
// =============================================================

#[test]
fn toggle_adds_an_unexpanded_id() {
    let mut expanded = HashSet::new();
    assert!(toggle_expanded(&mut expanded, "s1"));
    assert!(expanded.contains("s1"));
}

#[test]
fn toggle_removes_an_expanded_id() {
    let mut expanded = HashSet::from(["s1".to_owned()]);
    assert!(!toggle_expanded(&mut expanded, "s1"));
    assert!(expanded.is_empty());
}

#[test]
fn entries_toggle_independently() {
    let mut expanded = HashSet::new();
    toggle_expanded(&mut expanded, "s1");
    toggle_expanded(&mut expanded, "s2");
    toggle_expanded(&mut expanded, "s1");
    assert!(!expanded.contains("s1"));
    assert!(expanded.contains("s2"));
}
