use super::*;

// =============================================================
// split_key_points
// =============================================================

#[test]
fn split_handles_mixed_delimiters() {
    let items = split_key_points(Some("• Point A\nPoint B- Point C"));
    assert_eq!(items, vec!["Point A", "Point B", "Point C"]);
}

#[test]
fn split_of_absent_text_is_empty() {
    assert!(split_key_points(None).is_empty());
}

#[test]
fn split_of_empty_text_is_empty() {
    assert!(split_key_points(Some("")).is_empty());
}

#[test]
fn split_drops_items_that_trim_to_nothing() {
    assert!(split_key_points(Some("•  \n - \r\n")).is_empty());
}

#[test]
fn split_of_undelimited_text_is_one_item() {
    let items = split_key_points(Some("  The whole thing is one point  "));
    assert_eq!(items, vec!["The whole thing is one point"]);
}

#[test]
fn split_tolerates_windows_line_endings() {
    let items = split_key_points(Some("First\r\nSecond"));
    assert_eq!(items, vec!["First", "Second"]);
}

// =============================================================
// condensed_key_points
// =============================================================

#[test]
fn condensed_caps_at_three_items() {
    let items = condensed_key_points(Some("• A\n• B\n• C\n• D\n• E"));
    assert_eq!(items, vec!["A", "B", "C"]);
}

#[test]
fn condensed_keeps_short_lists_intact() {
    let items = condensed_key_points(Some("• A\n• B"));
    assert_eq!(items, vec!["A", "B"]);
}
