use super::*;

// =============================================================
// Extension filtering
// =============================================================

#[test]
fn supported_filenames_pass_the_filter() {
    assert!(is_supported_filename("moby-dick.pdf"));
    assert!(is_supported_filename("notes.txt"));
    assert!(is_supported_filename("draft.doc"));
    assert!(is_supported_filename("thesis.docx"));
}

#[test]
fn extension_check_is_case_insensitive() {
    assert!(is_supported_filename("MOBY-DICK.PDF"));
    assert!(is_supported_filename("Thesis.DocX"));
}

#[test]
fn unsupported_filenames_fail_the_filter() {
    assert!(!is_supported_filename("cover.png"));
    assert!(!is_supported_filename("archive.epub"));
    assert!(!is_supported_filename("no-extension"));
}

#[test]
fn extension_must_follow_a_dot() {
    assert!(!is_supported_filename("notxt"));
    assert!(!is_supported_filename("pdf"));
}

// =============================================================
// Accept attribute
// =============================================================

#[test]
fn accept_attribute_lists_every_supported_extension() {
    assert_eq!(accept_attribute(), ".pdf,.txt,.doc,.docx");
}
