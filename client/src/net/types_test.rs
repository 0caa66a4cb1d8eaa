use super::*;

fn record_json() -> &'static str {
    r#"{
        "id": "s1",
        "user_id": "u1",
        "summary": "A long book, shortened.",
        "key_points": "• First\n• Second",
        "word_count": 84123,
        "file_type": "pdf",
        "created_at": "2025-06-01T12:30:00Z"
    }"#
}

// =============================================================
// SummaryRecord deserialization
// =============================================================

#[test]
fn summary_record_deserializes_all_fields() {
    let record: SummaryRecord = serde_json::from_str(record_json()).unwrap();
    assert_eq!(record.id, "s1");
    assert_eq!(record.user_id, "u1");
    assert_eq!(record.summary, "A long book, shortened.");
    assert_eq!(record.key_points.as_deref(), Some("• First\n• Second"));
    assert_eq!(record.word_count, 84123);
    assert_eq!(record.file_type, "pdf");
    assert_eq!(record.created_at, "2025-06-01T12:30:00Z");
}

#[test]
fn summary_record_tolerates_missing_key_points() {
    let json = r#"{
        "id": "s2",
        "user_id": "u1",
        "summary": "No points extracted.",
        "word_count": 10,
        "file_type": "txt",
        "created_at": "2025-06-02T00:00:00Z"
    }"#;
    let record: SummaryRecord = serde_json::from_str(json).unwrap();
    assert!(record.key_points.is_none());
}

#[test]
fn summary_record_tolerates_null_key_points() {
    let json = r#"{
        "id": "s3",
        "user_id": "u1",
        "summary": "Null points.",
        "key_points": null,
        "word_count": 10,
        "file_type": "txt",
        "created_at": "2025-06-02T00:00:00Z"
    }"#;
    let record: SummaryRecord = serde_json::from_str(json).unwrap();
    assert!(record.key_points.is_none());
}

#[test]
fn summary_record_accepts_float_word_count() {
    let json = r#"{
        "id": "s4",
        "user_id": "u1",
        "summary": "Float count.",
        "key_points": "",
        "word_count": 1200.0,
        "file_type": "docx",
        "created_at": "2025-06-02T00:00:00Z"
    }"#;
    let record: SummaryRecord = serde_json::from_str(json).unwrap();
    assert_eq!(record.word_count, 1200);
}

#[test]
fn summary_record_rejects_string_word_count() {
    let json = r#"{
        "id": "s5",
        "user_id": "u1",
        "summary": "Bad count.",
        "word_count": "many",
        "file_type": "txt",
        "created_at": "2025-06-02T00:00:00Z"
    }"#;
    assert!(serde_json::from_str::<SummaryRecord>(json).is_err());
}

// =============================================================
// User cache round trip
// =============================================================

#[test]
fn user_round_trips_through_json() {
    let user = User {
        user_id: "local".to_owned(),
        email: "reader@example.com".to_owned(),
    };
    let raw = serde_json::to_string(&user).unwrap();
    let back: User = serde_json::from_str(&raw).unwrap();
    assert_eq!(back, user);
}
