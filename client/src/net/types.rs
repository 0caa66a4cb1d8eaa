//! Wire DTOs for the summarizer backend API.
//!
//! DESIGN
//! ======
//! The backend owns these records; the client holds read-only, disposable
//! copies. Fields deserialize tolerantly rather than strictly so older
//! records and model-to-model drift in the backend don't break rendering.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// The authenticated identity for the current browser session.
///
/// Synthesized client-side on login (the auth endpoints return no identity
/// object) and cached in localStorage until logout or a failed session probe.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Backend user identifier.
    pub user_id: String,
    /// Email address the user signed in with.
    pub email: String,
}

/// One completed summarization, as returned by the backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRecord {
    /// Unique record identifier.
    pub id: String,
    /// Owner of the record.
    pub user_id: String,
    /// Full summary text.
    pub summary: String,
    /// Free-form key-points text. Item delimiters vary by summarizer model
    /// and older records may omit the field entirely.
    #[serde(default)]
    pub key_points: Option<String>,
    /// Word count of the uploaded document.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub word_count: i64,
    /// Original file category (e.g. `"pdf"`, `"txt"`).
    pub file_type: String,
    /// ISO 8601 creation timestamp.
    pub created_at: String,
}

fn deserialize_i64_from_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(i)
            } else if let Some(f) = n.as_f64() {
                #[allow(clippy::cast_possible_truncation)]
                Ok(f as i64)
            } else {
                Err(D::Error::custom("number out of i64 range"))
            }
        }
        other => Err(D::Error::custom(format!("expected number, got {other}"))),
    }
}
