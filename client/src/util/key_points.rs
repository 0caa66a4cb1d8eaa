//! Key-points text splitting.
//!
//! The backend returns `key_points` as one free-form string whose item
//! delimiters vary by summarizer model (bullet characters, newlines,
//! hyphens). Display code renders it as a list, so the split tolerates zero,
//! one, or many items and an absent field.

#[cfg(test)]
#[path = "key_points_test.rs"]
mod key_points_test;

/// Characters that terminate one key-point item.
const DELIMITERS: &[char] = &['•', '\n', '\r', '-'];

/// Maximum items shown in a collapsed history entry.
const CONDENSED_ITEM_CAP: usize = 3;

/// Split free-form key-points text into trimmed, non-empty display items.
pub fn split_key_points(key_points: Option<&str>) -> Vec<String> {
    let Some(text) = key_points else {
        return Vec::new();
    };
    text.split(DELIMITERS)
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

/// Condensed variant for collapsed history entries: the first three items
/// only. Purely cosmetic; the underlying record is untouched.
pub fn condensed_key_points(key_points: Option<&str>) -> Vec<String> {
    let mut items = split_key_points(key_points);
    items.truncate(CONDENSED_ITEM_CAP);
    items
}
