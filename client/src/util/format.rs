//! Display formatting for record metadata and history captions.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Characters of summary text shown in a collapsed history entry.
const PREVIEW_CHARS: usize = 150;

/// Format a word count with thousands separators: `1234567` → `"1,234,567"`.
pub fn format_word_count(count: i64) -> String {
    let digits = count.unsigned_abs().to_string();
    let mut groups = Vec::new();
    let mut end = digits.len();
    while end > 3 {
        groups.push(&digits[end - 3..end]);
        end -= 3;
    }
    groups.push(&digits[..end]);
    groups.reverse();
    let joined = groups.join(",");
    if count < 0 { format!("-{joined}") } else { joined }
}

/// History caption with singular/plural phrasing: `"1 summary generated"`,
/// `"3 summaries generated"`.
pub fn summary_count_label(count: usize) -> String {
    let noun = if count == 1 { "summary" } else { "summaries" };
    format!("{count} {noun} generated")
}

/// Collapsed-history preview: the first 150 characters of the summary, with
/// an ellipsis when the text was cut. Truncation is by character, never
/// mid-way through a multi-byte sequence.
pub fn summary_preview(summary: &str) -> String {
    let mut chars = summary.char_indices();
    match chars.nth(PREVIEW_CHARS) {
        Some((byte_offset, _)) => format!("{}...", &summary[..byte_offset]),
        None => summary.to_owned(),
    }
}

/// Render an ISO 8601 timestamp for display.
///
/// In the browser this defers to the locale-aware `Date` formatter; SSR and
/// test builds pass the raw value through (the browser re-renders it on
/// hydration).
pub fn format_timestamp(iso: &str) -> String {
    #[cfg(feature = "hydrate")]
    {
        let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_str(iso));
        if date.get_time().is_nan() {
            return iso.to_owned();
        }
        let options = js_sys::Object::new();
        for (key, value) in [
            ("year", "numeric"),
            ("month", "short"),
            ("day", "numeric"),
            ("hour", "2-digit"),
            ("minute", "2-digit"),
        ] {
            let _ = js_sys::Reflect::set(
                &options,
                &wasm_bindgen::JsValue::from_str(key),
                &wasm_bindgen::JsValue::from_str(value),
            );
        }
        date.to_locale_string("en-US", &options).into()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        iso.to_owned()
    }
}
