#![deny(unsafe_code)]

//! Free-text normalization for catalog fields.

use std::sync::LazyLock;

use regex::Regex;

static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));
static COMMA_SPACING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*,\s*").expect("valid regex"));

/// Normalize a free-text field value, mapping NULL-like inputs to `None`.
///
/// Rules, applied in order:
/// - `None` or the literal text `"nan"` (case-insensitive, ignoring
///   surrounding whitespace) becomes `None`;
/// - leading/trailing whitespace is stripped;
/// - any run of whitespace collapses to a single space;
/// - whitespace around commas collapses to exactly `", "`;
/// - an empty result becomes `None`.
///
/// Pure and idempotent: `normalize(normalize(x)) == normalize(x)`.
pub fn normalize(value: Option<&str>) -> Option<String> {
    let raw = value?;
    let trimmed = raw.trim();
    if trimmed.eq_ignore_ascii_case("nan") {
        return None;
    }
    let collapsed = WHITESPACE_RUN.replace_all(trimmed, " ");
    let spaced = COMMA_SPACING.replace_all(&collapsed, ", ");
    // A trailing comma would otherwise leave a dangling ", " at the end.
    let result = spaced.trim_end();
    if result.is_empty() {
        None
    } else {
        Some(result.to_string())
    }
}
