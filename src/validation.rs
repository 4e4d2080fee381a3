//! Request field checks. A field counts as missing when it is absent, null,
//! an empty string, or zero.

/// Returns the trimmed value, or `None` when it is missing or blank.
pub fn required_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Returns the value untouched when present and non-empty. Used for
/// passwords, where surrounding whitespace is significant.
pub fn required_secret(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

pub fn required_number(value: Option<i64>) -> Option<i64> {
    value.filter(|v| *v != 0)
}

/// Empty optional strings are stored as NULL.
pub fn optional_text(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
