//! Environment value parsing

const TRUTHY: [&str; 4] = ["1", "true", "yes", "on"];

/// Test a raw environment value for a case-insensitive affirmative token.
///
/// `1`, `true`, `yes` and `on` (after trimming) are truthy; anything else,
/// including an absent or empty value, is not.
pub fn is_truthy(value: Option<&str>) -> bool {
    match value {
        Some(raw) if !raw.is_empty() => {
            let normalized = raw.trim().to_lowercase();
            TRUTHY.contains(&normalized.as_str())
        }
        _ => false,
    }
}

/// Treat an empty value the same as an unset one
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
