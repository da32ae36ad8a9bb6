//! String sanitizers shared by every field formatter.
//!
//! All functions are total: they accept any input, including the empty
//! string, and never fail.

/// Keep only ASCII digits.
///
/// # Examples
///
/// ```
/// use ccform_core::sanitize::remove_non_number;
///
/// assert_eq!(remove_non_number("111.444.777-35"), "11144477735");
/// assert_eq!(remove_non_number("abc"), "");
/// ```
#[must_use]
pub fn remove_non_number(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

/// Strip whitespace at the start of the string only.
///
/// # Examples
///
/// ```
/// use ccform_core::sanitize::remove_leading_spaces;
///
/// assert_eq!(remove_leading_spaces("  Maria Silva "), "Maria Silva ");
/// ```
#[must_use]
pub fn remove_leading_spaces(value: &str) -> &str {
    value.trim_start()
}

/// Keep at most `max_length` characters.
///
/// Counts characters, not bytes, so multi-byte input is never split.
///
/// # Examples
///
/// ```
/// use ccform_core::sanitize::limit_length;
///
/// assert_eq!(limit_length("123456", 4), "1234");
/// assert_eq!(limit_length("12", 4), "12");
/// ```
#[must_use]
pub fn limit_length(value: &str, max_length: usize) -> &str {
    match value.char_indices().nth(max_length) {
        Some((idx, _)) => &value[..idx],
        None => value,
    }
}
