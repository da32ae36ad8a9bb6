//! Per-field formatting rules.
//!
//! Each function is total: any input, including empty, yields display text.
//! They are idempotent, so a value can be reformatted on every keystroke.

use ccform_core::constants::{
    EXPIRY_MONTH_LENGTH, EXPIRY_SEPARATOR, NUMBER_GROUP_SEPARATOR, NUMBER_GROUP_WIDTH,
};
use ccform_core::sanitize::{limit_length, remove_leading_spaces, remove_non_number};
use ccform_document::format_document;

fn compact_number(number: &str, max_length: usize) -> String {
    let compact: String = remove_leading_spaces(number)
        .chars()
        .filter(|c| *c != NUMBER_GROUP_SEPARATOR)
        .collect();
    limit_length(&compact, max_length).to_string()
}

/// Group a card number in runs of four.
///
/// Leading whitespace and existing spaces are removed and the result is
/// truncated to `max_length` characters. A space follows every complete
/// group, including the last one.
///
/// # Examples
///
/// ```
/// use ccform_formatter::format_number;
///
/// assert_eq!(format_number("4111111111111111", 19), "4111 1111 1111 1111 ");
/// assert_eq!(format_number("  41111", 19), "4111 1");
/// assert_eq!(format_number("4111 1", 19), "4111 1");
/// ```
#[must_use]
pub fn format_number(number: &str, max_length: usize) -> String {
    let compact = compact_number(number, max_length);
    let mut out = String::with_capacity(compact.len() + compact.len() / NUMBER_GROUP_WIDTH);
    for (i, c) in compact.chars().enumerate() {
        out.push(c);
        if (i + 1) % NUMBER_GROUP_WIDTH == 0 {
            out.push(NUMBER_GROUP_SEPARATOR);
        }
    }
    out
}

/// Group a card number at brand-specific offsets.
///
/// Splits after each offset in `gaps` (ascending) and joins the non-empty
/// groups with single spaces. No trailing space is added.
///
/// # Examples
///
/// ```
/// use ccform_formatter::format_number_with_gaps;
///
/// assert_eq!(format_number_with_gaps("378282246310005", &[4, 10], 15), "3782 822463 10005");
/// assert_eq!(format_number_with_gaps("411111", &[4, 8, 12], 19), "4111 11");
/// ```
#[must_use]
pub fn format_number_with_gaps(number: &str, gaps: &[usize], max_length: usize) -> String {
    let chars: Vec<char> = compact_number(number, max_length).chars().collect();
    let len = chars.len();

    let mut groups: Vec<String> = Vec::with_capacity(gaps.len() + 1);
    let mut start = 0;
    for end in gaps.iter().copied().chain(std::iter::once(len)) {
        let end = end.min(len);
        if end > start {
            groups.push(chars[start..end].iter().collect());
            start = end;
        }
    }

    groups.join(" ")
}

/// Format an expiry date as `MM/YY` while it is typed.
///
/// Digits are kept and truncated to `max_length`. A lone digit 2-9 is
/// padded to a month (`"3"` becomes `"03"`). Past two digits a separator is
/// inserted after the month. Anything else is returned as typed.
///
/// # Examples
///
/// ```
/// use ccform_formatter::format_expiry;
///
/// assert_eq!(format_expiry("2", 4), "02");
/// assert_eq!(format_expiry("1", 4), "1");
/// assert_eq!(format_expiry("123", 4), "12/3");
/// assert_eq!(format_expiry("12/30", 4), "12/30");
/// ```
#[must_use]
pub fn format_expiry(expiry: &str, max_length: usize) -> String {
    let digits = remove_non_number(expiry);
    let digits = limit_length(&digits, max_length);

    match digits.as_bytes() {
        [month @ b'2'..=b'9'] => format!("0{}", char::from(*month)),
        _ if digits.len() > EXPIRY_MONTH_LENGTH => {
            let (month, year) = digits.split_at(EXPIRY_MONTH_LENGTH);
            format!("{month}{EXPIRY_SEPARATOR}{year}")
        }
        _ => digits.to_string(),
    }
}

/// Keep the digits of a security code, at most `size` of them.
#[must_use]
pub fn format_cvc(cvc: &str, size: usize) -> String {
    limit_length(&remove_non_number(cvc), size).to_string()
}

/// Strip leading whitespace from a cardholder name.
#[must_use]
pub fn format_name(name: &str) -> String {
    remove_leading_spaces(name).to_string()
}

/// Keep the digits of a postal code (CEP).
#[must_use]
pub fn format_postal_code(postal_code: &str) -> String {
    remove_non_number(postal_code)
}

/// Punctuate a CPF or CNPJ field. An absent value yields `""`.
///
/// # Examples
///
/// ```
/// use ccform_formatter::format_doc;
///
/// assert_eq!(format_doc(Some("111.444.77735")), "111.444.777-35");
/// assert_eq!(format_doc(Some("1114")), "1114");
/// assert_eq!(format_doc(None), "");
/// ```
#[must_use]
pub fn format_doc(doc: Option<&str>) -> String {
    format_document(doc).unwrap_or_default()
}
