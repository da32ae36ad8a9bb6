//! CPF and CNPJ punctuation.

use ccform_core::constants::{CNPJ_LENGTH, CPF_LENGTH};
use ccform_core::sanitize::remove_non_number;

/// Punctuation pattern for an 11-digit CPF. `#` stands for one digit.
pub const CPF_MASK: &str = "###.###.###-##";

/// Punctuation pattern for a 14-digit CNPJ. `#` stands for one digit.
pub const CNPJ_MASK: &str = "##.###.###/####-##";

/// Fill `mask` with `digits`, one digit per `#`.
///
/// `digits` must hold exactly as many characters as `mask` has `#`.
pub(crate) fn apply_mask(digits: &str, mask: &str) -> String {
    let mut digits = digits.chars();
    let mut out = String::with_capacity(mask.len());
    for slot in mask.chars() {
        if slot == '#' {
            if let Some(digit) = digits.next() {
                out.push(digit);
            }
        } else {
            out.push(slot);
        }
    }
    out
}

/// Punctuate a document for display.
///
/// Returns `None` for absent input. Non-digit characters are dropped first.
/// Then:
///
/// - 11 digits are punctuated as a CPF (`111.444.777-35`).
/// - Every complete run of 14 digits is punctuated as a CNPJ
///   (`11.222.333/0001-81`), and trailing digits are kept as typed.
/// - Any shorter input is returned as bare digits, so a partially typed
///   document stays visible.
///
/// Use [`Document`](crate::Document) when only complete, valid documents
/// should be punctuated.
///
/// # Examples
///
/// ```
/// use ccform_document::format_document;
///
/// assert_eq!(format_document(Some("11144477735")).as_deref(), Some("111.444.777-35"));
/// assert_eq!(format_document(Some("11222333000181")).as_deref(), Some("11.222.333/0001-81"));
/// assert_eq!(format_document(Some("1122")).as_deref(), Some("1122"));
/// assert_eq!(format_document(None), None);
/// ```
#[must_use]
pub fn format_document(digits: Option<&str>) -> Option<String> {
    let digits = remove_non_number(digits?);

    if digits.len() == CPF_LENGTH {
        return Some(apply_mask(&digits, CPF_MASK));
    }

    let full = digits.len() - digits.len() % CNPJ_LENGTH;
    let (chunks, rest) = digits.split_at(full);

    // Digits are ASCII, so byte chunks are valid str boundaries
    let mut out = String::with_capacity(digits.len() + 4 * (full / CNPJ_LENGTH));
    for chunk in chunks.as_bytes().chunks(CNPJ_LENGTH) {
        let chunk = std::str::from_utf8(chunk).unwrap_or_default();
        out.push_str(&apply_mask(chunk, CNPJ_MASK));
    }
    out.push_str(rest);
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("11144477735", "111.444.777-35")]
    #[case("111.444.777-35", "111.444.777-35")]
    #[case("11222333000181", "11.222.333/0001-81")]
    #[case("11.222.333/0001-81", "11.222.333/0001-81")]
    #[case("", "")]
    #[case("1", "1")]
    #[case("1114447773", "1114447773")] // 10 digits, still typing
    #[case("112223330001", "112223330001")] // 12 digits
    #[case("112223330001811", "11.222.333/0001-811")] // overflow kept
    fn test_format_document(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(format_document(Some(input)).as_deref(), Some(expected));
    }

    #[test]
    fn test_format_document_none() {
        assert_eq!(format_document(None), None);
    }

    #[test]
    fn test_format_document_repeats_cnpj_mask() {
        let input = "1122233300018111222333000181";
        assert_eq!(
            format_document(Some(input)).as_deref(),
            Some("11.222.333/0001-8111.222.333/0001-81")
        );
    }

    #[test]
    fn test_format_does_not_validate() {
        // Punctuation only depends on length
        assert_eq!(
            format_document(Some("12345678900")).as_deref(),
            Some("123.456.789-00")
        );
    }

    #[test]
    fn test_apply_mask() {
        assert_eq!(apply_mask("11144477735", CPF_MASK), "111.444.777-35");
        assert_eq!(apply_mask("11222333000181", CNPJ_MASK), "11.222.333/0001-81");
    }
}
