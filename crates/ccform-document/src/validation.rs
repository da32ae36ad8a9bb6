//! CPF and CNPJ check-digit validation.
//!
//! Validation recomputes both check digits from the base digits and
//! requires the rebuilt document to match the sanitized input exactly, so
//! a wrong length is rejected by the same comparison as a wrong digit.
//!
//! Documents made of a single repeated digit (`111.111.111-11`,
//! `000.000.000-00`) satisfy the checksum but are never issued, and are
//! rejected.

use crate::checksum::check_digits_weighted_sum;
use crate::classify::{DocumentKind, classify};
use ccform_core::sanitize::{limit_length, remove_non_number};
use subtle::ConstantTimeEq;
use tracing::trace;

/// Rebuild a document of `kind` from the base digits of `digits`.
///
/// Takes the first `kind.base_length()` digits and appends both check
/// digits. `digits` must already be sanitized.
pub(crate) fn rebuild(kind: DocumentKind, digits: &str) -> String {
    let (first_weight, second_weight) = kind.weights();
    let base = limit_length(digits, kind.base_length());
    let first = check_digits_weighted_sum(base, first_weight, 0);
    check_digits_weighted_sum(&first, second_weight, 0)
}

/// Whether every digit equals the first one.
pub(crate) fn is_repeated_digit(digits: &str) -> bool {
    let mut bytes = digits.bytes();
    match bytes.next() {
        Some(first) => bytes.all(|b| b == first),
        None => false,
    }
}

fn verify(kind: DocumentKind, raw: &str) -> bool {
    let digits = remove_non_number(raw);

    if is_repeated_digit(&digits) {
        trace!("Rejected {} made of a single repeated digit", kind);
        return false;
    }

    let rebuilt = rebuild(kind, &digits);

    // Constant-time: document numbers are personal data
    let valid: bool = rebuilt.as_bytes().ct_eq(digits.as_bytes()).into();
    trace!("{} check digits valid: {}", kind, valid);
    valid
}

/// Validate a CPF, with or without punctuation.
///
/// # Examples
///
/// ```
/// use ccform_document::is_valid_cpf;
///
/// assert!(is_valid_cpf("111.444.777-35"));
/// assert!(is_valid_cpf("52998224725"));
/// assert!(!is_valid_cpf("111.444.777-36"));
/// assert!(!is_valid_cpf("11111111111"));
/// ```
#[must_use]
pub fn is_valid_cpf(raw: &str) -> bool {
    verify(DocumentKind::Cpf, raw)
}

/// Validate a CNPJ, with or without punctuation.
///
/// # Examples
///
/// ```
/// use ccform_document::is_valid_cnpj;
///
/// assert!(is_valid_cnpj("11.222.333/0001-81"));
/// assert!(!is_valid_cnpj("11.222.333/0001-82"));
/// ```
#[must_use]
pub fn is_valid_cnpj(raw: &str) -> bool {
    verify(DocumentKind::Cnpj, raw)
}

/// Classify `raw` and validate it as CPF or CNPJ.
///
/// Input that is neither 11 nor 14 digits long is invalid. An absent
/// value is validated as the empty string (`value.unwrap_or_default()`),
/// which is never valid.
///
/// # Examples
///
/// ```
/// use ccform_document::is_valid_document;
///
/// assert!(is_valid_document("111.444.777-35"));
/// assert!(is_valid_document("11222333000181"));
/// assert!(!is_valid_document("1234"));
/// assert!(!is_valid_document(""));
/// ```
#[must_use]
pub fn is_valid_document(raw: &str) -> bool {
    match classify(raw).kind() {
        Some(kind) => verify(kind, raw),
        None => false,
    }
}
