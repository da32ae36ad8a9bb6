//! Common test utilities for document integration tests.
//!
//! Helpers build documents from a base with correct check digits, so tests
//! can state intent ("a valid CPF with this base") instead of hardcoding
//! precomputed digits.

#![allow(dead_code)]

use ccform_document::check_digits_weighted_sum;

/// Valid CPF, bare digits.
pub const VALID_CPF: &str = "11144477735";

/// Same CPF, punctuated.
pub const VALID_CPF_FORMATTED: &str = "111.444.777-35";

/// Valid CNPJ, bare digits.
pub const VALID_CNPJ: &str = "11222333000181";

/// Same CNPJ, punctuated.
pub const VALID_CNPJ_FORMATTED: &str = "11.222.333/0001-81";

/// Build a CPF from a 9-digit base by appending both check digits.
pub fn make_cpf(base: &str) -> String {
    let first = check_digits_weighted_sum(base, 10, 0);
    check_digits_weighted_sum(&first, 11, 0)
}

/// Build a CNPJ from a 12-digit base by appending both check digits.
pub fn make_cnpj(base: &str) -> String {
    let first = check_digits_weighted_sum(base, 5, 0);
    check_digits_weighted_sum(&first, 6, 0)
}

/// Replace the last digit with a different one.
///
/// # Panics
///
/// Panics if `digits` is empty or does not end in an ASCII digit.
pub fn corrupt_last_digit(digits: &str) -> String {
    let (head, last) = digits.split_at(digits.len() - 1);
    let last = last
        .chars()
        .next()
        .and_then(|c| c.to_digit(10))
        .expect("Test helper: last character must be a digit");
    format!("{}{}", head, (last + 1) % 10)
}

/// Whether all digits of `digits` are the same.
pub fn is_single_digit_repeated(digits: &str) -> bool {
    digits.chars().all(|c| Some(c) == digits.chars().next())
}
