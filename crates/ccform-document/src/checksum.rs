//! Weighted modulo-11 check digits shared by CPF and CNPJ.
//!
//! Both documents end in two check digits. Each one is computed from the
//! digits before it:
//!
//! ```text
//!   1    1    1    4    4    4    7    7    7
//! x10   x9   x8   x7   x6   x5   x4   x3   x2
//!  10 +  9 +  8 + 28 + 24 + 20 + 28 + 21 + 14 = 162
//!
//! 162 % 11 = 8  ->  11 - 8 = 3  ->  1114447773
//! ```
//!
//! A remainder below 2 yields check digit 0. CNPJ weights wrap from 2 back
//! to 9, so a 12-digit base is weighted 5,4,3,2,9,8,7,6,5,4,3,2.

use ccform_core::constants::{
    CHECKSUM_MODULUS, CNPJ_FIRST_WEIGHT, CNPJ_SECOND_WEIGHT, CPF_FIRST_WEIGHT, CPF_SECOND_WEIGHT,
    MIN_WEIGHT, WEIGHT_RESET,
};

/// Compute the next check digit for `digits`.
///
/// `start_weight` is the weight applied to the first digit; it decreases by
/// one per digit and wraps to 9 once it drops below 2. `running_sum` seeds
/// the weighted sum.
///
/// Non-digit characters are skipped and consume no weight.
///
/// # Examples
///
/// ```
/// use ccform_document::checksum::check_digit;
///
/// assert_eq!(check_digit("111444777", 10, 0), 3);
/// assert_eq!(check_digit("1114447773", 11, 0), 5);
/// ```
#[must_use]
pub fn check_digit(digits: &str, start_weight: u32, running_sum: u64) -> u8 {
    let mut weight = start_weight;
    // Only the sum modulo 11 matters, so keep it reduced
    let mut sum = running_sum % CHECKSUM_MODULUS;

    for digit in digits.chars().filter_map(|c| c.to_digit(10)) {
        sum = (sum + u64::from(digit) * u64::from(weight)) % CHECKSUM_MODULUS;

        weight = weight.saturating_sub(1);
        if weight < MIN_WEIGHT {
            weight = WEIGHT_RESET;
        }
    }

    let remainder = sum % CHECKSUM_MODULUS;
    if remainder < 2 {
        0
    } else {
        // remainder is 2..=10, so the digit is 1..=9
        (CHECKSUM_MODULUS - remainder) as u8
    }
}

/// Append the check digit of `digits` to `digits`.
///
/// Applied twice it completes a CPF (weights 10 then 11) or a CNPJ
/// (weights 5 then 6).
///
/// # Examples
///
/// ```
/// use ccform_document::check_digits_weighted_sum;
///
/// let first = check_digits_weighted_sum("111444777", 10, 0);
/// assert_eq!(first, "1114447773");
///
/// let cpf = check_digits_weighted_sum(&first, 11, 0);
/// assert_eq!(cpf, "11144477735");
/// ```
#[must_use]
pub fn check_digits_weighted_sum(digits: &str, start_weight: u32, running_sum: u64) -> String {
    let digit = check_digit(digits, start_weight, running_sum);
    let mut result = String::with_capacity(digits.len() + 1);
    result.push_str(digits);
    result.push(char::from(b'0' + digit));
    result
}

/// Append both CPF check digits to a base.
///
/// # Examples
///
/// ```
/// use ccform_document::checksum::complete_cpf;
///
/// assert_eq!(complete_cpf("529982247"), "52998224725");
/// ```
#[must_use]
pub fn complete_cpf(base: &str) -> String {
    let first = check_digits_weighted_sum(base, CPF_FIRST_WEIGHT, 0);
    check_digits_weighted_sum(&first, CPF_SECOND_WEIGHT, 0)
}

/// Append both CNPJ check digits to a base.
///
/// # Examples
///
/// ```
/// use ccform_document::checksum::complete_cnpj;
///
/// assert_eq!(complete_cnpj("112223330001"), "11222333000181");
/// ```
#[must_use]
pub fn complete_cnpj(base: &str) -> String {
    let first = check_digits_weighted_sum(base, CNPJ_FIRST_WEIGHT, 0);
    check_digits_weighted_sum(&first, CNPJ_SECOND_WEIGHT, 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("111444777", 10, 3)]
    #[case("1114447773", 11, 5)]
    #[case("529982247", 10, 2)]
    #[case("5299822472", 11, 5)]
    #[case("112223330001", 5, 8)]
    #[case("1122233300018", 6, 1)]
    fn test_check_digit(#[case] digits: &str, #[case] weight: u32, #[case] expected: u8) {
        assert_eq!(check_digit(digits, weight, 0), expected);
    }

    #[test]
    fn test_remainder_below_two_yields_zero() {
        // 0 * anything = 0, remainder 0
        assert_eq!(check_digit("000000000", 10, 0), 0);
        // 10 % 11 = 10 -> 1
        assert_eq!(check_digit("1", 10, 0), 1);
        // 12 % 11 = 1 -> 0
        assert_eq!(check_digit("6", 2, 0), 0);
    }

    #[test]
    fn test_running_sum_seeds_total() {
        // 11 + 0 -> remainder 0
        assert_eq!(check_digit("", 10, 11), 0);
        // 5 -> 11 - 5 = 6
        assert_eq!(check_digit("", 10, 5), 6);
        assert_eq!(check_digit("1", 2, 3), 6);
    }

    #[rstest]
    #[case("9", 10, u64::MAX)]
    #[case("111444777", 10, u64::MAX - 3)]
    #[case("99999999999999", u32::MAX, u64::MAX)]
    fn test_large_running_sum_does_not_overflow(
        #[case] digits: &str,
        #[case] start_weight: u32,
        #[case] running_sum: u64,
    ) {
        assert_eq!(
            check_digit(digits, start_weight, running_sum),
            check_digit(digits, start_weight, running_sum % 11)
        );
        let appended = check_digits_weighted_sum(digits, start_weight, running_sum);
        assert_eq!(appended.len(), digits.len() + 1);
    }

    #[test]
    fn test_weight_wraps_to_nine() {
        // weights: 2, 9, 8 -> 2 + 9 + 8 = 19 -> 19 % 11 = 8 -> 3
        assert_eq!(check_digit("111", 2, 0), 3);
    }

    #[test]
    fn test_cnpj_weight_cycle() {
        // With all ones the sum equals the sum of the weights.
        // 5+4+3+2+9+8+7+6+5+4+3+2 = 58 -> 58 % 11 = 3 -> 8
        assert_eq!(check_digit("111111111111", 5, 0), 8);
    }

    #[test]
    fn test_non_digits_are_skipped() {
        assert_eq!(
            check_digit("111.444.777", 10, 0),
            check_digit("111444777", 10, 0)
        );
    }

    #[test]
    fn test_weighted_sum_appends_digit() {
        assert_eq!(check_digits_weighted_sum("", 10, 0), "0");
        assert_eq!(check_digits_weighted_sum("111444777", 10, 0), "1114447773");
    }

    #[test]
    fn test_complete_documents() {
        assert_eq!(complete_cpf("111444777"), "11144477735");
        assert_eq!(complete_cnpj("112223330001"), "11222333000181");
    }
}
