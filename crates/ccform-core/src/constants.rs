//! Core constants for card and document field formatting.
//!
//! This module centralizes every length, weight and separator used by the
//! formatter and the CPF/CNPJ validator, so both components agree on the
//! same masks and check-digit parameters.
//!
//! # Masks
//!
//! | Field | Mask | Example |
//! |-------|------|---------|
//! | Card number | groups of 4 | `4111 1111 1111 1111 ` |
//! | Expiry | `MM/YY` | `12/30` |
//! | CPF | `XXX.XXX.XXX-XX` | `111.444.777-35` |
//! | CNPJ | `XX.XXX.XXX/XXXX-XX` | `11.222.333/0001-81` |
//!
//! # Usage
//!
//! ```
//! use ccform_core::constants::*;
//!
//! assert_eq!(CPF_LENGTH, CPF_BASE_LENGTH + 2);
//! assert_eq!(CNPJ_LENGTH, CNPJ_BASE_LENGTH + 2);
//! ```

// ============================================================================
// Card Number
// ============================================================================

/// Maximum number of characters kept from a card number.
///
/// 19 is the longest PAN issued by any scheme (Maestro, UnionPay, JCB).
///
/// # Value: 19 characters
pub const NUMBER_MAX_LENGTH: usize = 19;

/// Width of each group when the number is split at fixed offsets.
///
/// # Examples
///
/// ```
/// use ccform_core::constants::NUMBER_GROUP_WIDTH;
///
/// let groups: Vec<String> = "41111111"
///     .chars()
///     .collect::<Vec<_>>()
///     .chunks(NUMBER_GROUP_WIDTH)
///     .map(|c| c.iter().collect())
///     .collect();
/// assert_eq!(groups, vec!["4111", "1111"]);
/// ```
pub const NUMBER_GROUP_WIDTH: usize = 4;

/// Separator inserted between card number groups.
pub const NUMBER_GROUP_SEPARATOR: char = ' ';

// ============================================================================
// Fallback Card
// ============================================================================

/// Gap offsets of the generic card used when no brand matches.
pub const FALLBACK_GAPS: &[usize] = &[4, 8, 12];

/// Valid lengths of the generic card used when no brand matches.
pub const FALLBACK_LENGTHS: &[usize] = &[19];

/// Security code size of the generic card used when no brand matches.
///
/// # Value: 3 digits
pub const FALLBACK_CVC_SIZE: usize = 3;

// ============================================================================
// Expiry
// ============================================================================

/// Maximum number of digits kept from an expiry date (`MMYY`).
pub const EXPIRY_MAX_LENGTH: usize = 4;

/// Number of digits in the month part of an expiry date.
pub const EXPIRY_MONTH_LENGTH: usize = 2;

/// Separator between month and year.
pub const EXPIRY_SEPARATOR: char = '/';

// ============================================================================
// CPF / CNPJ
// ============================================================================

/// Total length of a CPF, check digits included.
///
/// # Value: 11 digits
pub const CPF_LENGTH: usize = 11;

/// Number of CPF digits that feed the first check digit.
pub const CPF_BASE_LENGTH: usize = 9;

/// Total length of a CNPJ, check digits included.
///
/// # Value: 14 digits
pub const CNPJ_LENGTH: usize = 14;

/// Number of CNPJ digits that feed the first check digit.
pub const CNPJ_BASE_LENGTH: usize = 12;

/// Starting weight for the first CPF check digit (10, 9, ..., 2).
pub const CPF_FIRST_WEIGHT: u32 = 10;

/// Starting weight for the second CPF check digit (11, 10, ..., 2).
pub const CPF_SECOND_WEIGHT: u32 = 11;

/// Starting weight for the first CNPJ check digit.
///
/// Weights run 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2 over the 12 base digits.
pub const CNPJ_FIRST_WEIGHT: u32 = 5;

/// Starting weight for the second CNPJ check digit.
///
/// Weights run 6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2 over 13 digits.
pub const CNPJ_SECOND_WEIGHT: u32 = 6;

/// Modulus of the check-digit sum.
pub const CHECKSUM_MODULUS: u64 = 11;

/// Lowest weight before the counter wraps back to [`WEIGHT_RESET`].
pub const MIN_WEIGHT: u32 = 2;

/// Weight the counter restarts from once it drops below [`MIN_WEIGHT`].
pub const WEIGHT_RESET: u32 = 9;
