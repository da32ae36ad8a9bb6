//! Built-in card brand table.
//!
//! Brands are recognized from the leading digits of a possibly partial
//! number. Every brand lists prefix patterns, each either a single prefix
//! (`4`) or an inclusive range (`51..=55`). A pattern matches when it agrees
//! with the number on their shared leading digits, so `"5"` already matches
//! the `51..=55` range.
//!
//! A match is *strong* once the number is at least as long as the pattern.
//! When every candidate brand matched strongly, the longest pattern wins
//! (`6011` beats the Maestro `6`). Otherwise a brand is reported only when
//! it is the sole candidate.

use crate::brand::{BrandKind, CardBrand, SecurityCode};
use crate::traits::BrandLookup;
use tracing::trace;

/// Leading-digit pattern of a brand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pattern {
    Prefix(u32),
    /// Inclusive range; both bounds have the same number of digits.
    Range(u32, u32),
}

impl Pattern {
    /// Number of digits the pattern covers, also its match strength.
    fn len(self) -> usize {
        match self {
            Pattern::Prefix(prefix) | Pattern::Range(prefix, _) => prefix.to_string().len(),
        }
    }

    /// Whether the pattern agrees with `number` on their shared digits.
    ///
    /// `number` must be non-empty and ASCII digits only.
    fn matches(self, number: &str) -> bool {
        match self {
            Pattern::Prefix(prefix) => {
                let prefix = prefix.to_string();
                prefix.starts_with(number) || number.starts_with(&prefix)
            }
            Pattern::Range(min, max) => {
                let (min, max) = (min.to_string(), max.to_string());
                let shared = min.len().min(number.len());
                let truncate = |bound: &str| bound[..shared.min(bound.len())].parse::<u32>();
                match (number[..shared].parse::<u32>(), truncate(&min), truncate(&max)) {
                    (Ok(value), Ok(low), Ok(high)) => (low..=high).contains(&value),
                    _ => false,
                }
            }
        }
    }
}

struct BrandEntry {
    brand: CardBrand,
    patterns: &'static [Pattern],
}

impl BrandEntry {
    /// `Some(strength)` for the first matching pattern, where strength is
    /// `None` until `number` covers the whole pattern.
    fn match_strength(&self, number: &str) -> Option<Option<usize>> {
        self.patterns
            .iter()
            .find(|pattern| pattern.matches(number))
            .map(|pattern| {
                let len = pattern.len();
                (number.len() >= len).then_some(len)
            })
    }
}

const STANDARD_GAPS: &[usize] = &[4, 8, 12];

const fn brand(
    kind: BrandKind,
    nice_type: &'static str,
    gaps: &'static [usize],
    lengths: &'static [usize],
    code_name: &'static str,
    code_size: usize,
) -> CardBrand {
    CardBrand {
        kind,
        nice_type,
        gaps,
        lengths,
        code: SecurityCode {
            name: code_name,
            size: code_size,
        },
    }
}

use Pattern::{Prefix, Range};

// ============================================================================
// Brand Table (lookup order)
// ============================================================================

const BRANDS: &[BrandEntry] = &[
    BrandEntry {
        brand: brand(BrandKind::Visa, "Visa", STANDARD_GAPS, &[16, 18, 19], "CVV", 3),
        patterns: &[Prefix(4)],
    },
    BrandEntry {
        brand: brand(BrandKind::Mastercard, "Mastercard", STANDARD_GAPS, &[16], "CVC", 3),
        patterns: &[
            Range(51, 55),
            Range(2221, 2229),
            Range(223, 229),
            Range(23, 26),
            Range(270, 271),
            Prefix(2720),
        ],
    },
    BrandEntry {
        brand: brand(
            BrandKind::AmericanExpress,
            "American Express",
            &[4, 10],
            &[15],
            "CID",
            4,
        ),
        patterns: &[Prefix(34), Prefix(37)],
    },
    BrandEntry {
        brand: brand(BrandKind::DinersClub, "Diners Club", &[4, 10], &[14, 16, 19], "CVV", 3),
        patterns: &[Range(300, 305), Prefix(36), Prefix(38), Prefix(39)],
    },
    BrandEntry {
        brand: brand(BrandKind::Discover, "Discover", STANDARD_GAPS, &[16, 19], "CID", 3),
        patterns: &[Prefix(6011), Range(644, 649), Prefix(65)],
    },
    BrandEntry {
        brand: brand(BrandKind::Jcb, "JCB", STANDARD_GAPS, &[16, 17, 18, 19], "CVV", 3),
        patterns: &[Prefix(2131), Prefix(1800), Range(3528, 3589)],
    },
    BrandEntry {
        brand: brand(
            BrandKind::Unionpay,
            "UnionPay",
            STANDARD_GAPS,
            &[14, 15, 16, 17, 18, 19],
            "CVN",
            3,
        ),
        patterns: &[
            Prefix(620),
            Range(624, 626),
            Range(62100, 62182),
            Range(62184, 62187),
            Range(62185, 62197),
            Range(62200, 62205),
            Range(622010, 622999),
            Prefix(622018),
            Range(622019, 622999),
            Range(62207, 62209),
            Range(622126, 622925),
            Range(623, 626),
            Prefix(6270),
            Prefix(6272),
            Prefix(6276),
            Range(627700, 627779),
            Range(627781, 627799),
            Range(6282, 6289),
            Prefix(6291),
            Prefix(6292),
            Prefix(810),
            Range(8110, 8131),
            Range(8132, 8151),
            Range(8152, 8163),
            Range(8164, 8171),
        ],
    },
    BrandEntry {
        brand: brand(
            BrandKind::Maestro,
            "Maestro",
            STANDARD_GAPS,
            &[12, 13, 14, 15, 16, 17, 18, 19],
            "CVC",
            3,
        ),
        patterns: &[
            Prefix(493698),
            Range(500000, 504174),
            Range(504176, 506698),
            Range(506779, 508999),
            Range(56, 59),
            Prefix(63),
            Prefix(67),
            Prefix(6),
        ],
    },
    BrandEntry {
        brand: brand(BrandKind::Elo, "Elo", STANDARD_GAPS, &[16], "CVE", 3),
        patterns: &[
            Prefix(401178),
            Prefix(401179),
            Prefix(438935),
            Prefix(457631),
            Prefix(457632),
            Prefix(431274),
            Prefix(451416),
            Prefix(457393),
            Prefix(504175),
            Range(506699, 506778),
            Range(509000, 509999),
            Prefix(627780),
            Prefix(636297),
            Prefix(636368),
            Range(650031, 650033),
            Range(650035, 650051),
            Range(650405, 650439),
            Range(650485, 650538),
            Range(650541, 650598),
            Range(650700, 650718),
            Range(650720, 650727),
            Range(650901, 650978),
            Range(651652, 651679),
            Range(655000, 655019),
            Range(655021, 655058),
        ],
    },
    BrandEntry {
        brand: brand(BrandKind::Mir, "Mir", STANDARD_GAPS, &[16, 17, 18, 19], "CVP2", 3),
        patterns: &[Range(2200, 2204)],
    },
    BrandEntry {
        brand: brand(BrandKind::Hiper, "Hiper", STANDARD_GAPS, &[16], "CVC", 3),
        patterns: &[
            Prefix(637095),
            Prefix(63737423),
            Prefix(63743358),
            Prefix(637568),
            Prefix(637599),
            Prefix(637609),
            Prefix(637612),
        ],
    },
    BrandEntry {
        brand: brand(BrandKind::Hipercard, "Hipercard", STANDARD_GAPS, &[16], "CVC", 3),
        patterns: &[Prefix(606282)],
    },
];

/// Brand lookup backed by the built-in scheme table.
///
/// Spaces, tabs and dashes in the number are ignored. Any other non-digit
/// character, or an empty number, yields `None`.
///
/// # Examples
///
/// ```
/// use ccform_formatter::{BrandKind, BrandLookup, BuiltinBrandLookup};
///
/// let lookup = BuiltinBrandLookup;
/// assert_eq!(lookup.lookup("4111 1111 1111 1111").map(|b| b.kind), Some(BrandKind::Visa));
/// assert_eq!(lookup.lookup("6011").map(|b| b.kind), Some(BrandKind::Discover));
///
/// // Too short to tell Visa from Elo apart
/// assert!(lookup.lookup("4").is_none());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinBrandLookup;

impl BuiltinBrandLookup {
    /// Static data for `kind`.
    #[must_use]
    pub fn brand(kind: BrandKind) -> Option<CardBrand> {
        BRANDS
            .iter()
            .map(|entry| entry.brand)
            .find(|brand| brand.kind == kind)
    }
}

impl BrandLookup for BuiltinBrandLookup {
    fn lookup(&self, number: &str) -> Option<CardBrand> {
        let number: String = number
            .chars()
            .filter(|c| *c != '-' && !c.is_whitespace())
            .collect();

        // Empty input matches every brand, so none can be singled out
        if number.is_empty() || !number.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        let candidates: Vec<(CardBrand, Option<usize>)> = BRANDS
            .iter()
            .filter_map(|entry| {
                entry
                    .match_strength(&number)
                    .map(|strength| (entry.brand, strength))
            })
            .collect();

        trace!(
            "Brand candidates for {} digits: {}",
            number.len(),
            candidates.len()
        );

        let strong: Option<Vec<(CardBrand, usize)>> = candidates
            .iter()
            .map(|(brand, strength)| strength.map(|s| (*brand, s)))
            .collect();

        match strong {
            Some(strong) if !strong.is_empty() => strong
                .into_iter()
                .reduce(|best, next| if next.1 > best.1 { next } else { best })
                .map(|(brand, _)| brand),
            _ => match candidates.as_slice() {
                [(brand, _)] => Some(*brand),
                _ => None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn kind_of(number: &str) -> Option<BrandKind> {
        BuiltinBrandLookup.lookup(number).map(|brand| brand.kind)
    }

    #[rstest]
    #[case("4111111111111111", BrandKind::Visa)]
    #[case("4111 1111 1111 1111 ", BrandKind::Visa)]
    #[case("5555555555554444", BrandKind::Mastercard)]
    #[case("2221000000000009", BrandKind::Mastercard)]
    #[case("378282246310005", BrandKind::AmericanExpress)]
    #[case("3782-822463-10005", BrandKind::AmericanExpress)]
    #[case("37", BrandKind::AmericanExpress)]
    #[case("30569309025904", BrandKind::DinersClub)]
    #[case("6011111111111117", BrandKind::Discover)]
    #[case("3530111333300000", BrandKind::Jcb)]
    #[case("6362970000457013", BrandKind::Elo)]
    #[case("2200000000000000", BrandKind::Mir)]
    #[case("6062825624254001", BrandKind::Hipercard)]
    #[case("6370950000000005", BrandKind::Hiper)]
    fn test_lookup_known(#[case] number: &str, #[case] expected: BrandKind) {
        assert_eq!(kind_of(number), Some(expected));
    }

    #[rstest]
    #[case("")] // every brand is a candidate
    #[case("   ")]
    #[case("3")] // amex, diners and jcb
    #[case("4")] // visa and elo, elo not yet strong
    #[case("5")]
    #[case("4111a")] // non-digit
    #[case("9999")] // no brand
    fn test_lookup_ambiguous_or_unknown(#[case] number: &str) {
        assert_eq!(kind_of(number), None);
    }

    #[test]
    fn test_longest_pattern_wins() {
        // Maestro matches on `6`, Discover on `6011`
        assert_eq!(kind_of("6011"), Some(BrandKind::Discover));
        assert_eq!(kind_of("6"), None);
    }

    #[rstest]
    #[case(Prefix(4), "4111", true)]
    #[case(Prefix(4), "5", false)]
    #[case(Prefix(6011), "60", true)] // partial number
    #[case(Prefix(6011), "6012", false)]
    #[case(Range(51, 55), "5", true)]
    #[case(Range(51, 55), "53", true)]
    #[case(Range(51, 55), "56", false)]
    #[case(Range(2221, 2229), "222", true)]
    #[case(Range(2221, 2229), "2230", false)]
    #[case(Range(300, 305), "3059", true)]
    fn test_pattern_matches(
        #[case] pattern: Pattern,
        #[case] number: &str,
        #[case] expected: bool,
    ) {
        assert_eq!(pattern.matches(number), expected);
    }

    #[test]
    fn test_pattern_len() {
        assert_eq!(Prefix(4).len(), 1);
        assert_eq!(Range(622126, 622925).len(), 6);
    }

    #[test]
    fn test_table_covers_every_kind_in_order() {
        let kinds: Vec<BrandKind> = BRANDS.iter().map(|entry| entry.brand.kind).collect();
        assert_eq!(kinds, BrandKind::ALL);
    }

    #[test]
    fn test_brand_data() {
        let amex = BuiltinBrandLookup::brand(BrandKind::AmericanExpress).unwrap();
        assert_eq!(amex.gaps, &[4, 10]);
        assert_eq!(amex.lengths, &[15]);
        assert_eq!(amex.code, SecurityCode { name: "CID", size: 4 });

        let visa = BuiltinBrandLookup::brand(BrandKind::Visa).unwrap();
        assert_eq!(visa.nice_type, "Visa");
        assert_eq!(visa.code.size, 3);
    }
}
