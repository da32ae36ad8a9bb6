//! Card brand model.
//!
//! A [`CardBrand`] is static scheme data: how the number is grouped, which
//! lengths are valid and how long the security code is. Formatting always
//! works on a [`CardBrandMetadata`], which falls back to a generic long card
//! when no brand matches.

use crate::traits::BrandLookup;
use ccform_core::Error;
use ccform_core::constants::{FALLBACK_CVC_SIZE, FALLBACK_GAPS, FALLBACK_LENGTHS};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Card scheme, in the order brands are matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[non_exhaustive]
pub enum BrandKind {
    Visa,
    Mastercard,
    AmericanExpress,
    DinersClub,
    Discover,
    Jcb,
    Unionpay,
    Maestro,
    Elo,
    Mir,
    Hiper,
    Hipercard,
}

impl BrandKind {
    /// Every brand, in lookup order.
    pub const ALL: [BrandKind; 12] = [
        BrandKind::Visa,
        BrandKind::Mastercard,
        BrandKind::AmericanExpress,
        BrandKind::DinersClub,
        BrandKind::Discover,
        BrandKind::Jcb,
        BrandKind::Unionpay,
        BrandKind::Maestro,
        BrandKind::Elo,
        BrandKind::Mir,
        BrandKind::Hiper,
        BrandKind::Hipercard,
    ];

    /// Type string reported in [`FormattedValues::card_type`](ccform_core::FormattedValues).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            BrandKind::Visa => "visa",
            BrandKind::Mastercard => "mastercard",
            BrandKind::AmericanExpress => "american-express",
            BrandKind::DinersClub => "diners-club",
            BrandKind::Discover => "discover",
            BrandKind::Jcb => "jcb",
            BrandKind::Unionpay => "unionpay",
            BrandKind::Maestro => "maestro",
            BrandKind::Elo => "elo",
            BrandKind::Mir => "mir",
            BrandKind::Hiper => "hiper",
            BrandKind::Hipercard => "hipercard",
        }
    }
}

impl fmt::Display for BrandKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BrandKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BrandKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| Error::UnknownBrand(s.to_string()))
    }
}

/// Security code label and length (`CVV`, 3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SecurityCode {
    pub name: &'static str,
    pub size: usize,
}

/// Static metadata for one card scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CardBrand {
    pub kind: BrandKind,
    /// Human-readable scheme name.
    pub nice_type: &'static str,
    /// Offsets after which a separator is inserted.
    pub gaps: &'static [usize],
    /// Valid number lengths, ascending.
    pub lengths: &'static [usize],
    pub code: SecurityCode,
}

/// Card metadata driving number grouping and CVC length.
///
/// # Examples
///
/// ```
/// use ccform_formatter::{BuiltinBrandLookup, CardBrandMetadata};
///
/// let card = CardBrandMetadata::resolve(&BuiltinBrandLookup, "378282246310005");
/// assert_eq!(card.card_type(), Some("american-express"));
/// assert_eq!(card.cvc_size(), 4);
///
/// let card = CardBrandMetadata::resolve(&BuiltinBrandLookup, "");
/// assert!(card.is_fallback());
/// assert_eq!(card.gaps(), &[4, 8, 12]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardBrandMetadata {
    /// A recognized brand.
    Known(CardBrand),
    /// Generic long card: gaps 4/8/12, up to 19 digits, 3-digit CVC, no type.
    Fallback,
}

impl CardBrandMetadata {
    /// Look `number` up and fall back to the generic card on no match.
    pub fn resolve<L: BrandLookup + ?Sized>(lookup: &L, number: &str) -> Self {
        lookup
            .lookup(number)
            .map_or(CardBrandMetadata::Fallback, CardBrandMetadata::Known)
    }

    #[must_use]
    pub fn is_fallback(&self) -> bool {
        matches!(self, CardBrandMetadata::Fallback)
    }

    #[must_use]
    pub fn brand(&self) -> Option<&CardBrand> {
        match self {
            CardBrandMetadata::Known(brand) => Some(brand),
            CardBrandMetadata::Fallback => None,
        }
    }

    /// Brand type string, `None` for the fallback card.
    #[must_use]
    pub fn card_type(&self) -> Option<&'static str> {
        self.brand().map(|brand| brand.kind.as_str())
    }

    #[must_use]
    pub fn gaps(&self) -> &'static [usize] {
        match self {
            CardBrandMetadata::Known(brand) => brand.gaps,
            CardBrandMetadata::Fallback => FALLBACK_GAPS,
        }
    }

    #[must_use]
    pub fn lengths(&self) -> &'static [usize] {
        match self {
            CardBrandMetadata::Known(brand) => brand.lengths,
            CardBrandMetadata::Fallback => FALLBACK_LENGTHS,
        }
    }

    /// Longest valid number length.
    #[must_use]
    pub fn max_length(&self) -> usize {
        self.lengths().last().copied().unwrap_or_default()
    }

    #[must_use]
    pub fn cvc_size(&self) -> usize {
        match self {
            CardBrandMetadata::Known(brand) => brand.code.size,
            CardBrandMetadata::Fallback => FALLBACK_CVC_SIZE,
        }
    }
}
