//! Brand lookup with a fixed answer, for tests and demos.

use crate::brand::CardBrand;
use crate::traits::BrandLookup;

/// Returns the same brand for every number.
///
/// # Examples
///
/// ```
/// use ccform_formatter::{BrandLookup, mock::FixedBrandLookup};
///
/// assert!(FixedBrandLookup::none().lookup("4111111111111111").is_none());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedBrandLookup {
    brand: Option<CardBrand>,
}

impl FixedBrandLookup {
    pub fn new(brand: CardBrand) -> Self {
        Self { brand: Some(brand) }
    }

    /// Never recognizes a brand, so formatting always uses the fallback card.
    pub fn none() -> Self {
        Self { brand: None }
    }
}

impl BrandLookup for FixedBrandLookup {
    fn lookup(&self, _number: &str) -> Option<CardBrand> {
        self.brand
    }
}
