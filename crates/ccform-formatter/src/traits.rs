//! Collaborator traits for the field formatter.
//!
//! The formatter never hardcodes card scheme data. It asks a
//! [`BrandLookup`] for the brand of the number typed so far, which keeps
//! scheme tables replaceable and lets tests pin the brand explicitly.
//!
//! # Example
//!
//! ```
//! use ccform_formatter::{BrandLookup, BuiltinBrandLookup, BrandKind};
//!
//! fn is_amex<L: BrandLookup>(lookup: &L, number: &str) -> bool {
//!     lookup
//!         .lookup(number)
//!         .is_some_and(|brand| brand.kind == BrandKind::AmericanExpress)
//! }
//!
//! assert!(is_amex(&BuiltinBrandLookup, "3782 822463 10005"));
//! assert!(!is_amex(&BuiltinBrandLookup, "4111"));
//! ```

use crate::brand::CardBrand;

/// Resolves a possibly partial card number to its brand.
///
/// Implementations must be pure: the same input always yields the same
/// brand, and lookups never fail. Input may contain spaces or dashes and
/// may be incomplete; `None` means no single brand can be told apart yet.
pub trait BrandLookup: Send + Sync {
    /// Brand of `number`, if exactly one brand is recognized.
    fn lookup(&self, number: &str) -> Option<CardBrand>;
}

impl<L: BrandLookup + ?Sized> BrandLookup for &L {
    fn lookup(&self, number: &str) -> Option<CardBrand> {
        (**self).lookup(number)
    }
}

impl<L: BrandLookup + ?Sized> BrandLookup for Box<L> {
    fn lookup(&self, number: &str) -> Option<CardBrand> {
        (**self).lookup(number)
    }
}
