//! Display formatting for credit card payment forms.
//!
//! [`FieldFormatter`] turns raw, partially typed form input into display
//! text: card numbers are grouped, expiry dates become `MM/YY`, security
//! codes are cut to the brand's length and CPF/CNPJ documents are
//! punctuated. Every call is pure and total, so the formatter can run on
//! each keystroke.
//!
//! # Brand Lookup
//!
//! Card grouping and CVC length depend on the card brand, which is
//! resolved through the [`BrandLookup`] trait. [`BuiltinBrandLookup`]
//! recognizes Visa, Mastercard, American Express, Diners Club, Discover,
//! JCB, UnionPay, Maestro, Elo, Mir, Hiper and Hipercard. When no single
//! brand is recognized, [`CardBrandMetadata::Fallback`] applies.
//!
//! # Example
//!
//! ```
//! use ccform_core::FormInputValues;
//! use ccform_formatter::{BuiltinBrandLookup, FieldFormatter, FormatterConfig, GroupingMode};
//!
//! let config = FormatterConfig::from_field_names(["number", "cvc", "doc"])
//!     .unwrap()
//!     .grouping(GroupingMode::BrandGaps);
//! let formatter = FieldFormatter::with_config(config, BuiltinBrandLookup).unwrap();
//!
//! let values = FormInputValues {
//!     number: Some("378282246310005".to_string()),
//!     cvc: Some("12345".to_string()),
//!     doc: Some("11144477735".to_string()),
//!     ..Default::default()
//! };
//!
//! let formatted = formatter.format_values(&values);
//! assert_eq!(formatted.card_type.as_deref(), Some("american-express"));
//! assert_eq!(formatted.number.as_deref(), Some("3782 822463 10005"));
//! assert_eq!(formatted.cvc.as_deref(), Some("1234"));
//! assert_eq!(formatted.doc.as_deref(), Some("111.444.777-35"));
//! ```

pub mod brand;
pub mod builtin;
pub mod config;
pub mod fields;
pub mod formatter;
pub mod icons;
pub mod mock;
pub mod traits;

pub use brand::{BrandKind, CardBrand, CardBrandMetadata, SecurityCode};
pub use builtin::BuiltinBrandLookup;
pub use config::{FormatterConfig, GroupingMode};
pub use fields::{
    format_cvc, format_doc, format_expiry, format_name, format_number, format_number_with_gaps,
    format_postal_code,
};
pub use formatter::FieldFormatter;
pub use icons::{Icon, IconAsset};
pub use traits::BrandLookup;
