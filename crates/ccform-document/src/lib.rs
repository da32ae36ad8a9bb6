//! CPF and CNPJ classification, check-digit validation and punctuation.
//!
//! Every function here is total: malformed input yields `false`,
//! [`Classification::Unclassified`] or `None` instead of an error. The
//! strict [`Document`] type is the only fallible entry point.
//!
//! # Examples
//!
//! ```
//! use ccform_document::{Classification, classify, format_document, is_valid_document};
//!
//! assert_eq!(classify("111.444.777-35"), Classification::Cpf);
//! assert!(is_valid_document("11.222.333/0001-81"));
//! assert_eq!(format_document(Some("11144477735")).as_deref(), Some("111.444.777-35"));
//! ```

pub mod checksum;
pub mod classify;
pub mod document;
pub mod format;
pub mod validation;

pub use checksum::check_digits_weighted_sum;
pub use classify::{Classification, DocumentKind, classify};
pub use document::Document;
pub use format::format_document;
pub use validation::{is_valid_cnpj, is_valid_cpf, is_valid_document};
