use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    // Configuration errors
    #[error("Unknown form field: {0}")]
    UnknownField(String),

    #[error("Unknown grouping mode: {0}")]
    UnknownGrouping(String),

    #[error("Unknown card brand: {0}")]
    UnknownBrand(String),

    #[error("Configuration error: {0}")]
    Config(String),

    // Document errors
    #[error("Document with {length} digits is neither CPF (11) nor CNPJ (14)")]
    Unclassified { length: usize },

    #[error("Invalid {kind} check digits: expected {expected}, got {actual}")]
    InvalidCheckDigits {
        kind: String,
        expected: String,
        actual: String,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
