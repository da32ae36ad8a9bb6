use ccform_core::constants::{
    CNPJ_BASE_LENGTH, CNPJ_FIRST_WEIGHT, CNPJ_LENGTH, CNPJ_SECOND_WEIGHT, CPF_BASE_LENGTH,
    CPF_FIRST_WEIGHT, CPF_LENGTH, CPF_SECOND_WEIGHT,
};
use ccform_core::sanitize::remove_non_number;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::trace;

/// Brazilian tax document type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DocumentKind {
    /// Cadastro de Pessoas Físicas, 11 digits.
    Cpf,
    /// Cadastro Nacional da Pessoa Jurídica, 14 digits.
    Cnpj,
}

impl DocumentKind {
    /// Classify digits by length, ignoring any punctuation.
    ///
    /// # Examples
    ///
    /// ```
    /// use ccform_document::DocumentKind;
    ///
    /// assert_eq!(DocumentKind::classify("111.444.777-35"), Some(DocumentKind::Cpf));
    /// assert_eq!(DocumentKind::classify("11222333000181"), Some(DocumentKind::Cnpj));
    /// assert_eq!(DocumentKind::classify("123"), None);
    /// ```
    #[must_use]
    pub fn classify(raw: &str) -> Option<Self> {
        Self::from_length(remove_non_number(raw).len())
    }

    /// Kind of a digit-only string of `length` digits.
    #[inline]
    #[must_use]
    pub fn from_length(length: usize) -> Option<Self> {
        match length {
            CPF_LENGTH => Some(DocumentKind::Cpf),
            CNPJ_LENGTH => Some(DocumentKind::Cnpj),
            _ => None,
        }
    }

    /// Total number of digits, check digits included.
    #[inline]
    #[must_use]
    pub fn length(self) -> usize {
        match self {
            DocumentKind::Cpf => CPF_LENGTH,
            DocumentKind::Cnpj => CNPJ_LENGTH,
        }
    }

    /// Number of digits before the check digits.
    #[inline]
    #[must_use]
    pub fn base_length(self) -> usize {
        match self {
            DocumentKind::Cpf => CPF_BASE_LENGTH,
            DocumentKind::Cnpj => CNPJ_BASE_LENGTH,
        }
    }

    /// Starting weights for the first and second check digit.
    #[inline]
    #[must_use]
    pub fn weights(self) -> (u32, u32) {
        match self {
            DocumentKind::Cpf => (CPF_FIRST_WEIGHT, CPF_SECOND_WEIGHT),
            DocumentKind::Cnpj => (CNPJ_FIRST_WEIGHT, CNPJ_SECOND_WEIGHT),
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            DocumentKind::Cpf => "CPF",
            DocumentKind::Cnpj => "CNPJ",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of [`classify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Classification {
    Cpf,
    Cnpj,
    Unclassified,
}

impl Classification {
    /// Document kind, unless unclassified.
    #[must_use]
    pub fn kind(self) -> Option<DocumentKind> {
        match self {
            Classification::Cpf => Some(DocumentKind::Cpf),
            Classification::Cnpj => Some(DocumentKind::Cnpj),
            Classification::Unclassified => None,
        }
    }

    #[must_use]
    pub fn is_classified(self) -> bool {
        !matches!(self, Classification::Unclassified)
    }
}

impl From<Option<DocumentKind>> for Classification {
    fn from(kind: Option<DocumentKind>) -> Self {
        match kind {
            Some(DocumentKind::Cpf) => Classification::Cpf,
            Some(DocumentKind::Cnpj) => Classification::Cnpj,
            None => Classification::Unclassified,
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.kind() {
            Some(kind) => write!(f, "{kind}"),
            None => f.write_str("unclassified"),
        }
    }
}

/// Classify raw input as CPF (11 digits), CNPJ (14 digits) or neither.
///
/// Non-digit characters are stripped first, so punctuated input is
/// classified the same as bare digits. An absent value is classified as
/// the empty string: pass `value.unwrap_or_default()`.
///
/// # Examples
///
/// ```
/// use ccform_document::{Classification, classify};
///
/// assert_eq!(classify("11144477735"), Classification::Cpf);
/// assert_eq!(classify("11.222.333/0001-81"), Classification::Cnpj);
/// assert_eq!(classify(""), Classification::Unclassified);
///
/// let absent: Option<&str> = None;
/// assert_eq!(classify(absent.unwrap_or_default()), Classification::Unclassified);
/// ```
#[must_use]
pub fn classify(raw: &str) -> Classification {
    let classification = Classification::from(DocumentKind::classify(raw));
    trace!("Classified document input as {}", classification);
    classification
}
