use crate::classify::DocumentKind;
use crate::format::{CNPJ_MASK, CPF_MASK, apply_mask};
use crate::validation::{is_repeated_digit, rebuild};
use ccform_core::sanitize::remove_non_number;
use ccform_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use subtle::ConstantTimeEq;

/// A complete CPF or CNPJ whose check digits have been verified.
///
/// Holds bare digits; [`Display`](fmt::Display) renders the punctuated
/// form. Unlike [`format_document`](crate::format_document), construction
/// fails for anything that is not a valid 11 or 14 digit document.
///
/// # Examples
///
/// ```
/// use ccform_document::{Document, DocumentKind};
///
/// let doc = Document::parse("111.444.777-35").unwrap();
/// assert_eq!(doc.kind(), DocumentKind::Cpf);
/// assert_eq!(doc.digits(), "11144477735");
/// assert_eq!(doc.to_string(), "111.444.777-35");
///
/// assert!(Document::parse("1234").is_err());
/// assert!(Document::parse("111.444.777-36").is_err());
/// ```
#[derive(Debug, Clone, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Document {
    kind: DocumentKind,
    digits: String,
}

impl Document {
    /// Parse and validate a document, with or without punctuation.
    ///
    /// # Errors
    /// Returns `Error::Unclassified` if the input does not hold 11 or 14
    /// digits, or `Error::InvalidCheckDigits` if the check digits do not
    /// match (including documents made of a single repeated digit).
    pub fn parse(raw: &str) -> Result<Self> {
        let digits = remove_non_number(raw);
        let kind = DocumentKind::from_length(digits.len()).ok_or(Error::Unclassified {
            length: digits.len(),
        })?;

        let rebuilt = rebuild(kind, &digits);
        let matches: bool = rebuilt.as_bytes().ct_eq(digits.as_bytes()).into();
        if !matches || is_repeated_digit(&digits) {
            let split = kind.base_length();
            return Err(Error::InvalidCheckDigits {
                kind: kind.to_string(),
                expected: rebuilt[split..].to_string(),
                actual: digits[split..].to_string(),
            });
        }

        Ok(Document { kind, digits })
    }

    #[must_use]
    pub fn kind(&self) -> DocumentKind {
        self.kind
    }

    /// Bare digits, check digits included.
    #[must_use]
    pub fn digits(&self) -> &str {
        &self.digits
    }

    /// The two check digits.
    #[must_use]
    pub fn check_digits(&self) -> &str {
        &self.digits[self.kind.base_length()..]
    }

    /// Punctuated form (`XXX.XXX.XXX-XX` or `XX.XXX.XXX/XXXX-XX`).
    #[must_use]
    pub fn formatted(&self) -> String {
        let mask = match self.kind {
            DocumentKind::Cpf => CPF_MASK,
            DocumentKind::Cnpj => CNPJ_MASK,
        };
        apply_mask(&self.digits, mask)
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}

impl FromStr for Document {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Document::parse(s)
    }
}

impl TryFrom<String> for Document {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Document::parse(&value)
    }
}

impl From<Document> for String {
    fn from(doc: Document) -> Self {
        doc.digits
    }
}

/// Constant-time comparison, document numbers are personal data.
impl PartialEq for Document {
    fn eq(&self, other: &Self) -> bool {
        self.digits.as_bytes().ct_eq(other.digits.as_bytes()).into()
    }
}

impl std::hash::Hash for Document {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.digits.hash(state);
    }
}
