use crate::{Result, error::Error};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Form field recognized by the formatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    Number,
    Expiry,
    Cvc,
    Name,
    PostalCode,
    Doc,
}

impl FormField {
    /// Every recognized field, in display order.
    pub const ALL: [FormField; 6] = [
        FormField::Number,
        FormField::Expiry,
        FormField::Cvc,
        FormField::Name,
        FormField::PostalCode,
        FormField::Doc,
    ];

    /// Field name as used by form payloads (`postalCode`, not `postal_code`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            FormField::Number => "number",
            FormField::Expiry => "expiry",
            FormField::Cvc => "cvc",
            FormField::Name => "name",
            FormField::PostalCode => "postalCode",
            FormField::Doc => "doc",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for FormField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        FormField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| Error::UnknownField(s.to_string()))
    }
}

/// Set of fields a formatter emits.
///
/// One flag per [`FormField`]. The card `type` is not part of the set: it is
/// always emitted.
///
/// # Examples
///
/// ```
/// use ccform_core::{DisplayFields, FormField};
///
/// let fields = DisplayFields::from_names(["number", "expiry"]).unwrap();
/// assert!(fields.contains(FormField::Number));
/// assert!(!fields.contains(FormField::Cvc));
///
/// assert!(DisplayFields::from_names(["phone"]).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayFields {
    pub number: bool,
    pub expiry: bool,
    pub cvc: bool,
    pub name: bool,
    pub postal_code: bool,
    pub doc: bool,
}

impl DisplayFields {
    /// No field included.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            number: false,
            expiry: false,
            cvc: false,
            name: false,
            postal_code: false,
            doc: false,
        }
    }

    /// Every field included.
    #[must_use]
    pub const fn all() -> Self {
        Self {
            number: true,
            expiry: true,
            cvc: true,
            name: true,
            postal_code: true,
            doc: true,
        }
    }

    /// Build the set from field names.
    ///
    /// # Errors
    /// Returns `Error::UnknownField` for the first name that is not a
    /// recognized field.
    pub fn from_names<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names.into_iter().try_fold(Self::none(), |fields, name| {
            Ok(fields.with(name.as_ref().trim().parse()?))
        })
    }

    /// Return a copy with `field` included.
    #[must_use]
    pub fn with(mut self, field: FormField) -> Self {
        *self.flag_mut(field) = true;
        self
    }

    /// Return a copy with `field` excluded.
    #[must_use]
    pub fn without(mut self, field: FormField) -> Self {
        *self.flag_mut(field) = false;
        self
    }

    #[must_use]
    pub fn contains(&self, field: FormField) -> bool {
        match field {
            FormField::Number => self.number,
            FormField::Expiry => self.expiry,
            FormField::Cvc => self.cvc,
            FormField::Name => self.name,
            FormField::PostalCode => self.postal_code,
            FormField::Doc => self.doc,
        }
    }

    /// Included fields, in display order.
    pub fn iter(&self) -> impl Iterator<Item = FormField> + '_ {
        FormField::ALL
            .into_iter()
            .filter(|field| self.contains(*field))
    }

    fn flag_mut(&mut self, field: FormField) -> &mut bool {
        match field {
            FormField::Number => &mut self.number,
            FormField::Expiry => &mut self.expiry,
            FormField::Cvc => &mut self.cvc,
            FormField::Name => &mut self.name,
            FormField::PostalCode => &mut self.postal_code,
            FormField::Doc => &mut self.doc,
        }
    }
}

impl Default for DisplayFields {
    fn default() -> Self {
        Self::all()
    }
}

impl std::str::FromStr for DisplayFields {
    type Err = Error;

    /// Parse a comma-separated list such as `number,expiry,cvc`.
    fn from_str(s: &str) -> Result<Self> {
        DisplayFields::from_names(s.split(',').filter(|name| !name.trim().is_empty()))
    }
}

/// Raw field values as typed by the user.
///
/// Every field may be absent. Absent and empty values are formatted the
/// same way.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormInputValues {
    pub number: Option<String>,
    pub expiry: Option<String>,
    pub cvc: Option<String>,
    pub name: Option<String>,
    pub postal_code: Option<String>,
    pub doc: Option<String>,
}

impl FormInputValues {
    /// Raw value of `field`, if present.
    #[must_use]
    pub fn get(&self, field: FormField) -> Option<&str> {
        match field {
            FormField::Number => self.number.as_deref(),
            FormField::Expiry => self.expiry.as_deref(),
            FormField::Cvc => self.cvc.as_deref(),
            FormField::Name => self.name.as_deref(),
            FormField::PostalCode => self.postal_code.as_deref(),
            FormField::Doc => self.doc.as_deref(),
        }
    }

    /// Set `field` to `value`, returning the updated values.
    #[must_use]
    pub fn set(mut self, field: FormField, value: impl Into<String>) -> Self {
        let slot = match field {
            FormField::Number => &mut self.number,
            FormField::Expiry => &mut self.expiry,
            FormField::Cvc => &mut self.cvc,
            FormField::Name => &mut self.name,
            FormField::PostalCode => &mut self.postal_code,
            FormField::Doc => &mut self.doc,
        };
        *slot = Some(value.into());
        self
    }
}

/// Display-ready field values.
///
/// Fields outside the formatter's [`DisplayFields`] are `None` and skipped
/// on serialization. `card_type` is serialized as `type` and is always
/// present, `null` when no brand was recognized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedValues {
    #[serde(rename = "type")]
    pub card_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cvc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
}

impl FormattedValues {
    /// Formatted value of `field`, if it was emitted.
    #[must_use]
    pub fn get(&self, field: FormField) -> Option<&str> {
        match field {
            FormField::Number => self.number.as_deref(),
            FormField::Expiry => self.expiry.as_deref(),
            FormField::Cvc => self.cvc.as_deref(),
            FormField::Name => self.name.as_deref(),
            FormField::PostalCode => self.postal_code.as_deref(),
            FormField::Doc => self.doc.as_deref(),
        }
    }

    /// Names of the emitted keys: `type` first, then every emitted field.
    #[must_use]
    pub fn keys(&self) -> Vec<&'static str> {
        std::iter::once("type")
            .chain(
                FormField::ALL
                    .into_iter()
                    .filter(|field| self.get(*field).is_some())
                    .map(FormField::as_str),
            )
            .collect()
    }
}
