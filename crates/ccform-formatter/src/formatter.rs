use crate::brand::CardBrandMetadata;
use crate::builtin::BuiltinBrandLookup;
use crate::config::{FormatterConfig, GroupingMode};
use crate::fields::{
    format_cvc, format_doc, format_expiry, format_name, format_number, format_number_with_gaps,
    format_postal_code,
};
use crate::traits::BrandLookup;
use ccform_core::{DisplayFields, FormField, FormInputValues, FormattedValues, Result};
use tracing::{debug, trace};

/// Turns raw form input into display-ready values.
///
/// The formatter holds no per-call state: every call resolves the card
/// brand afresh from the number and formats each allowlisted field
/// independently. Absent inputs are treated as empty strings.
///
/// # Examples
///
/// ```
/// use ccform_core::{DisplayFields, FormInputValues};
/// use ccform_formatter::FieldFormatter;
///
/// let formatter = FieldFormatter::new(DisplayFields::from_names(["number", "expiry"]).unwrap());
/// let values = FormInputValues {
///     number: Some("4111111111111111".to_string()),
///     expiry: Some("1230".to_string()),
///     ..Default::default()
/// };
///
/// let formatted = formatter.format_values(&values);
/// assert_eq!(formatted.card_type.as_deref(), Some("visa"));
/// assert_eq!(formatted.number.as_deref(), Some("4111 1111 1111 1111 "));
/// assert_eq!(formatted.expiry.as_deref(), Some("12/30"));
/// assert_eq!(formatted.cvc, None);
/// ```
#[derive(Debug, Clone)]
pub struct FieldFormatter<L = BuiltinBrandLookup> {
    config: FormatterConfig,
    lookup: L,
}

impl FieldFormatter<BuiltinBrandLookup> {
    /// Formatter emitting `display_fields`, with the built-in brand table.
    pub fn new(display_fields: DisplayFields) -> Self {
        Self {
            config: FormatterConfig::new(display_fields),
            lookup: BuiltinBrandLookup,
        }
    }

    /// Formatter emitting only the named fields.
    ///
    /// # Errors
    /// Returns `Error::UnknownField` for a name that is not a form field.
    pub fn from_field_names<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        DisplayFields::from_names(names).map(Self::new)
    }
}

impl Default for FieldFormatter<BuiltinBrandLookup> {
    fn default() -> Self {
        Self::new(DisplayFields::all())
    }
}

impl<L: BrandLookup> FieldFormatter<L> {
    /// Formatter with an explicit configuration and brand lookup.
    ///
    /// # Errors
    /// Returns `Error::Config` if the configuration fails validation.
    pub fn with_config(config: FormatterConfig, lookup: L) -> Result<Self> {
        config.validate()?;
        debug!(
            "Field formatter configured: fields={:?}, grouping={}",
            config.display_fields.iter().collect::<Vec<_>>(),
            config.grouping
        );
        Ok(Self { config, lookup })
    }

    pub fn config(&self) -> &FormatterConfig {
        &self.config
    }

    pub fn display_fields(&self) -> DisplayFields {
        self.config.display_fields
    }

    pub fn lookup(&self) -> &L {
        &self.lookup
    }

    /// Brand metadata for a possibly partial card number.
    pub fn card_metadata(&self, number: &str) -> CardBrandMetadata {
        CardBrandMetadata::resolve(&self.lookup, number)
    }

    /// Format every allowlisted field of `values`.
    ///
    /// `card_type` is always set from the number, whether or not the number
    /// itself is emitted.
    pub fn format_values(&self, values: &FormInputValues) -> FormattedValues {
        let number = values.number.as_deref().unwrap_or_default();
        let card = self.card_metadata(number);
        if card.is_fallback() {
            debug!("No card brand recognized, using fallback card metadata");
        }

        let fields = self.config.display_fields;
        let text = |field: FormField| values.get(field).unwrap_or_default();
        let pick = |field: FormField, format: &dyn Fn(&str) -> String| {
            fields.contains(field).then(|| format(text(field)))
        };

        let formatted = FormattedValues {
            card_type: card.card_type().map(str::to_string),
            number: pick(FormField::Number, &|number| self.format_card_number(number, &card)),
            expiry: pick(FormField::Expiry, &|expiry| {
                format_expiry(expiry, self.config.expiry_max_length)
            }),
            cvc: pick(FormField::Cvc, &|cvc| format_cvc(cvc, card.cvc_size())),
            name: pick(FormField::Name, &format_name),
            postal_code: pick(FormField::PostalCode, &format_postal_code),
            doc: fields
                .contains(FormField::Doc)
                .then(|| format_doc(values.doc.as_deref())),
        };

        trace!(
            "Formatted {} fields, card type {:?}",
            formatted.keys().len() - 1,
            formatted.card_type
        );
        formatted
    }

    fn format_card_number(&self, number: &str, card: &CardBrandMetadata) -> String {
        match self.config.grouping {
            GroupingMode::FixedWidth => format_number(number, self.config.number_max_length),
            GroupingMode::BrandGaps => {
                format_number_with_gaps(number, card.gaps(), card.max_length())
            }
        }
    }
}
