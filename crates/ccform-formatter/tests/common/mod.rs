//! Common test utilities for formatter integration tests.

#![allow(dead_code)]

use ccform_core::{DisplayFields, FormField, FormInputValues, FormattedValues};
use ccform_formatter::FieldFormatter;

/// Published test card numbers, one per brand.
pub const TEST_CARDS: &[(&str, &str)] = &[
    ("visa", "4111111111111111"),
    ("mastercard", "5555555555554444"),
    ("american-express", "378282246310005"),
    ("diners-club", "30569309025904"),
    ("discover", "6011111111111117"),
    ("jcb", "3530111333300000"),
    ("elo", "6362970000457013"),
    ("hipercard", "6062825624254001"),
];

/// Input with only the card number set.
pub fn number_input(number: &str) -> FormInputValues {
    FormInputValues::default().set(FormField::Number, number)
}

/// Feed `text` one character at a time, reformatting after every keystroke
/// like a live form does. Returns the final formatted values.
pub fn type_into(formatter: &FieldFormatter, field: FormField, text: &str) -> FormattedValues {
    let mut shown = String::new();
    let mut formatted = FormattedValues::default();
    for c in text.chars() {
        shown.push(c);
        formatted = formatter.format_values(&FormInputValues::default().set(field, shown.clone()));
        shown = formatted.get(field).unwrap_or_default().to_string();
    }
    formatted
}

/// Formatter emitting every field.
pub fn full_formatter() -> FieldFormatter {
    FieldFormatter::new(DisplayFields::all())
}
