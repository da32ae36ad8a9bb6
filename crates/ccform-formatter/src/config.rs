use ccform_core::constants::{EXPIRY_MAX_LENGTH, NUMBER_MAX_LENGTH};
use ccform_core::{DisplayFields, Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How card numbers are split into groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GroupingMode {
    /// Runs of four with a space after each complete run.
    #[default]
    FixedWidth,
    /// The recognized brand's gap offsets, truncated to its longest length.
    BrandGaps,
}

impl FromStr for GroupingMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fixed" | "fixed-width" => Ok(GroupingMode::FixedWidth),
            "brand" | "brand-gaps" => Ok(GroupingMode::BrandGaps),
            other => Err(Error::UnknownGrouping(other.to_string())),
        }
    }
}

impl fmt::Display for GroupingMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GroupingMode::FixedWidth => f.write_str("fixed"),
            GroupingMode::BrandGaps => f.write_str("brand"),
        }
    }
}

/// Formatter configuration.
///
/// # Examples
///
/// ```
/// use ccform_core::FormField;
/// use ccform_formatter::{FormatterConfig, GroupingMode};
///
/// let config = FormatterConfig::from_field_names(["number", "expiry"])
///     .unwrap()
///     .grouping(GroupingMode::BrandGaps);
///
/// assert!(config.display_fields.contains(FormField::Number));
/// assert!(!config.display_fields.contains(FormField::Cvc));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatterConfig {
    /// Fields emitted by the formatter.
    pub display_fields: DisplayFields,

    pub grouping: GroupingMode,

    /// Card number characters kept in fixed-width grouping.
    pub number_max_length: usize,

    /// Expiry digits kept (`MMYY`).
    pub expiry_max_length: usize,
}

impl FormatterConfig {
    pub fn new(display_fields: DisplayFields) -> Self {
        Self {
            display_fields,
            ..Self::default()
        }
    }

    /// Configuration emitting only the named fields.
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

    pub fn display_fields(mut self, display_fields: DisplayFields) -> Self {
        self.display_fields = display_fields;
        self
    }

    pub fn grouping(mut self, grouping: GroupingMode) -> Self {
        self.grouping = grouping;
        self
    }

    pub fn number_max_length(mut self, length: usize) -> Self {
        self.number_max_length = length;
        self
    }

    pub fn expiry_max_length(mut self, length: usize) -> Self {
        self.expiry_max_length = length;
        self
    }

    /// Check that every length limit is usable.
    ///
    /// # Errors
    /// Returns `Error::Config` for a zero length limit.
    pub fn validate(&self) -> Result<()> {
        if self.number_max_length == 0 {
            return Err(Error::Config("number_max_length must be positive".to_string()));
        }
        if self.expiry_max_length == 0 {
            return Err(Error::Config("expiry_max_length must be positive".to_string()));
        }
        Ok(())
    }
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            display_fields: DisplayFields::all(),
            grouping: GroupingMode::FixedWidth,
            number_max_length: NUMBER_MAX_LENGTH,
            expiry_max_length: EXPIRY_MAX_LENGTH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ccform_core::FormField;
    use rstest::rstest;

    #[rstest]
    #[case("fixed", GroupingMode::FixedWidth)]
    #[case("fixed-width", GroupingMode::FixedWidth)]
    #[case("brand", GroupingMode::BrandGaps)]
    #[case(" Brand ", GroupingMode::BrandGaps)]
    fn test_grouping_parse(#[case] input: &str, #[case] expected: GroupingMode) {
        assert_eq!(input.parse::<GroupingMode>().unwrap(), expected);
    }

    #[test]
    fn test_grouping_parse_unknown() {
        assert_eq!(
            "luhn".parse::<GroupingMode>(),
            Err(Error::UnknownGrouping("luhn".to_string()))
        );
    }

    #[test]
    fn test_grouping_display_roundtrip() {
        for mode in [GroupingMode::FixedWidth, GroupingMode::BrandGaps] {
            assert_eq!(mode.to_string().parse::<GroupingMode>().unwrap(), mode);
        }
    }

    #[test]
    fn test_default_config() {
        let config = FormatterConfig::default();
        assert_eq!(config.display_fields, DisplayFields::all());
        assert_eq!(config.grouping, GroupingMode::FixedWidth);
        assert_eq!(config.number_max_length, 19);
        assert_eq!(config.expiry_max_length, 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = FormatterConfig::default()
            .display_fields(DisplayFields::none().with(FormField::Doc))
            .grouping(GroupingMode::BrandGaps)
            .number_max_length(16)
            .expiry_max_length(6);

        assert!(config.display_fields.contains(FormField::Doc));
        assert!(!config.display_fields.contains(FormField::Number));
        assert_eq!(config.grouping, GroupingMode::BrandGaps);
        assert_eq!(config.number_max_length, 16);
        assert_eq!(config.expiry_max_length, 6);
    }

    #[test]
    fn test_from_field_names_unknown() {
        assert_eq!(
            FormatterConfig::from_field_names(["number", "phone"]),
            Err(Error::UnknownField("phone".to_string()))
        );
    }

    #[rstest]
    #[case(FormatterConfig::default().number_max_length(0))]
    #[case(FormatterConfig::default().expiry_max_length(0))]
    fn test_validate_rejects_zero_lengths(#[case] config: FormatterConfig) {
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_deserialize_partial() {
        let config: FormatterConfig =
            serde_json::from_str(r#"{"grouping":"brand-gaps"}"#).unwrap();
        assert_eq!(config.grouping, GroupingMode::BrandGaps);
        assert_eq!(config.number_max_length, 19);
    }
}
