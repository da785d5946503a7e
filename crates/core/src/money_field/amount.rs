//! Numeric amount sub-field.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::form::{FieldError, FieldState, FormField, ValidationResult};

/// Numeric input holding the amount part of a money value.
///
/// Keeps the text as entered next to the parsed decimal so non-numeric input
/// survives a round trip back to the browser and can be reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmountField {
    state: FieldState,
    raw: Option<String>,
    value: Option<Decimal>,
}

impl AmountField {
    /// Creates an empty amount field.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            state: FieldState::new(name, None),
            raw: None,
            value: None,
        }
    }

    /// Sets the amount from a decimal.
    pub fn set_decimal(&mut self, value: Option<Decimal>) {
        self.raw = value.map(|v| v.to_string());
        self.value = value;
    }

    /// Sets the amount from text as entered.
    ///
    /// Blank input clears the field. Input that is not a number is kept as
    /// raw text with no data value.
    pub fn set_text(&mut self, input: Option<&str>) {
        let trimmed = input.map(str::trim).filter(|s| !s.is_empty());
        self.value = trimmed.and_then(parse_amount);
        self.raw = trimmed.map(str::to_owned);
    }

    /// The parsed amount, suitable for persistence.
    #[must_use]
    pub fn data_value(&self) -> Option<Decimal> {
        self.value
    }

    /// The amount as entered.
    #[must_use]
    pub fn raw_value(&self) -> Option<&str> {
        self.raw.as_deref()
    }

    /// Reports input that could not be read as a number.
    pub fn validate(&self, result: &mut ValidationResult) -> bool {
        match (&self.raw, self.value) {
            (Some(raw), None) => {
                result.add_error(FieldError::NotNumeric {
                    field: self.state.name.clone(),
                    value: raw.clone(),
                });
                false
            }
            _ => true,
        }
    }
}

fn parse_amount(input: &str) -> Option<Decimal> {
    Decimal::from_str(input)
        .or_else(|_| Decimal::from_scientific(input))
        .ok()
}

impl FormField for AmountField {
    fn state(&self) -> &FieldState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut FieldState {
        &mut self.state
    }

    fn field_type(&self) -> &'static str {
        "NumericField"
    }

    fn readonly_transformation(&self) -> Self {
        let mut field = self.clone();
        field.state.readonly = true;
        field
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case("12.50", dec!(12.50))]
    #[case(" 7 ", dec!(7))]
    #[case("-0.01", dec!(-0.01))]
    #[case("1e3", dec!(1000))]
    fn test_set_text_parses(#[case] input: &str, #[case] expected: Decimal) {
        let mut field = AmountField::new("Price[Amount]");
        field.set_text(Some(input));
        assert_eq!(field.data_value(), Some(expected));
    }

    #[test]
    fn test_blank_text_clears() {
        let mut field = AmountField::new("Price[Amount]");
        field.set_decimal(Some(dec!(5)));
        field.set_text(Some("   "));
        assert_eq!(field.data_value(), None);
        assert_eq!(field.raw_value(), None);
    }

    #[test]
    fn test_non_numeric_kept_raw_and_reported() {
        let mut field = AmountField::new("Price[Amount]");
        field.set_text(Some("twelve"));
        assert_eq!(field.data_value(), None);
        assert_eq!(field.raw_value(), Some("twelve"));

        let mut result = ValidationResult::new();
        assert!(!field.validate(&mut result));
        assert_eq!(result.errors()[0].field(), "Price[Amount]");
        assert_eq!(result.errors()[0].error_code(), "NOT_NUMERIC");
    }

    #[test]
    fn test_empty_field_is_valid() {
        let field = AmountField::new("Price[Amount]");
        let mut result = ValidationResult::new();
        assert!(field.validate(&mut result));
        assert!(result.is_valid());
    }

    #[test]
    fn test_readonly_transformation() {
        let mut field = AmountField::new("Price[Amount]");
        field.set_decimal(Some(dec!(9.99)));
        let readonly = field.readonly_transformation();
        assert!(readonly.is_readonly());
        assert_eq!(readonly.data_value(), Some(dec!(9.99)));
        assert!(!field.is_readonly());
    }
}
