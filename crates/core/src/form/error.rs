//! Field validation errors.

use thiserror::Error;

/// A validation failure reported by a single field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    /// Input could not be read as a number.
    #[error("'{value}' is not a number")]
    NotNumeric {
        /// Field that rejected the input.
        field: String,
        /// The rejected input.
        value: String,
    },

    /// A selector received a value that is not one of its options.
    #[error("'{value}' is not an allowed option")]
    NotAnOption {
        /// Field that rejected the input.
        field: String,
        /// The rejected input.
        value: String,
    },
}

impl FieldError {
    /// Name of the field the error belongs to.
    #[must_use]
    pub fn field(&self) -> &str {
        match self {
            Self::NotNumeric { field, .. } | Self::NotAnOption { field, .. } => field,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NotNumeric { .. } => "NOT_NUMERIC",
            Self::NotAnOption { .. } => "NOT_AN_OPTION",
        }
    }
}

/// Collects field errors over one validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    errors: Vec<FieldError>,
}

impl ValidationResult {
    /// Creates an empty, valid result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an error.
    pub fn add_error(&mut self, error: FieldError) {
        self.errors.push(error);
    }

    /// Returns true if no errors were recorded.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// All recorded errors, in order.
    #[must_use]
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Errors recorded for one field.
    pub fn errors_for<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a FieldError> + 'a {
        self.errors.iter().filter(move |e| e.field() == field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FieldError::NotNumeric {
            field: "Price[Amount]".into(),
            value: "abc".into(),
        };
        assert_eq!(err.to_string(), "'abc' is not a number");
        assert_eq!(err.field(), "Price[Amount]");
        assert_eq!(err.error_code(), "NOT_NUMERIC");
    }

    #[test]
    fn test_validation_result() {
        let mut result = ValidationResult::new();
        assert!(result.is_valid());

        result.add_error(FieldError::NotAnOption {
            field: "Price[Currency]".into(),
            value: "XXX".into(),
        });
        assert!(!result.is_valid());
        assert_eq!(result.errors_for("Price[Currency]").count(), 1);
        assert_eq!(result.errors_for("Price[Amount]").count(), 0);
    }
}
