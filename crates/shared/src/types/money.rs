//! Money value with decimal precision and a currency code.
//!
//! CRITICAL: Never use floating-point for money amounts.
//! This type wraps `rust_decimal::Decimal` for the amount.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents a monetary amount with its currency code.
///
/// Both parts are optional while a value is being edited. A value is only
/// complete once it carries both.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MoneyValue {
    /// The amount, if one has been entered.
    pub amount: Option<Decimal>,
    /// Currency code as entered (e.g., "USD", "IDR"). Not normalized.
    pub currency: Option<String>,
}

/// Anything that exposes an amount and a currency code.
///
/// `MoneyField::set_value` accepts any implementor and splits it into the
/// amount and currency sub-fields.
pub trait MoneyLike {
    /// The amount part.
    fn amount(&self) -> Option<Decimal>;

    /// The currency code part.
    fn currency(&self) -> Option<&str>;
}

impl MoneyValue {
    /// Creates a complete money value.
    #[must_use]
    pub fn new(amount: Decimal, currency: impl Into<String>) -> Self {
        Self {
            amount: Some(amount),
            currency: Some(currency.into()),
        }
    }

    /// Creates a value from optional parts.
    #[must_use]
    pub fn from_parts(amount: Option<Decimal>, currency: Option<String>) -> Self {
        Self { amount, currency }
    }

    /// Returns true if both the amount and the currency are present.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.amount.is_some() && self.currency.as_deref().is_some_and(|c| !c.is_empty())
    }
}

impl MoneyLike for MoneyValue {
    fn amount(&self) -> Option<Decimal> {
        self.amount
    }

    fn currency(&self) -> Option<&str> {
        self.currency.as_deref()
    }
}

impl std::fmt::Display for MoneyValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.currency, self.amount) {
            (Some(currency), Some(amount)) => write!(f, "{currency} {amount}"),
            (Some(currency), None) => write!(f, "{currency}"),
            (None, Some(amount)) => write!(f, "{amount}"),
            (None, None) => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_money_new() {
        let money = MoneyValue::new(dec!(100.00), "USD");
        assert_eq!(money.amount, Some(dec!(100.00)));
        assert_eq!(money.currency.as_deref(), Some("USD"));
        assert!(money.is_complete());
    }

    #[test]
    fn test_partial_values_are_not_complete() {
        assert!(!MoneyValue::from_parts(Some(dec!(5)), None).is_complete());
        assert!(!MoneyValue::from_parts(None, Some("EUR".into())).is_complete());
        assert!(!MoneyValue::from_parts(Some(dec!(5)), Some(String::new())).is_complete());
        assert!(!MoneyValue::default().is_complete());
    }

    #[test]
    fn test_display() {
        assert_eq!(MoneyValue::new(dec!(12.50), "EUR").to_string(), "EUR 12.50");
        assert_eq!(MoneyValue::from_parts(Some(dec!(3)), None).to_string(), "3");
        assert_eq!(MoneyValue::default().to_string(), "");
    }

    #[test]
    fn test_serde_uses_pascal_case_keys() {
        let money = MoneyValue::new(dec!(1.5), "SGD");
        let json = serde_json::to_value(&money).unwrap();
        assert_eq!(json["Currency"], "SGD");
        assert_eq!(json["Amount"], "1.5");
    }
}
