//! Property-based tests for the composite money field.

use proptest::prelude::*;
use rust_decimal::Decimal;
use serde_json::json;

use super::*;
use crate::form::FormField;

/// Strategy to generate amounts with two decimal places (-1,000,000.00 to 1,000,000.00).
fn amount() -> impl Strategy<Value = Decimal> {
    (-100_000_000i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate three-letter currency codes.
fn currency_code() -> impl Strategy<Value = String> {
    "[A-Z]{3}"
}

/// Strategy to generate a list of allowed currency codes.
fn allowed_codes() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(currency_code(), 0..6)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Map input lands unchanged in both children, whether the amount
    /// arrives as text or as a JSON number.
    #[test]
    fn prop_map_value_reaches_children(
        amount in amount(),
        currency in currency_code(),
        as_text in any::<bool>(),
    ) {
        let amount_json = if as_text {
            json!(amount.to_string())
        } else {
            serde_json::from_str::<serde_json::Value>(&amount.to_string()).unwrap()
        };
        let mut field = MoneyField::new("Price", "Price");
        field.set_value(json!({"Amount": amount_json, "Currency": currency}));

        prop_assert_eq!(field.amount_field().data_value(), Some(amount));
        prop_assert_eq!(field.currency_field().data_value(), Some(currency.as_str()));
    }

    /// Any change of allowed currencies reapplies the current currency.
    #[test]
    fn prop_rebuild_preserves_currency(
        currency in currency_code(),
        first in allowed_codes(),
        second in allowed_codes(),
    ) {
        let mut field = MoneyField::new("Price", "Price");
        field.set_allowed_currencies(first);
        field.currency_field_mut().set_value(Some(currency.clone()));
        field.set_allowed_currencies(second.clone());

        prop_assert_eq!(field.currency_field().data_value(), Some(currency.as_str()));
        prop_assert_eq!(field.currency_field().is_selector(), !second.is_empty());
    }

    /// Mutating a clone's children never reaches the original.
    #[test]
    fn prop_clone_is_independent(
        original_amount in amount(),
        new_amount in amount(),
        currency in currency_code(),
    ) {
        let original = MoneyField::new("Price", "Price")
            .with_value(moneta_shared::MoneyValue::new(original_amount, currency.clone()));
        let mut copy = original.clone();
        copy.amount_field_mut().set_decimal(Some(new_amount));
        copy.currency_field_mut().set_value(None);
        copy.set_disabled(true);

        prop_assert_eq!(original.amount_field().data_value(), Some(original_amount));
        prop_assert_eq!(original.currency_field().data_value(), Some(currency.as_str()));
        prop_assert!(!original.currency_field().is_disabled());
    }

    /// Flat saves write exactly the children's data values.
    #[test]
    fn prop_flat_save_matches_children(
        amount in proptest::option::of(amount()),
        currency in proptest::option::of(currency_code()),
    ) {
        let mut field = MoneyField::new("Cost", "Cost");
        field.amount_field_mut().set_decimal(amount);
        field.currency_field_mut().set_value(currency.clone());

        let mut bag = PropertyBag::new();
        field.save_into(&mut bag).unwrap();

        prop_assert_eq!(bag.get("CostAmount"), Some(&PropertyValue::Decimal(amount)));
        prop_assert_eq!(bag.get("CostCurrency"), Some(&PropertyValue::Text(currency)));
    }

    /// Readonly state set on the parent always matches both children.
    #[test]
    fn prop_readonly_consistent(flags in prop::collection::vec(any::<bool>(), 1..8)) {
        let mut field = MoneyField::new("Price", "Price");
        for flag in &flags {
            field.set_readonly(*flag);
        }
        let last = *flags.last().unwrap();
        prop_assert_eq!(field.is_readonly(), last);
        prop_assert_eq!(field.amount_field().is_readonly(), last);
        prop_assert_eq!(field.currency_field().is_readonly(), last);
    }
}
