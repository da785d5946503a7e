//! Composite money field.
//!
//! This module implements a form field whose single logical value is an
//! amount plus a currency:
//! - `AmountField` - numeric sub-field
//! - `CurrencyField` - free-text or selector sub-field, rebuilt from `AllowedCurrencies`
//! - `MoneyInput` - shapes accepted by `MoneyField::set_value`
//! - `SaveTarget` / `AcceptsStructuredMoney` - flat or structured persistence
//! - `MoneyField` - the composite itself

pub mod amount;
pub mod currency;
pub mod field;
pub mod input;
pub mod target;

#[cfg(test)]
mod field_props;

pub use amount::AmountField;
pub use currency::{AllowedCurrencies, CurrencyField, CurrencyInput};
pub use field::{MoneyField, SCHEMA_TYPE, child_name};
pub use input::{AMOUNT_KEY, AmountInput, CURRENCY_KEY, MoneyInput};
pub use target::{AcceptsStructuredMoney, PropertyBag, PropertyValue, SaveTarget};
