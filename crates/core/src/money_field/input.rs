//! Values accepted by `MoneyField::set_value`.

use moneta_shared::{MoneyLike, MoneyValue};
use rust_decimal::Decimal;
use serde_json::Value;

/// Key of the amount part in map input and in child field names.
pub const AMOUNT_KEY: &str = "Amount";
/// Key of the currency part in map input and in child field names.
pub const CURRENCY_KEY: &str = "Currency";

/// Amount part of a decomposed input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AmountInput {
    /// An already parsed amount.
    Decimal(Decimal),
    /// Text to be parsed by the amount field.
    Text(String),
}

/// Input to `MoneyField::set_value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyInput {
    /// Amount and currency, split out of a map or a money object.
    Parts {
        /// Amount part, if given.
        amount: Option<AmountInput>,
        /// Currency code, if given.
        currency: Option<String>,
    },
    /// Anything else; kept as the field's raw value without decomposition.
    Raw(Value),
}

impl MoneyInput {
    /// Decomposes any money-like object.
    pub fn from_money<M: MoneyLike + ?Sized>(money: &M) -> Self {
        Self::Parts {
            amount: money.amount().map(AmountInput::Decimal),
            currency: money.currency().map(str::to_owned),
        }
    }
}

impl From<MoneyValue> for MoneyInput {
    fn from(money: MoneyValue) -> Self {
        Self::Parts {
            amount: money.amount.map(AmountInput::Decimal),
            currency: money.currency,
        }
    }
}

impl From<&MoneyValue> for MoneyInput {
    fn from(money: &MoneyValue) -> Self {
        Self::from_money(money)
    }
}

/// Objects decompose on their `Amount` and `Currency` keys; a missing key
/// leaves that part empty. Every other JSON value is kept raw.
impl From<Value> for MoneyInput {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(mut map) => Self::Parts {
                amount: map.remove(AMOUNT_KEY).and_then(amount_from_json),
                currency: map.remove(CURRENCY_KEY).and_then(scalar_text),
            },
            other => Self::Raw(other),
        }
    }
}

/// Non-scalar amounts are kept as their JSON text so the amount field
/// reports them as non-numeric. Only `null` means no amount.
fn amount_from_json(value: Value) -> Option<AmountInput> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(AmountInput::Text(s)),
        other => Some(AmountInput::Text(other.to_string())),
    }
}

fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
