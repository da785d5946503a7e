use super::*;
use rust_decimal::Decimal;

#[test]
fn test_money_like_accessors() {
    let money = MoneyValue::new(Decimal::new(-250, 2), "JPY");
    assert_eq!(MoneyLike::amount(&money), Some(Decimal::new(-250, 2)));
    assert_eq!(MoneyLike::currency(&money), Some("JPY"));
}

#[test]
fn test_money_like_accessors_on_partial_value() {
    let money = MoneyValue::from_parts(None, Some("EUR".into()));
    assert_eq!(MoneyLike::amount(&money), None);
    assert_eq!(MoneyLike::currency(&money), Some("EUR"));
}

#[test]
fn test_currency_code_is_not_normalized() {
    let money = MoneyValue::new(Decimal::ONE, "usd");
    assert_eq!(money.currency.as_deref(), Some("usd"));
}

#[test]
fn test_deserialize_from_pascal_case() {
    let money: MoneyValue =
        serde_json::from_str(r#"{"Amount":"12.34","Currency":"EUR"}"#).unwrap();
    assert_eq!(money, MoneyValue::new(Decimal::new(1234, 2), "EUR"));
}
