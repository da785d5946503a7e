//! The composite money field.

use std::rc::Rc;

use moneta_shared::{AppResult, MoneyFieldConfig, MoneyValue};
use serde_json::Value;
use tracing::{debug, trace};

use super::amount::AmountField;
use super::currency::{AllowedCurrencies, CurrencyField};
use super::input::{AMOUNT_KEY, AmountInput, CURRENCY_KEY, MoneyInput};
use super::target::{PropertyValue, SaveTarget};
use crate::form::{FieldState, FormContext, FormData, FormField, ValidationResult};

/// Type tag reported to schema consumers.
pub const SCHEMA_TYPE: &str = "MoneyField";

/// A single logical form field for an amount plus a currency.
///
/// Owns one [`AmountField`] and one [`CurrencyField`], named `N[Amount]` and
/// `N[Currency]` for a parent named `N`. Cloning deep-copies both children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoneyField {
    state: FieldState,
    amount_field: AmountField,
    currency_field: CurrencyField,
    allowed_currencies: AllowedCurrencies,
    locale: Option<String>,
    raw_value: Option<Value>,
}

/// Name of a child field: `Price` + `Amount` gives `Price[Amount]`.
#[must_use]
pub fn child_name(parent: &str, key: &str) -> String {
    format!("{parent}[{key}]")
}

impl MoneyField {
    /// Creates an empty money field with a free-text currency input.
    #[must_use]
    pub fn new(name: impl Into<String>, title: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            amount_field: AmountField::new(child_name(&name, AMOUNT_KEY)),
            currency_field: CurrencyField::text(child_name(&name, CURRENCY_KEY)),
            state: FieldState::new(name, Some(title.into())),
            allowed_currencies: AllowedCurrencies::default(),
            locale: None,
            raw_value: None,
        }
    }

    /// Creates a money field with allowed currencies and locale taken from
    /// configuration.
    #[must_use]
    pub fn configured(
        name: impl Into<String>,
        title: impl Into<String>,
        config: &MoneyFieldConfig,
    ) -> Self {
        let mut field = Self::new(name, title);
        if !config.allowed_currencies.is_empty() {
            field.set_allowed_currencies(AllowedCurrencies::from_codes(
                config.allowed_currencies.iter().cloned(),
            ));
        }
        field.locale.clone_from(&config.locale);
        field
    }

    /// Sets the initial value.
    #[must_use]
    pub fn with_value(mut self, value: impl Into<MoneyInput>) -> Self {
        self.set_value(value);
        self
    }

    /// Sets the combined value.
    ///
    /// Maps and money objects are split into the amount and currency
    /// children. Anything else is kept as the raw value and the children are
    /// left untouched.
    pub fn set_value(&mut self, value: impl Into<MoneyInput>) {
        match value.into() {
            MoneyInput::Parts { amount, currency } => {
                self.raw_value = None;
                self.currency_field.set_value(currency);
                match amount {
                    Some(AmountInput::Decimal(amount)) => {
                        self.amount_field.set_decimal(Some(amount));
                    }
                    Some(AmountInput::Text(text)) => self.amount_field.set_text(Some(text.as_str())),
                    None => self.amount_field.set_decimal(None),
                }
            }
            MoneyInput::Raw(value) => {
                trace!(field = %self.state.name, %value, "money value kept without decomposition");
                self.raw_value = Some(value);
            }
        }
    }

    /// Reads `N[Amount]` and `N[Currency]` from a form post.
    ///
    /// Read-only and disabled fields ignore submissions.
    pub fn load_submitted(&mut self, data: &FormData) {
        if self.state.readonly || self.state.disabled {
            trace!(field = %self.state.name, "submission ignored for inactive field");
            return;
        }
        self.raw_value = None;
        self.amount_field.set_text(data.get(self.amount_field.name()));
        let currency = data.get(self.currency_field.name()).map(str::to_owned);
        self.currency_field.set_value(currency);
    }

    /// The amount child.
    #[must_use]
    pub fn amount_field(&self) -> &AmountField {
        &self.amount_field
    }

    /// The amount child, mutably.
    pub fn amount_field_mut(&mut self) -> &mut AmountField {
        &mut self.amount_field
    }

    /// The currency child.
    #[must_use]
    pub fn currency_field(&self) -> &CurrencyField {
        &self.currency_field
    }

    /// The currency child, mutably.
    pub fn currency_field_mut(&mut self) -> &mut CurrencyField {
        &mut self.currency_field
    }

    /// The value reassembled from both children.
    #[must_use]
    pub fn data_value(&self) -> MoneyValue {
        MoneyValue::from_parts(
            self.amount_field.data_value(),
            self.currency_field.data_value().map(str::to_owned),
        )
    }

    /// The last undecomposed value passed to `set_value`.
    #[must_use]
    pub fn raw_value(&self) -> Option<&Value> {
        self.raw_value.as_ref()
    }

    /// Restricts currency entry to `allowed`, or lifts the restriction when
    /// it is empty.
    ///
    /// The currency child is rebuilt as a selector or a text input, in its
    /// read-only variant when this field is read-only. Its current value is
    /// carried over unchanged.
    pub fn set_allowed_currencies(&mut self, allowed: impl Into<AllowedCurrencies>) {
        self.allowed_currencies = allowed.into();

        let current = self.currency_field.data_value().map(str::to_owned);
        let mut rebuilt =
            CurrencyField::build(self.currency_field.name(), current, &self.allowed_currencies);
        self.sync_child_state(&mut rebuilt);
        if self.state.readonly {
            rebuilt = rebuilt.readonly_transformation();
        }

        debug!(
            field = %self.state.name,
            selector = rebuilt.is_selector(),
            options = self.allowed_currencies.len(),
            "currency field rebuilt"
        );
        self.currency_field = rebuilt;
    }

    /// The configured currency restriction; empty when unrestricted.
    #[must_use]
    pub fn allowed_currencies(&self) -> &AllowedCurrencies {
        &self.allowed_currencies
    }

    /// Stores a locale tag. Display and parsing do not consult it.
    pub fn set_locale(&mut self, locale: impl Into<String>) {
        self.locale = Some(locale.into());
    }

    /// The stored locale tag.
    #[must_use]
    pub fn locale(&self) -> Option<&str> {
        self.locale.as_deref()
    }

    /// Type tag reported to schema consumers.
    #[must_use]
    pub const fn schema_type(&self) -> &'static str {
        SCHEMA_TYPE
    }

    /// Structural check: both children are still bound to this field.
    ///
    /// Holds by construction; this is not validation of the entered values.
    #[must_use]
    pub fn validate(&self) -> bool {
        self.amount_field.name() == child_name(&self.state.name, AMOUNT_KEY)
            && self.currency_field.name() == child_name(&self.state.name, CURRENCY_KEY)
    }

    /// Runs the children's own value validation.
    pub fn validate_values(&self, result: &mut ValidationResult) -> bool {
        let amount_ok = self.amount_field.validate(result);
        let currency_ok = self.currency_field.validate(result);
        amount_ok && currency_ok
    }

    /// Writes the value into `target`.
    ///
    /// Targets that accept structured money for this field's name get one
    /// `MoneyValue`. All others get `<N>Currency` and `<N>Amount`.
    pub fn save_into<T: SaveTarget + ?Sized>(&self, target: &mut T) -> AppResult<()> {
        let name = self.state.name.as_str();

        if let Some(structured) = target.as_structured_money()
            && structured.accepts_money(name)
        {
            debug!(field = %name, "saving money as structured value");
            return structured.set_money(name, self.data_value());
        }

        debug!(field = %name, "saving money as flat properties");
        target.set_property(
            &format!("{name}{CURRENCY_KEY}"),
            PropertyValue::Text(self.currency_field.data_value().map(str::to_owned)),
        )?;
        target.set_property(
            &format!("{name}{AMOUNT_KEY}"),
            PropertyValue::Decimal(self.amount_field.data_value()),
        )
    }

    fn sync_child_state<F: FormField>(&self, child: &mut F) {
        child.set_readonly(self.state.readonly);
        child.set_disabled(self.state.disabled);
        if let Some(form) = &self.state.form {
            child.set_form(form);
        }
    }
}

impl FormField for MoneyField {
    fn state(&self) -> &FieldState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut FieldState {
        &mut self.state
    }

    fn field_type(&self) -> &'static str {
        SCHEMA_TYPE
    }

    fn readonly_transformation(&self) -> Self {
        let mut clone = self.clone();
        clone.amount_field = self.amount_field.readonly_transformation();
        clone.currency_field = self.currency_field.readonly_transformation();
        clone.state.readonly = true;
        clone
    }

    fn set_readonly(&mut self, readonly: bool) {
        self.state.readonly = readonly;
        self.amount_field.set_readonly(readonly);
        self.currency_field.set_readonly(readonly);
    }

    fn set_disabled(&mut self, disabled: bool) {
        self.state.disabled = disabled;
        self.amount_field.set_disabled(disabled);
        self.currency_field.set_disabled(disabled);
    }

    fn set_form(&mut self, form: &Rc<FormContext>) {
        self.amount_field.set_form(form);
        self.currency_field.set_form(form);
        self.state.form = Some(Rc::clone(form));
    }
}
