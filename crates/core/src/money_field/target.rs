//! Persistence targets for `MoneyField::save_into`.

use std::collections::BTreeMap;

use moneta_shared::{AppError, AppResult, MoneyValue};
use rust_decimal::Decimal;

/// A scalar written to a flat property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyValue {
    /// Text property (currency code).
    Text(Option<String>),
    /// Decimal property (amount).
    Decimal(Option<Decimal>),
}

/// Optional capability: store a money value as one structured assignment.
pub trait AcceptsStructuredMoney {
    /// Returns true if the field `name` is stored as one structured value.
    fn accepts_money(&self, name: &str) -> bool;

    /// Stores `money` under `name`.
    fn set_money(&mut self, name: &str, money: MoneyValue) -> AppResult<()>;
}

/// Anything a form can save into.
///
/// Every target supports flat properties. Targets that store money as a
/// single value also return themselves from `as_structured_money`.
pub trait SaveTarget {
    /// Writes one flat property.
    fn set_property(&mut self, name: &str, value: PropertyValue) -> AppResult<()>;

    /// The structured-money capability, if supported.
    fn as_structured_money(&mut self) -> Option<&mut dyn AcceptsStructuredMoney> {
        None
    }
}

/// In-memory target that stores flat properties by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyBag {
    properties: BTreeMap<String, PropertyValue>,
    known: Option<Vec<String>>,
}

impl PropertyBag {
    /// Creates a bag accepting any property name.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a bag that only accepts the listed property names.
    pub fn with_properties<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            properties: BTreeMap::new(),
            known: Some(names.into_iter().map(Into::into).collect()),
        }
    }

    /// Returns the stored property.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&PropertyValue> {
        self.properties.get(name)
    }

    /// Returns the stored text property.
    #[must_use]
    pub fn text(&self, name: &str) -> Option<&str> {
        match self.properties.get(name)? {
            PropertyValue::Text(value) => value.as_deref(),
            PropertyValue::Decimal(_) => None,
        }
    }

    /// Returns the stored decimal property.
    #[must_use]
    pub fn decimal(&self, name: &str) -> Option<Decimal> {
        match self.properties.get(name)? {
            PropertyValue::Decimal(value) => *value,
            PropertyValue::Text(_) => None,
        }
    }

    /// Number of stored properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Returns true if nothing was stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl SaveTarget for PropertyBag {
    fn set_property(&mut self, name: &str, value: PropertyValue) -> AppResult<()> {
        if let Some(known) = &self.known
            && !known.iter().any(|k| k == name)
        {
            return Err(AppError::UnknownProperty(name.to_string()));
        }
        self.properties.insert(name.to_string(), value);
        Ok(())
    }
}
