//! Currency sub-field and the allowed-currency set.

use crate::form::{FieldError, FieldState, FormField, ValidationResult};

/// Ordered mapping of currency code to display label.
///
/// An empty set means currency entry is unrestricted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowedCurrencies {
    options: Vec<(String, String)>,
}

impl AllowedCurrencies {
    /// Builds a set from bare codes; each code doubles as its own label.
    pub fn from_codes<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        codes
            .into_iter()
            .map(|code| {
                let code = code.into();
                (code.clone(), code)
            })
            .collect()
    }

    /// Builds a set from code/label pairs, keeping the given order.
    pub fn from_labels<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        pairs.into_iter().collect()
    }

    /// Adds a code, or relabels it in place if already present.
    pub fn insert(&mut self, code: impl Into<String>, label: impl Into<String>) {
        let code = code.into();
        let label = label.into();
        match self.options.iter_mut().find(|(c, _)| *c == code) {
            Some(existing) => existing.1 = label,
            None => self.options.push((code, label)),
        }
    }

    /// Returns true if no currency is configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Number of configured currencies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Returns true if `code` is one of the options.
    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.label(code).is_some()
    }

    /// Display label for `code`.
    #[must_use]
    pub fn label(&self, code: &str) -> Option<&str> {
        self.options
            .iter()
            .find(|(c, _)| c == code)
            .map(|(_, label)| label.as_str())
    }

    /// Code/label pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.options.iter().map(|(c, l)| (c.as_str(), l.as_str()))
    }

    /// Codes in order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.options.iter().map(|(c, _)| c.as_str())
    }
}

impl<K, V> FromIterator<(K, V)> for AllowedCurrencies
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut allowed = Self::default();
        for (code, label) in iter {
            allowed.insert(code, label);
        }
        allowed
    }
}

impl From<Vec<String>> for AllowedCurrencies {
    fn from(codes: Vec<String>) -> Self {
        Self::from_codes(codes)
    }
}

impl From<&[&str]> for AllowedCurrencies {
    fn from(codes: &[&str]) -> Self {
        Self::from_codes(codes.iter().copied())
    }
}

impl<const N: usize> From<[&str; N]> for AllowedCurrencies {
    fn from(codes: [&str; N]) -> Self {
        Self::from_codes(codes)
    }
}

impl<const N: usize> From<[(&str, &str); N]> for AllowedCurrencies {
    fn from(pairs: [(&str, &str); N]) -> Self {
        Self::from_labels(pairs)
    }
}

/// How the currency is entered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CurrencyInput {
    /// Unrestricted text.
    Text,
    /// Closed choice among the configured currencies.
    Select(AllowedCurrencies),
    /// Read-only rendering of a selector; shows the chosen label.
    Lookup(AllowedCurrencies),
}

/// Currency sub-field: free text or a selector over allowed currencies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyField {
    state: FieldState,
    input: CurrencyInput,
    value: Option<String>,
}

impl CurrencyField {
    /// Creates an empty free-text currency field.
    #[must_use]
    pub fn text(name: impl Into<String>) -> Self {
        Self {
            state: FieldState::new(name, None),
            input: CurrencyInput::Text,
            value: None,
        }
    }

    /// Creates an empty selector over `allowed`.
    #[must_use]
    pub fn select(name: impl Into<String>, allowed: AllowedCurrencies) -> Self {
        Self {
            state: FieldState::new(name, None),
            input: CurrencyInput::Select(allowed),
            value: None,
        }
    }

    /// Builds a fresh currency field for the given configuration.
    ///
    /// A non-empty set yields a selector, anything else free text. `value` is
    /// applied as-is, whether or not it is one of the options.
    #[must_use]
    pub fn build(name: impl Into<String>, value: Option<String>, allowed: &AllowedCurrencies) -> Self {
        let mut field = if allowed.is_empty() {
            Self::text(name)
        } else {
            Self::select(name, allowed.clone())
        };
        field.value = value;
        field
    }

    /// Sets the currency code.
    pub fn set_value(&mut self, value: Option<String>) {
        self.value = value;
    }

    /// The currency code, suitable for persistence.
    #[must_use]
    pub fn data_value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// The value as shown to the user: the option label for selectors,
    /// the code otherwise.
    #[must_use]
    pub fn display_value(&self) -> Option<&str> {
        let code = self.value.as_deref()?;
        match self.options() {
            Some(options) => Some(options.label(code).unwrap_or(code)),
            None => Some(code),
        }
    }

    /// How the currency is entered.
    #[must_use]
    pub fn input(&self) -> &CurrencyInput {
        &self.input
    }

    /// Selector options, if this is a selector.
    #[must_use]
    pub fn options(&self) -> Option<&AllowedCurrencies> {
        match &self.input {
            CurrencyInput::Text => None,
            CurrencyInput::Select(options) | CurrencyInput::Lookup(options) => Some(options),
        }
    }

    /// Returns true if the currency is chosen from a closed set.
    #[must_use]
    pub fn is_selector(&self) -> bool {
        self.options().is_some()
    }

    /// Reports a selected code that is not one of the options.
    pub fn validate(&self, result: &mut ValidationResult) -> bool {
        let (CurrencyInput::Select(options), Some(value)) = (&self.input, &self.value) else {
            return true;
        };
        if value.is_empty() || options.contains(value) {
            return true;
        }
        result.add_error(FieldError::NotAnOption {
            field: self.state.name.clone(),
            value: value.clone(),
        });
        false
    }
}

impl FormField for CurrencyField {
    fn state(&self) -> &FieldState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut FieldState {
        &mut self.state
    }

    fn field_type(&self) -> &'static str {
        match self.input {
            CurrencyInput::Text => "TextField",
            CurrencyInput::Select(_) => "DropdownField",
            CurrencyInput::Lookup(_) => "LookupField",
        }
    }

    fn readonly_transformation(&self) -> Self {
        let mut field = self.clone();
        field.state.readonly = true;
        if let CurrencyInput::Select(options) = &self.input {
            field.input = CurrencyInput::Lookup(options.clone());
        }
        field
    }
}
