//! Core form logic for Moneta.
//!
//! This crate contains pure form logic with ZERO web or database dependencies.
//! Rendering and persistence stay with the caller, reached through the
//! `FormField` and `SaveTarget` seams.
//!
//! # Modules
//!
//! - `form` - Field state, form context, submitted data and validation results
//! - `money_field` - The composite amount + currency field

pub mod form;
pub mod money_field;

pub use form::{FieldError, FieldState, FormContext, FormData, FormField, ValidationResult};
pub use money_field::{
    AcceptsStructuredMoney, AllowedCurrencies, AmountField, CurrencyField, MoneyField, MoneyInput,
    PropertyBag, PropertyValue, SaveTarget,
};
