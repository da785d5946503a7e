//! Form primitives shared by all fields.
//!
//! - `FormField` trait and the `FieldState` every field carries
//! - `FormContext` for the owning form
//! - `FormData` for submitted key/value pairs
//! - `FieldError` and `ValidationResult` for per-field validation

pub mod data;
pub mod error;
pub mod field;

pub use data::FormData;
pub use error::{FieldError, ValidationResult};
pub use field::{FieldState, FormContext, FormField};
