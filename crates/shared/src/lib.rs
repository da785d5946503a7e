//! Shared types, errors, and configuration for Moneta.
//!
//! This crate provides common types used across all other crates:
//! - `MoneyValue` with decimal precision
//! - Workspace-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::{AppConfig, MoneyFieldConfig};
pub use error::{AppError, AppResult};
pub use types::{MoneyLike, MoneyValue};
