//! Common types used across the workspace.

pub mod money;

#[cfg(test)]
mod money_tests;

pub use money::{MoneyLike, MoneyValue};
