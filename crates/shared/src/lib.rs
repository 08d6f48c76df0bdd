//! Shared value types, errors, and configuration for Kino.
//!
//! This crate provides the monetary value type used by the ticketing side:
//! - `MoneyAmount`, an immutable euro/cent amount
//! - Error types for contract violations and format errors
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{MoneyError, MoneyResult};
pub use types::MoneyAmount;
