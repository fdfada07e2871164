//! Configuration error types.
//!
//! Every variant is fatal: generation never starts on an invalid
//! configuration, so no table can be produced from bad parameters.

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("distribution '{name}' has no entries")]
    EmptyDistribution { name: String },

    #[error("distribution '{name}' has a negative or non-finite weight at index {index}")]
    InvalidWeight { name: String, index: usize },

    #[error("distribution '{name}' weights sum to {sum}, expected 1.0")]
    WeightSum { name: String, sum: f64 },

    #[error("range '{name}' is invalid: low {low}, high {high}")]
    InvalidRange { name: String, low: f64, high: f64 },

    #[error("row count '{name}' must be positive")]
    ZeroCount { name: String },

    #[error("date window start {start} is after end {end}")]
    InvalidWindow { start: NaiveDate, end: NaiveDate },

    #[error("'{name}' must be positive, got {value}")]
    NonPositive { name: String, value: f64 },
}

pub type Result<T> = std::result::Result<T, ConfigError>;
