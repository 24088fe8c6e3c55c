//! Configuration error types.

use thiserror::Error;

/// A single broken configuration rule.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigViolation {
    #[error("Threshold {lower} ({lower_value}) must not exceed {upper} ({upper_value})")]
    ThresholdOrder {
        lower: &'static str,
        lower_value: i32,
        upper: &'static str,
        upper_value: i32,
    },

    #[error("History capacity must be at least 1")]
    ZeroHistoryCapacity,

    #[error("History capacity must not exceed {max}, got {value}")]
    HistoryCapacityTooLarge { value: usize, max: usize },

    #[error("Water per tick must be a finite, non-negative amount, got {value}")]
    InvalidWaterPerTick { value: f64 },

    #[error("{field} must lie within 0-100%, got {value}")]
    HumidityOutOfRange { field: &'static str, value: i32 },
}

/// Errors that can occur when loading a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    Parse(String),

    #[error("Invalid configuration: {}", join(.0))]
    Invalid(Vec<ConfigViolation>),
}

fn join(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
