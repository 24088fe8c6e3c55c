//! Controller configuration.
//!
//! One configuration type covers both dashboard variants: the edge variant
//! keeps 20 history entries, the cloud variant 50. Everything else (the
//! decision thresholds, the water dispensed per tick, the auto-stop guard)
//! is shared and tunable.
//!
//! Validation uses stillwater's `Validation` so that every broken rule is
//! reported at once rather than one per attempt.
//!
//! # Example
//!
//! ```rust
//! use pumpwise::config::{ConfigError, IrrigationConfig};
//!
//! let config = IrrigationConfig::from_json(r#"{ "history_capacity": 50 }"#).unwrap();
//! assert_eq!(config.history_capacity, 50);
//! assert_eq!(config.thresholds.critical_low, 30);
//!
//! let bad = IrrigationConfig::from_json(r#"{ "history_capacity": 0, "water_per_tick": -1.0 }"#);
//! match bad {
//!     Err(ConfigError::Invalid(violations)) => assert_eq!(violations.len(), 2),
//!     other => panic!("expected violations, got {other:?}"),
//! }
//! ```

use crate::core::{Humidity, Thresholds};
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

pub mod error;

pub use error::{ConfigError, ConfigViolation};

/// History capacity of the edge-analysis dashboard.
pub const EDGE_HISTORY_CAPACITY: usize = 20;

/// History capacity of the cloud-backed dashboard.
pub const CLOUD_HISTORY_CAPACITY: usize = 50;

/// Largest history capacity a configuration may ask for.
pub const MAX_HISTORY_CAPACITY: usize = 10_000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IrrigationConfig {
    pub thresholds: Thresholds,

    /// Maximum number of history entries kept.
    pub history_capacity: usize,

    /// Liters dispensed per timer tick while running (one tick per second
    /// in the dashboard).
    pub water_per_tick: f64,

    /// Auto mode stops a running pump on a non-watering decision only when
    /// humidity is strictly above this value.
    pub stop_above: i32,

    /// Humidity assumed before the first reading arrives.
    pub initial_humidity: i32,
}

impl Default for IrrigationConfig {
    fn default() -> Self {
        Self::edge()
    }
}

impl IrrigationConfig {
    pub fn edge() -> Self {
        Self {
            thresholds: Thresholds::default(),
            history_capacity: EDGE_HISTORY_CAPACITY,
            water_per_tick: 0.5,
            stop_above: 50,
            initial_humidity: 50,
        }
    }

    pub fn cloud() -> Self {
        Self {
            history_capacity: CLOUD_HISTORY_CAPACITY,
            ..Self::edge()
        }
    }

    /// Parse a JSON document and validate it. Missing fields take the
    /// edge defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.check()?;
        Ok(config)
    }

    /// Check every rule, accumulating ALL violations.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ConfigViolation>> {
        let t = &self.thresholds;
        let order = [
            ("critical_low", t.critical_low, "low", t.low),
            ("low", t.low, "optimal_min", t.optimal_min),
            ("optimal_min", t.optimal_min, "optimal_max", t.optimal_max),
            ("optimal_max", t.optimal_max, "critical_high", t.critical_high),
        ];

        let mut checks: Vec<Validation<(), NonEmptyVec<ConfigViolation>>> = order
            .into_iter()
            .map(|(lower, lower_value, upper, upper_value)| {
                rule(lower_value <= upper_value, || ConfigViolation::ThresholdOrder {
                    lower,
                    lower_value,
                    upper,
                    upper_value,
                })
            })
            .collect();

        checks.push(rule(self.history_capacity > 0, || {
            ConfigViolation::ZeroHistoryCapacity
        }));
        checks.push(rule(self.history_capacity <= MAX_HISTORY_CAPACITY, || {
            ConfigViolation::HistoryCapacityTooLarge {
                value: self.history_capacity,
                max: MAX_HISTORY_CAPACITY,
            }
        }));
        checks.push(rule(
            self.water_per_tick.is_finite() && self.water_per_tick >= 0.0,
            || ConfigViolation::InvalidWaterPerTick {
                value: self.water_per_tick,
            },
        ));
        checks.push(humidity_rule("stop_above", self.stop_above));
        checks.push(humidity_rule("initial_humidity", self.initial_humidity));

        Validation::all_vec(checks).map(|_| ())
    }

    /// [`validate`](Self::validate) as a `Result`.
    pub fn check(&self) -> Result<(), ConfigError> {
        match self.validate() {
            Validation::Success(()) => Ok(()),
            Validation::Failure(violations) => Err(ConfigError::Invalid(
                violations.iter().cloned().collect(),
            )),
        }
    }
}

fn rule(
    holds: bool,
    violation: impl FnOnce() -> ConfigViolation,
) -> Validation<(), NonEmptyVec<ConfigViolation>> {
    if holds {
        Validation::success(())
    } else {
        Validation::fail(violation())
    }
}

fn humidity_rule(field: &'static str, value: i32) -> Validation<(), NonEmptyVec<ConfigViolation>> {
    rule(Humidity::new(value).is_ok(), || {
        ConfigViolation::HumidityOutOfRange { field, value }
    })
}
