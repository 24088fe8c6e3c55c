//! Humidity → watering decision table.
//!
//! The engine is a pure function of the reading and its thresholds. It is
//! total over all integers: readings outside 0–100 are not rejected here but
//! fall through the same table (negative values land in `CriticalLow`, values
//! above 100 in `CriticalHigh`). Range checks belong to
//! [`Humidity`](crate::core::Humidity).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category a humidity reading falls into.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DecisionLabel {
    CriticalLow,
    HighLow,
    Optimal,
    CriticalHigh,
    Acceptable,
}

impl DecisionLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CriticalLow => "CRITICAL_LOW",
            Self::HighLow => "HIGH_LOW",
            Self::Optimal => "OPTIMAL",
            Self::CriticalHigh => "CRITICAL_HIGH",
            Self::Acceptable => "ACCEPTABLE",
        }
    }

    /// Operator-facing advice for this category.
    pub fn description(&self) -> &'static str {
        match self {
            Self::CriticalLow => "water immediately",
            Self::HighLow => "water soon",
            Self::Optimal => "no watering needed",
            Self::CriticalHigh => "stop watering, root rot risk",
            Self::Acceptable => "can water if needed",
        }
    }
}

impl fmt::Display for DecisionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of running the decision table on one reading.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Decision {
    pub label: DecisionLabel,
    pub should_water: bool,
}

impl Decision {
    fn new(label: DecisionLabel, should_water: bool) -> Self {
        Self {
            label,
            should_water,
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.label, self.label.description())
    }
}

/// Boundaries of the decision table, in humidity percent.
///
/// Rows are checked in order, first match wins:
///
/// | condition                                 | label           | water |
/// |-------------------------------------------|-----------------|-------|
/// | `h < critical_low`                        | `CRITICAL_LOW`  | yes   |
/// | `h < low`                                 | `HIGH_LOW`      | yes   |
/// | `optimal_min <= h <= optimal_max`         | `OPTIMAL`       | no    |
/// | `h > critical_high`                       | `CRITICAL_HIGH` | no    |
/// | anything else                             | `ACCEPTABLE`    | no    |
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    pub critical_low: i32,
    pub low: i32,
    pub optimal_min: i32,
    pub optimal_max: i32,
    pub critical_high: i32,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            critical_low: 30,
            low: 40,
            optimal_min: 50,
            optimal_max: 70,
            critical_high: 85,
        }
    }
}

/// Maps a humidity percentage to a [`Decision`].
///
/// # Example
///
/// ```rust
/// use pumpwise::core::{DecisionEngine, DecisionLabel};
///
/// let engine = DecisionEngine::default();
///
/// let dry = engine.decide(25);
/// assert_eq!(dry.label, DecisionLabel::CriticalLow);
/// assert!(dry.should_water);
///
/// let fine = engine.decide(60);
/// assert_eq!(fine.label, DecisionLabel::Optimal);
/// assert!(!fine.should_water);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct DecisionEngine {
    thresholds: Thresholds,
}

impl DecisionEngine {
    pub fn new(thresholds: Thresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    pub fn decide(&self, humidity: i32) -> Decision {
        let t = &self.thresholds;
        if humidity < t.critical_low {
            Decision::new(DecisionLabel::CriticalLow, true)
        } else if humidity < t.low {
            Decision::new(DecisionLabel::HighLow, true)
        } else if (t.optimal_min..=t.optimal_max).contains(&humidity) {
            Decision::new(DecisionLabel::Optimal, false)
        } else if humidity > t.critical_high {
            Decision::new(DecisionLabel::CriticalHigh, false)
        } else {
            Decision::new(DecisionLabel::Acceptable, false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decide(h: i32) -> Decision {
        DecisionEngine::default().decide(h)
    }

    #[test]
    fn table_boundaries() {
        assert_eq!(decide(29).label, DecisionLabel::CriticalLow);
        assert_eq!(decide(30).label, DecisionLabel::HighLow);
        assert_eq!(decide(39).label, DecisionLabel::HighLow);
        assert_eq!(decide(40).label, DecisionLabel::Acceptable);
        assert_eq!(decide(49).label, DecisionLabel::Acceptable);
        assert_eq!(decide(50).label, DecisionLabel::Optimal);
        assert_eq!(decide(70).label, DecisionLabel::Optimal);
        assert_eq!(decide(71).label, DecisionLabel::Acceptable);
        assert_eq!(decide(85).label, DecisionLabel::Acceptable);
        assert_eq!(decide(86).label, DecisionLabel::CriticalHigh);
    }

    #[test]
    fn only_low_rows_water() {
        assert!(decide(0).should_water);
        assert!(decide(35).should_water);
        assert!(!decide(45).should_water);
        assert!(!decide(60).should_water);
        assert!(!decide(80).should_water);
        assert!(!decide(100).should_water);
    }

    #[test]
    fn out_of_range_readings_fall_through_the_table() {
        assert_eq!(decide(-5).label, DecisionLabel::CriticalLow);
        assert_eq!(decide(150).label, DecisionLabel::CriticalHigh);
        assert_eq!(decide(i32::MIN).label, DecisionLabel::CriticalLow);
        assert_eq!(decide(i32::MAX).label, DecisionLabel::CriticalHigh);
    }

    #[test]
    fn custom_thresholds_shift_the_table() {
        let engine = DecisionEngine::new(Thresholds {
            critical_low: 35,
            low: 45,
            optimal_min: 45,
            optimal_max: 65,
            critical_high: 75,
        });

        assert_eq!(engine.decide(32).label, DecisionLabel::CriticalLow);
        assert_eq!(engine.decide(44).label, DecisionLabel::HighLow);
        assert_eq!(engine.decide(45).label, DecisionLabel::Optimal);
        assert_eq!(engine.decide(70).label, DecisionLabel::Acceptable);
        assert_eq!(engine.decide(76).label, DecisionLabel::CriticalHigh);
    }

    #[test]
    fn labels_render_in_screaming_case() {
        assert_eq!(DecisionLabel::HighLow.to_string(), "HIGH_LOW");
        let json = serde_json::to_string(&DecisionLabel::CriticalHigh).unwrap();
        assert_eq!(json, "\"CRITICAL_HIGH\"");
    }

    #[test]
    fn decision_display_includes_description() {
        assert_eq!(decide(20).to_string(), "CRITICAL_LOW - water immediately");
    }
}
