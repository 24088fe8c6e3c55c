//! Auto-mode pump policy.
//!
//! The policy is deliberately asymmetric. A watering decision starts a
//! stopped pump, but a non-watering decision stops a running pump only
//! above the stop threshold. Between the low rows of the decision table and
//! that threshold the pump keeps whatever state it has, which keeps it from
//! flapping around the optimal band.

use crate::core::{Decision, Guard};

/// What a guard sees when the policy is consulted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Evaluation {
    pub humidity: i32,
    pub decision: Decision,
    pub running: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AutoAction {
    Start,
    Stop,
    Hold,
}

/// Pair of guards deciding when auto mode starts or stops the pump.
///
/// # Example
///
/// ```rust
/// use pumpwise::controller::{AutoAction, AutoPolicy, Evaluation};
/// use pumpwise::core::DecisionEngine;
///
/// let policy = AutoPolicy::default();
/// let engine = DecisionEngine::default();
///
/// let at = |humidity, running| Evaluation {
///     humidity,
///     decision: engine.decide(humidity),
///     running,
/// };
///
/// assert_eq!(policy.apply(&at(25, false)), AutoAction::Start);
/// assert_eq!(policy.apply(&at(90, true)), AutoAction::Stop);
/// assert_eq!(policy.apply(&at(45, true)), AutoAction::Hold);
/// ```
#[derive(Clone, Debug)]
pub struct AutoPolicy {
    start_when: Guard<Evaluation>,
    stop_when: Guard<Evaluation>,
}

impl AutoPolicy {
    pub fn new(start_when: Guard<Evaluation>, stop_when: Guard<Evaluation>) -> Self {
        Self {
            start_when,
            stop_when,
        }
    }

    /// The dashboard policy with a configurable stop threshold.
    pub fn with_stop_above(stop_above: i32) -> Self {
        Self::new(
            Guard::new(|e: &Evaluation| e.decision.should_water && !e.running),
            Guard::new(move |e: &Evaluation| {
                !e.decision.should_water && e.running && e.humidity > stop_above
            }),
        )
    }

    pub fn apply(&self, evaluation: &Evaluation) -> AutoAction {
        if self.start_when.check(evaluation) {
            AutoAction::Start
        } else if self.stop_when.check(evaluation) {
            AutoAction::Stop
        } else {
            AutoAction::Hold
        }
    }
}

impl Default for AutoPolicy {
    fn default() -> Self {
        Self::with_stop_above(50)
    }
}
