//! Pump state: the run flag, the operating mode and the water counter.
//!
//! The run state and the mode are orthogonal. Neither is a sub-state of the
//! other, so they are modelled as two independent enums held side by side in
//! [`PumpState`].

use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};

/// Trait for the discrete flags that make up the pump state.
///
/// # Example
///
/// ```rust
/// use pumpwise::core::{Mode, RunState, State};
///
/// assert_eq!(RunState::Running.name(), "Running");
/// assert_eq!(Mode::Auto.name(), "Auto");
/// assert!(RunState::Running.is_active());
/// assert!(!Mode::Manual.is_active());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Whether this flag is in its "on" position.
    ///
    /// Default implementation returns `false`.
    fn is_active(&self) -> bool {
        false
    }
}

/// Whether the pump is moving water.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum RunState {
    #[default]
    Stopped,
    Running,
}

impl State for RunState {
    fn name(&self) -> &str {
        match self {
            Self::Stopped => "Stopped",
            Self::Running => "Running",
        }
    }

    fn is_active(&self) -> bool {
        matches!(self, Self::Running)
    }
}

/// Who decides when the pump runs.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum Mode {
    /// Only explicit user commands change the pump state.
    #[default]
    Manual,
    /// Humidity decisions drive the pump.
    Auto,
}

impl Mode {
    /// The mode a toggle leads to.
    pub fn toggled(self) -> Self {
        match self {
            Self::Manual => Self::Auto,
            Self::Auto => Self::Manual,
        }
    }
}

impl State for Mode {
    fn name(&self) -> &str {
        match self {
            Self::Manual => "Manual",
            Self::Auto => "Auto",
        }
    }

    fn is_active(&self) -> bool {
        matches!(self, Self::Auto)
    }
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Snapshot of everything the pump knows about itself.
///
/// Fields are private: the run state and mode move only through
/// [`PumpStateMachine`](crate::machine::PumpStateMachine), and the water
/// counter only grows while running.
///
/// # Example
///
/// ```rust
/// use pumpwise::core::{Mode, PumpState};
///
/// let state = PumpState::default();
/// assert!(!state.is_running());
/// assert_eq!(state.mode(), Mode::Manual);
/// assert_eq!(state.total_water(), 0.0);
/// ```
#[derive(Clone, Copy, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct PumpState {
    run: RunState,
    mode: Mode,
    /// Liters dispensed since the session began.
    total_water: f64,
}

impl PumpState {
    pub fn run_state(&self) -> RunState {
        self.run
    }

    pub fn is_running(&self) -> bool {
        self.run.is_active()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_auto(&self) -> bool {
        self.mode.is_active()
    }

    pub fn total_water(&self) -> f64 {
        self.total_water
    }

    pub(crate) fn set_run(&mut self, run: RunState) {
        self.run = run;
    }

    pub(crate) fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    pub(crate) fn add_water(&mut self, liters: f64) {
        self.total_water += liters;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_name_returns_correct_value() {
        assert_eq!(RunState::Stopped.name(), "Stopped");
        assert_eq!(RunState::Running.name(), "Running");
        assert_eq!(Mode::Manual.name(), "Manual");
        assert_eq!(Mode::Auto.name(), "Auto");
    }

    #[test]
    fn is_active_identifies_on_positions() {
        assert!(!RunState::Stopped.is_active());
        assert!(RunState::Running.is_active());
        assert!(!Mode::Manual.is_active());
        assert!(Mode::Auto.is_active());
    }

    #[test]
    fn toggled_flips_mode() {
        assert_eq!(Mode::Manual.toggled(), Mode::Auto);
        assert_eq!(Mode::Auto.toggled(), Mode::Manual);
        assert_eq!(Mode::Auto.toggled().toggled(), Mode::Auto);
    }

    #[test]
    fn default_state_is_stopped_manual_and_dry() {
        let state = PumpState::default();
        assert_eq!(state.run_state(), RunState::Stopped);
        assert_eq!(state.mode(), Mode::Manual);
        assert!(!state.is_auto());
        assert_eq!(state.total_water(), 0.0);
    }

    #[test]
    fn display_uses_name() {
        assert_eq!(RunState::Running.to_string(), "Running");
        assert_eq!(Mode::Manual.to_string(), "Manual");
    }

    #[test]
    fn state_serializes_correctly() {
        let mut state = PumpState::default();
        state.set_run(RunState::Running);
        state.set_mode(Mode::Auto);
        state.add_water(1.5);

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: PumpState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
