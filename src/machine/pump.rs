//! Pump state machine.

use crate::core::{HistoryLog, Mode, PumpState, RunState, State};
use log::{debug, info, warn};

/// Result of a start or stop request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PumpAction {
    Started,
    Stopped,
    /// The pump was already in the requested run state.
    Unchanged,
}

impl PumpAction {
    pub fn changed(self) -> bool {
        !matches!(self, Self::Unchanged)
    }
}

/// Result of a mode toggle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModeChange {
    pub from: Mode,
    pub to: Mode,
    /// Leaving auto mode stopped a running pump.
    pub forced_stop: bool,
}

/// Owns the pump state and its history, and is the only thing allowed to
/// change either.
///
/// # Example
///
/// ```rust
/// use pumpwise::machine::{PumpAction, PumpStateMachine};
///
/// let mut pump = PumpStateMachine::new(20, 0.5);
///
/// assert_eq!(pump.start(), PumpAction::Started);
/// assert_eq!(pump.start(), PumpAction::Unchanged);
/// assert_eq!(pump.history().len(), 1);
///
/// pump.tick();
/// assert_eq!(pump.state().total_water(), 1.0);
///
/// assert_eq!(pump.stop(), PumpAction::Stopped);
/// pump.tick();
/// assert_eq!(pump.state().total_water(), 1.0);
/// ```
#[derive(Clone, Debug)]
pub struct PumpStateMachine {
    state: PumpState,
    history: HistoryLog,
    water_per_tick: f64,
}

impl PumpStateMachine {
    /// Create a stopped, manual-mode pump with an empty history.
    pub fn new(history_capacity: usize, water_per_tick: f64) -> Self {
        Self::from_parts(
            PumpState::default(),
            HistoryLog::with_capacity(history_capacity),
            water_per_tick,
        )
    }

    /// Rebuild a machine from previously captured state.
    pub fn from_parts(state: PumpState, history: HistoryLog, water_per_tick: f64) -> Self {
        Self {
            state,
            history,
            water_per_tick,
        }
    }

    pub fn state(&self) -> &PumpState {
        &self.state
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    pub fn water_per_tick(&self) -> f64 {
        self.water_per_tick
    }

    /// Append a free-form event to the history without touching the state.
    pub fn record(&mut self, message: impl Into<String>) {
        self.history.record(message);
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Start the pump. Starting also dispenses the first tick of water.
    pub fn start(&mut self) -> PumpAction {
        if self.state.is_running() {
            debug!("start ignored: pump already running");
            return PumpAction::Unchanged;
        }

        self.state.set_run(RunState::Running);
        let mode = self.state.mode();
        self.history
            .record(format!("Pump started (Mode {})", mode.name()));
        info!("pump started in {} mode", mode.name());
        self.tick();
        PumpAction::Started
    }

    pub fn stop(&mut self) -> PumpAction {
        if !self.state.is_running() {
            debug!("stop ignored: pump already stopped");
            return PumpAction::Unchanged;
        }

        self.state.set_run(RunState::Stopped);
        self.history.record("Pump stopped");
        info!(
            "pump stopped, {:.1} L dispensed so far",
            self.state.total_water()
        );
        PumpAction::Stopped
    }

    /// Flip between manual and auto mode.
    ///
    /// Leaving auto mode stops a running pump first, so manual mode never
    /// inherits a pump it did not start. Entering auto mode does not
    /// evaluate anything here; the controller does that with the current
    /// reading.
    pub fn toggle_mode(&mut self) -> ModeChange {
        let from = self.state.mode();
        let to = from.toggled();

        self.state.set_mode(to);
        let forced_stop = from == Mode::Auto && self.stop().changed();

        self.history.record(match to {
            Mode::Auto => "Auto mode enabled",
            Mode::Manual => "Manual mode enabled",
        });
        info!("mode changed from {} to {}", from.name(), to.name());

        ModeChange {
            from,
            to,
            forced_stop,
        }
    }

    /// Add dispensed water. Ignored unless the pump is running and the
    /// amount is a positive finite number. An amount that would overflow
    /// the running total is dropped, so the total stays finite.
    ///
    /// Returns the liters actually added.
    pub fn accrue_water(&mut self, liters: f64) -> f64 {
        if !self.state.is_running() || !liters.is_finite() || liters <= 0.0 {
            return 0.0;
        }
        if !(self.state.total_water() + liters).is_finite() {
            warn!("water accrual of {liters} L dropped: total would overflow");
            return 0.0;
        }
        self.state.add_water(liters);
        liters
    }

    /// One timer tick worth of water.
    pub fn tick(&mut self) -> f64 {
        self.accrue_water(self.water_per_tick)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn messages(pump: &PumpStateMachine) -> Vec<String> {
        pump.history()
            .entries()
            .map(|e| e.message().to_string())
            .collect()
    }

    #[test]
    fn new_machine_is_stopped_and_manual() {
        let pump = PumpStateMachine::new(20, 0.5);
        assert!(!pump.state().is_running());
        assert_eq!(pump.state().mode(), Mode::Manual);
        assert_eq!(pump.state().total_water(), 0.0);
        assert!(pump.history().is_empty());
    }

    #[test]
    fn start_records_mode_and_dispenses_first_tick() {
        let mut pump = PumpStateMachine::new(20, 0.5);

        assert_eq!(pump.start(), PumpAction::Started);

        assert!(pump.state().is_running());
        assert_eq!(pump.state().total_water(), 0.5);
        assert_eq!(messages(&pump), vec!["Pump started (Mode Manual)"]);
    }

    #[test]
    fn start_is_idempotent() {
        let mut pump = PumpStateMachine::new(20, 0.5);
        pump.start();
        let before = *pump.state();

        assert_eq!(pump.start(), PumpAction::Unchanged);

        assert_eq!(*pump.state(), before);
        assert_eq!(pump.history().len(), 1);
    }

    #[test]
    fn stop_when_stopped_is_noop() {
        let mut pump = PumpStateMachine::new(20, 0.5);
        assert_eq!(pump.stop(), PumpAction::Unchanged);
        assert!(pump.history().is_empty());
    }

    #[test]
    fn leaving_auto_while_running_forces_one_stop() {
        let mut pump = PumpStateMachine::new(20, 0.5);
        pump.toggle_mode();
        pump.start();

        let change = pump.toggle_mode();

        assert_eq!(change.from, Mode::Auto);
        assert_eq!(change.to, Mode::Manual);
        assert!(change.forced_stop);
        assert!(!pump.state().is_running());
        assert_eq!(
            messages(&pump),
            vec![
                "Manual mode enabled",
                "Pump stopped",
                "Pump started (Mode Auto)",
                "Auto mode enabled",
            ]
        );
    }

    #[test]
    fn entering_auto_keeps_manual_pump_running() {
        let mut pump = PumpStateMachine::new(20, 0.5);
        pump.start();

        let change = pump.toggle_mode();

        assert!(!change.forced_stop);
        assert!(pump.state().is_running());
        assert_eq!(pump.state().mode(), Mode::Auto);
    }

    #[test]
    fn accrue_water_only_while_running() {
        let mut pump = PumpStateMachine::new(20, 0.5);
        assert_eq!(pump.accrue_water(2.0), 0.0);
        assert_eq!(pump.state().total_water(), 0.0);

        pump.start();
        assert_eq!(pump.accrue_water(2.0), 2.0);
        assert_eq!(pump.state().total_water(), 2.5);
    }

    #[test]
    fn accrue_water_keeps_total_finite() {
        let mut pump = PumpStateMachine::new(20, 0.5);
        pump.start();

        assert_eq!(pump.accrue_water(f64::MAX), f64::MAX);
        let total = pump.state().total_water();

        assert_eq!(pump.accrue_water(f64::MAX), 0.0);
        assert!(pump.state().total_water().is_finite());
        assert_eq!(pump.state().total_water(), total);
    }

    #[test]
    fn accrue_water_rejects_non_positive_amounts() {
        let mut pump = PumpStateMachine::new(20, 0.5);
        pump.start();

        assert_eq!(pump.accrue_water(-1.0), 0.0);
        assert_eq!(pump.accrue_water(0.0), 0.0);
        assert_eq!(pump.accrue_water(f64::NAN), 0.0);
        assert_eq!(pump.accrue_water(f64::INFINITY), 0.0);
        assert_eq!(pump.state().total_water(), 0.5);
    }

    #[test]
    fn history_stays_bounded() {
        let mut pump = PumpStateMachine::new(3, 0.5);
        for _ in 0..5 {
            pump.start();
            pump.stop();
        }
        assert_eq!(pump.history().len(), 3);
        assert_eq!(pump.history().latest().unwrap().message(), "Pump stopped");
    }
}
