//! The irrigation controller.
//!
//! [`IrrigationController`] is the single entry point the outside world
//! drives: readings from the sensor source, ticks from the timer, and
//! start/stop/toggle commands from the user. It owns the pump state
//! machine, runs the decision table in auto mode, and fans every change out
//! to the configured sinks.
//!
//! ```text
//!  readings ──▶ ┌──────────────────────────┐ ──▶ RenderSink
//!  ticks    ──▶ │   IrrigationController   │
//!  commands ──▶ │ decide · policy · pump   │ ──▶ PersistenceSink
//!               └──────────────────────────┘
//! ```
//!
//! Everything runs to completion on the caller's thread. Sinks are called
//! synchronously but their failures never reach the caller.

mod auto;

pub use auto::{AutoAction, AutoPolicy, Evaluation};

use crate::builder::{BuildError, ControllerBuilder};
use crate::checkpoint::Checkpoint;
use crate::config::IrrigationConfig;
use crate::core::{
    Decision, DecisionEngine, HistoryLog, Humidity, Mode, PumpState, ReadingError,
};
use crate::machine::{ModeChange, PumpAction, PumpStateMachine};
use crate::sink::{PersistenceRecord, PersistenceSink, RenderSink, Snapshot};
use chrono::Utc;
use log::{debug, warn};
use std::fmt;

/// Drives the pump from readings, ticks and user commands.
///
/// # Example
///
/// ```rust
/// use pumpwise::controller::IrrigationController;
/// use pumpwise::config::IrrigationConfig;
/// use pumpwise::core::DecisionLabel;
///
/// let mut controller = IrrigationController::new(IrrigationConfig::edge()).unwrap();
///
/// controller.on_humidity_changed(25);
/// assert!(!controller.is_running()); // manual mode ignores readings
///
/// controller.toggle_mode();
/// assert!(controller.is_running());
/// assert_eq!(
///     controller.last_decision().map(|d| d.label),
///     Some(DecisionLabel::CriticalLow)
/// );
///
/// controller.on_humidity_changed(90);
/// assert!(!controller.is_running());
/// ```
pub struct IrrigationController {
    machine: PumpStateMachine,
    engine: DecisionEngine,
    policy: AutoPolicy,
    humidity: i32,
    last_decision: Option<Decision>,
    render_sinks: Vec<Box<dyn RenderSink>>,
    persistence_sinks: Vec<Box<dyn PersistenceSink>>,
}

impl IrrigationController {
    /// Controller with no sinks and the default policy for `config`.
    pub fn new(config: IrrigationConfig) -> Result<Self, BuildError> {
        ControllerBuilder::new().config(config).build()
    }

    pub fn builder() -> ControllerBuilder {
        ControllerBuilder::new()
    }

    pub(crate) fn from_parts(
        machine: PumpStateMachine,
        engine: DecisionEngine,
        policy: AutoPolicy,
        humidity: i32,
        last_decision: Option<Decision>,
        render_sinks: Vec<Box<dyn RenderSink>>,
        persistence_sinks: Vec<Box<dyn PersistenceSink>>,
    ) -> Self {
        Self {
            machine,
            engine,
            policy,
            humidity,
            last_decision,
            render_sinks,
            persistence_sinks,
        }
    }

    pub fn state(&self) -> &PumpState {
        self.machine.state()
    }

    pub fn history(&self) -> &HistoryLog {
        self.machine.history()
    }

    pub fn humidity(&self) -> i32 {
        self.humidity
    }

    pub fn mode(&self) -> Mode {
        self.machine.state().mode()
    }

    pub fn is_running(&self) -> bool {
        self.machine.state().is_running()
    }

    pub fn last_decision(&self) -> Option<Decision> {
        self.last_decision
    }

    pub fn engine(&self) -> &DecisionEngine {
        &self.engine
    }

    /// What the decision table says about the current reading, without
    /// acting on it.
    pub fn decide(&self) -> Decision {
        self.engine.decide(self.humidity)
    }

    /// A new reading arrived. In auto mode it is evaluated immediately.
    ///
    /// Any integer is accepted; see [`submit_reading`](Self::submit_reading)
    /// for the range-checked path.
    pub fn on_humidity_changed(&mut self, humidity: i32) -> Option<Decision> {
        self.humidity = humidity;
        if self.machine.state().is_auto() {
            self.evaluate(humidity)
        } else {
            self.render();
            None
        }
    }

    /// Parse and range-check raw input before forwarding it to
    /// [`on_humidity_changed`](Self::on_humidity_changed).
    ///
    /// A rejected reading leaves the controller untouched.
    pub fn submit_reading(&mut self, raw: &str) -> Result<Option<Decision>, ReadingError> {
        let humidity = raw.parse::<Humidity>().inspect_err(|err| {
            warn!("rejected humidity reading: {err}");
        })?;
        Ok(self.on_humidity_changed(humidity.value()))
    }

    /// Range-checked variant of [`on_humidity_changed`](Self::on_humidity_changed).
    pub fn submit(&mut self, humidity: i32) -> Result<Option<Decision>, ReadingError> {
        let humidity = Humidity::new(humidity).inspect_err(|err| {
            warn!("rejected humidity reading: {err}");
        })?;
        Ok(self.on_humidity_changed(humidity.value()))
    }

    /// Run the decision table on `humidity` and let the auto policy act on
    /// it. Does nothing in manual mode.
    ///
    /// Every evaluation is logged to the history, action or not.
    pub fn evaluate(&mut self, humidity: i32) -> Option<Decision> {
        if !self.machine.state().is_auto() {
            debug!("evaluation skipped in manual mode");
            return None;
        }
        self.humidity = humidity;
        let decision = self.run_evaluation();
        self.publish(Some(decision));
        Some(decision)
    }

    /// User command. Allowed in either mode.
    pub fn start(&mut self) -> PumpAction {
        let action = self.machine.start();
        if action.changed() {
            self.publish(None);
        }
        action
    }

    /// User command. Allowed in either mode.
    pub fn stop(&mut self) -> PumpAction {
        let action = self.machine.stop();
        if action.changed() {
            self.publish(None);
        }
        action
    }

    /// Switch between manual and auto mode. Entering auto mode evaluates
    /// the current reading straight away.
    pub fn toggle_mode(&mut self) -> ModeChange {
        let change = self.machine.toggle_mode();
        let decision = match change.to {
            Mode::Auto => Some(self.run_evaluation()),
            Mode::Manual => None,
        };
        self.publish(decision);
        change
    }

    /// Timer callback: credit `liters` of dispensed water if running.
    pub fn accrue_water(&mut self, liters: f64) -> f64 {
        let added = self.machine.accrue_water(liters);
        if added > 0.0 {
            self.render();
        }
        added
    }

    /// Timer callback using the configured amount per tick.
    pub fn tick(&mut self) -> f64 {
        let added = self.machine.tick();
        if added > 0.0 {
            self.render();
        }
        added
    }

    pub fn clear_history(&mut self) {
        self.machine.clear_history();
        self.render();
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            state: *self.machine.state(),
            humidity: self.humidity,
            decision: self.last_decision,
            history: self.machine.history().to_vec(),
        }
    }

    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint::capture(
            self.humidity,
            *self.machine.state(),
            self.machine.history().clone(),
            self.last_decision,
        )
    }

    fn run_evaluation(&mut self) -> Decision {
        let humidity = self.humidity;
        let decision = self.engine.decide(humidity);
        let evaluation = Evaluation {
            humidity,
            decision,
            running: self.machine.state().is_running(),
        };

        let action = self.policy.apply(&evaluation);
        match action {
            AutoAction::Start => {
                self.machine.start();
            }
            AutoAction::Stop => {
                self.machine.stop();
            }
            AutoAction::Hold => {}
        }

        self.machine.record(format!("Analysis: {decision}"));
        debug!("humidity {humidity}% -> {} ({action:?})", decision.label);
        self.last_decision = Some(decision);
        decision
    }

    fn publish(&mut self, decision: Option<Decision>) {
        self.persist(decision);
        self.render();
    }

    fn persist(&mut self, decision: Option<Decision>) {
        if self.persistence_sinks.is_empty() {
            return;
        }

        let state = self.machine.state();
        let record = PersistenceRecord {
            timestamp: Utc::now(),
            humidity: self.humidity,
            pump_running: state.is_running(),
            total_water: state.total_water(),
            decision: decision.map(|d| d.label),
            mode: state.mode(),
        };

        for sink in &mut self.persistence_sinks {
            if let Err(err) = sink.on_event(&record) {
                warn!("persistence record dropped: {err}");
            }
        }
    }

    fn render(&mut self) {
        if self.render_sinks.is_empty() {
            return;
        }

        let snapshot = self.snapshot();
        for sink in &mut self.render_sinks {
            sink.on_state_changed(&snapshot);
        }
    }
}

impl fmt::Debug for IrrigationController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IrrigationController")
            .field("machine", &self.machine)
            .field("engine", &self.engine)
            .field("humidity", &self.humidity)
            .field("last_decision", &self.last_decision)
            .field("render_sinks", &self.render_sinks.len())
            .field("persistence_sinks", &self.persistence_sinks.len())
            .finish()
    }
}
