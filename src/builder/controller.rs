//! Builder for constructing irrigation controllers.

use crate::builder::error::BuildError;
use crate::checkpoint::Checkpoint;
use crate::config::IrrigationConfig;
use crate::controller::{AutoPolicy, IrrigationController};
use crate::core::DecisionEngine;
use crate::machine::PumpStateMachine;
use crate::sink::{PersistenceSink, RenderSink};

/// Builder for constructing controllers with a fluent API.
///
/// Everything is optional: without calls the controller uses
/// [`IrrigationConfig::edge`], the default auto policy and no sinks.
///
/// # Example
///
/// ```rust
/// use pumpwise::builder::ControllerBuilder;
/// use pumpwise::config::IrrigationConfig;
/// use pumpwise::controller::AutoPolicy;
///
/// let controller = ControllerBuilder::new()
///     .config(IrrigationConfig::cloud())
///     .policy(AutoPolicy::with_stop_above(60))
///     .render_sink(|snapshot: &pumpwise::sink::Snapshot| {
///         println!("pump running: {}", snapshot.state.is_running());
///     })
///     .build()
///     .unwrap();
///
/// assert_eq!(controller.history().capacity(), 50);
/// ```
pub struct ControllerBuilder {
    config: IrrigationConfig,
    policy: Option<AutoPolicy>,
    render_sinks: Vec<Box<dyn RenderSink>>,
    persistence_sinks: Vec<Box<dyn PersistenceSink>>,
    checkpoint: Option<Checkpoint>,
}

impl ControllerBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            config: IrrigationConfig::default(),
            policy: None,
            render_sinks: Vec::new(),
            persistence_sinks: Vec::new(),
            checkpoint: None,
        }
    }

    pub fn config(mut self, config: IrrigationConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the auto policy. Without this the policy is built from the
    /// config's `stop_above`.
    pub fn policy(mut self, policy: AutoPolicy) -> Self {
        self.policy = Some(policy);
        self
    }

    /// Add a render sink. May be called repeatedly.
    pub fn render_sink(mut self, sink: impl RenderSink + 'static) -> Self {
        self.render_sinks.push(Box::new(sink));
        self
    }

    /// Add a persistence sink. May be called repeatedly.
    pub fn persistence_sink(mut self, sink: impl PersistenceSink + 'static) -> Self {
        self.persistence_sinks.push(Box::new(sink));
        self
    }

    /// Continue a previous session instead of starting fresh.
    ///
    /// The history is re-capped to the configured capacity, keeping the
    /// newest entries.
    pub fn resume_from(mut self, checkpoint: Checkpoint) -> Self {
        self.checkpoint = Some(checkpoint);
        self
    }

    /// Build the controller.
    /// Returns an error if the config or checkpoint is invalid.
    pub fn build(self) -> Result<IrrigationController, BuildError> {
        self.config.check()?;

        let config = self.config;
        let policy = self
            .policy
            .unwrap_or_else(|| AutoPolicy::with_stop_above(config.stop_above));

        let (machine, humidity, last_decision) = match self.checkpoint {
            Some(checkpoint) => {
                checkpoint.validate()?;
                let history = checkpoint.history.resized(config.history_capacity);
                let mut machine =
                    PumpStateMachine::from_parts(checkpoint.state, history, config.water_per_tick);
                machine.record("Session resumed");
                (machine, checkpoint.humidity, checkpoint.last_decision)
            }
            None => {
                let mut machine =
                    PumpStateMachine::new(config.history_capacity, config.water_per_tick);
                machine.record("System initialized");
                (machine, config.initial_humidity, None)
            }
        };

        Ok(IrrigationController::from_parts(
            machine,
            DecisionEngine::new(config.thresholds),
            policy,
            humidity,
            last_decision,
            self.render_sinks,
            self.persistence_sinks,
        ))
    }
}

impl Default for ControllerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
