//! Pumpwise: decision and state-transition engine for a smart irrigation pump
//!
//! Pumpwise is the core of a simulated irrigation dashboard. A humidity
//! reading goes through a fixed decision table; in auto mode the result
//! starts or stops a virtual pump; every transition is written to a bounded
//! history; and renderers and remote stores are notified through sinks.
//!
//! # Core Concepts
//!
//! - **Decision table**: Pure mapping from humidity to a watering decision
//! - **Pump state machine**: Run state and mode, changed only by commands
//! - **Auto policy**: Guards deciding when a decision moves the pump
//! - **History**: Newest-first event log with a fixed capacity
//! - **Sinks**: Render and persistence ports, never able to fail the core
//!
//! # Example
//!
//! ```rust
//! use pumpwise::builder::ControllerBuilder;
//! use pumpwise::config::IrrigationConfig;
//! use pumpwise::core::DecisionLabel;
//! use pumpwise::sink::MemorySink;
//!
//! let sink = MemorySink::new();
//! let mut controller = ControllerBuilder::new()
//!     .config(IrrigationConfig::edge())
//!     .render_sink(sink.clone())
//!     .build()
//!     .unwrap();
//!
//! controller.toggle_mode();
//! controller.on_humidity_changed(25);
//! assert!(controller.is_running());
//!
//! controller.tick();
//! assert_eq!(controller.state().total_water(), 1.0);
//!
//! controller.on_humidity_changed(45);
//! assert!(controller.is_running()); // inside the hysteresis gap
//!
//! controller.on_humidity_changed(60);
//! assert!(!controller.is_running());
//! assert_eq!(
//!     sink.last_snapshot().unwrap().decision.map(|d| d.label),
//!     Some(DecisionLabel::Optimal)
//! );
//! ```

pub mod builder;
pub mod checkpoint;
pub mod config;
pub mod controller;
pub mod core;
pub mod machine;
pub mod sink;

// Re-export commonly used types
pub use builder::{BuildError, ControllerBuilder};
pub use config::IrrigationConfig;
pub use controller::IrrigationController;
pub use crate::core::{Decision, DecisionEngine, DecisionLabel, HistoryLog, Mode, PumpState};
