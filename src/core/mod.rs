//! Core irrigation types and logic.
//!
//! This module contains the pure part of the controller:
//! - Pump state flags via the `State` trait
//! - The humidity decision table
//! - Guard predicates for transition control
//! - The bounded event history
//! - Reading validation
//!
//! Nothing in here performs I/O.

mod decision;
mod guard;
mod history;
mod reading;
mod state;

pub use decision::{Decision, DecisionEngine, DecisionLabel, Thresholds};
pub use guard::Guard;
pub use history::{HistoryEntry, HistoryLog};
pub use reading::{Humidity, ReadingError};
pub use state::{Mode, PumpState, RunState, State};
