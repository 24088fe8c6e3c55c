//! Outbound notifications.
//!
//! The controller pushes two kinds of output through these ports:
//!
//! - a [`Snapshot`] to every [`RenderSink`] after each mutating operation,
//! - a [`PersistenceRecord`] to every [`PersistenceSink`] after each
//!   command or evaluation.
//!
//! Sinks sit on the far side of the core. A render sink cannot fail; a
//! persistence sink may, but its error is logged by the controller and
//! dropped. Nothing is retried.

use crate::core::{Decision, DecisionLabel, HistoryEntry, Mode, PumpState};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

mod channel;
mod json;
mod memory;

pub use channel::ChannelSink;
pub use json::JsonLinesSink;
pub use memory::MemorySink;

/// Everything a presentation layer needs to redraw.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub state: PumpState,
    pub humidity: i32,
    /// Most recent auto-mode decision, if any evaluation has run.
    pub decision: Option<Decision>,
    /// History, newest first.
    pub history: Vec<HistoryEntry>,
}

/// One row for the remote store.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistenceRecord {
    pub timestamp: DateTime<Utc>,
    pub humidity: i32,
    pub pump_running: bool,
    pub total_water: f64,
    pub decision: Option<DecisionLabel>,
    pub mode: Mode,
}

/// Failure reported by a persistence sink.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("Failed to encode record: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Failed to write record: {0}")]
    Io(#[from] std::io::Error),

    #[error("Persistence worker is gone")]
    Disconnected,

    #[error("Backend rejected record: {0}")]
    Rejected(String),
}

/// Receives a snapshot after every state change.
pub trait RenderSink: Send {
    fn on_state_changed(&mut self, snapshot: &Snapshot);
}

/// Receives a record per command or evaluation, best effort.
pub trait PersistenceSink: Send {
    fn on_event(&mut self, record: &PersistenceRecord) -> Result<(), PersistenceError>;
}

impl<F> RenderSink for F
where
    F: FnMut(&Snapshot) + Send,
{
    fn on_state_changed(&mut self, snapshot: &Snapshot) {
        self(snapshot)
    }
}
