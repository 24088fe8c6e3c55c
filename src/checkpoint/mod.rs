//! Checkpoint and resume for a controller session.
//!
//! The dashboard reloads its history from the backend when the page opens.
//! A [`Checkpoint`] carries the same information in-process: pump state,
//! history, the last reading and decision. It serializes to JSON (for
//! humans and web backends) or bincode (compact).
//!
//! Sinks, policy and configuration are not part of a checkpoint; they are
//! supplied again when resuming through
//! [`ControllerBuilder::resume_from`](crate::builder::ControllerBuilder::resume_from).

use crate::core::{Decision, HistoryLog, PumpState};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod error;

pub use error::CheckpointError;

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Serializable image of a controller session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: String,

    /// When checkpoint was created
    pub timestamp: DateTime<Utc>,

    /// Last humidity reading seen
    pub humidity: i32,

    pub state: PumpState,

    pub history: HistoryLog,

    pub last_decision: Option<Decision>,
}

impl Checkpoint {
    pub(crate) fn capture(
        humidity: i32,
        state: PumpState,
        history: HistoryLog,
        last_decision: Option<Decision>,
    ) -> Self {
        Self {
            version: CHECKPOINT_VERSION,
            id: uuid::Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            humidity,
            state,
            history,
            last_decision,
        }
    }

    /// Check the format version and the state invariants.
    pub fn validate(&self) -> Result<(), CheckpointError> {
        if self.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            });
        }

        let water = self.state.total_water();
        if !water.is_finite() || water < 0.0 {
            return Err(CheckpointError::Inconsistent(format!(
                "total water must be a non-negative amount, got {water}"
            )));
        }

        if self.history.len() > self.history.capacity() {
            return Err(CheckpointError::Inconsistent(format!(
                "history holds {} entries but its capacity is {}",
                self.history.len(),
                self.history.capacity()
            )));
        }

        Ok(())
    }

    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CheckpointError::Encode(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        let checkpoint: Self = serde_json::from_str(json)
            .map_err(|e| CheckpointError::Decode(e.to_string()))?;
        checkpoint.validate()?;
        Ok(checkpoint)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::Encode(e.to_string()))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CheckpointError> {
        let checkpoint: Self = bincode::deserialize(bytes)
            .map_err(|e| CheckpointError::Decode(e.to_string()))?;
        checkpoint.validate()?;
        Ok(checkpoint)
    }
}
