//! Checkpoint error types.

use thiserror::Error;

/// Why a checkpoint could not be written or restored.
#[derive(Debug, Error)]
pub enum CheckpointError {
    #[error("Cannot encode checkpoint: {0}")]
    Encode(String),

    #[error("Cannot decode checkpoint: {0}")]
    Decode(String),

    #[error("Checkpoint format v{found} is not readable, expected v{supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// The decoded session breaks a pump or history invariant.
    #[error("Checkpoint session is inconsistent: {0}")]
    Inconsistent(String),
}
