//! Fire-and-forget hand-off to a persistence worker.

use super::{PersistenceError, PersistenceRecord, PersistenceSink};
use std::sync::mpsc::{self, Receiver, Sender};

/// Queues records on a channel for a worker the caller owns (typically a
/// thread talking to the remote store). Sending never blocks; if the worker
/// has gone away the record is reported as [`PersistenceError::Disconnected`].
///
/// # Example
///
/// ```rust
/// use pumpwise::builder::ControllerBuilder;
/// use pumpwise::sink::ChannelSink;
///
/// let (sink, rx) = ChannelSink::new();
/// let mut controller = ControllerBuilder::new()
///     .persistence_sink(sink)
///     .build()
///     .unwrap();
///
/// controller.start();
/// let record = rx.try_recv().unwrap();
/// assert!(record.pump_running);
/// ```
#[derive(Debug, Clone)]
pub struct ChannelSink {
    tx: Sender<PersistenceRecord>,
}

impl ChannelSink {
    pub fn new() -> (Self, Receiver<PersistenceRecord>) {
        let (tx, rx) = mpsc::channel();
        (Self { tx }, rx)
    }

    pub fn from_sender(tx: Sender<PersistenceRecord>) -> Self {
        Self { tx }
    }
}

impl PersistenceSink for ChannelSink {
    fn on_event(&mut self, record: &PersistenceRecord) -> Result<(), PersistenceError> {
        self.tx
            .send(record.clone())
            .map_err(|_| PersistenceError::Disconnected)
    }
}
