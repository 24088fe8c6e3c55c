//! In-memory sink for tests and embedding.

use super::{PersistenceError, PersistenceRecord, PersistenceSink, RenderSink, Snapshot};
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Debug, Default)]
struct Recorded {
    snapshots: Vec<Snapshot>,
    records: Vec<PersistenceRecord>,
}

/// Records everything it receives. Clones share the same storage, so one
/// handle can be given to the controller and another kept for inspection.
///
/// # Example
///
/// ```rust
/// use pumpwise::builder::ControllerBuilder;
/// use pumpwise::sink::MemorySink;
///
/// let sink = MemorySink::new();
/// let mut controller = ControllerBuilder::new()
///     .render_sink(sink.clone())
///     .persistence_sink(sink.clone())
///     .build()
///     .unwrap();
///
/// controller.start();
///
/// assert_eq!(sink.snapshots().len(), 1);
/// assert!(sink.records()[0].pump_running);
/// ```
#[derive(Clone, Debug, Default)]
pub struct MemorySink {
    inner: Arc<Mutex<Recorded>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshots(&self) -> Vec<Snapshot> {
        self.lock().snapshots.clone()
    }

    pub fn last_snapshot(&self) -> Option<Snapshot> {
        self.lock().snapshots.last().cloned()
    }

    pub fn records(&self) -> Vec<PersistenceRecord> {
        self.lock().records.clone()
    }

    fn lock(&self) -> MutexGuard<'_, Recorded> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl RenderSink for MemorySink {
    fn on_state_changed(&mut self, snapshot: &Snapshot) {
        self.lock().snapshots.push(snapshot.clone());
    }
}

impl PersistenceSink for MemorySink {
    fn on_event(&mut self, record: &PersistenceRecord) -> Result<(), PersistenceError> {
        self.lock().records.push(record.clone());
        Ok(())
    }
}
