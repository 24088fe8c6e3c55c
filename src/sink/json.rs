//! JSON Lines persistence sink.

use super::{PersistenceError, PersistenceRecord, PersistenceSink};
use std::io::Write;

/// Writes one JSON object per line: the spreadsheet row of the remote
/// store (`timestamp`, `humidity`, `pumpRunning`, `totalWater`, `decision`,
/// `mode`).
#[derive(Debug)]
pub struct JsonLinesSink<W: Write + Send> {
    writer: W,
}

impl<W: Write + Send> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send> PersistenceSink for JsonLinesSink<W> {
    fn on_event(&mut self, record: &PersistenceRecord) -> Result<(), PersistenceError> {
        serde_json::to_writer(&mut self.writer, record)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }
}
