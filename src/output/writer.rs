//! Sink over any `io::Write`, e.g. an open file or an in-memory buffer.

use super::Sink;
use std::io::Write;
use std::sync::{Mutex, PoisonError};

/// The writer sits behind a mutex so the sink stays `Sync` and shareable.
#[derive(Debug)]
pub struct WriterSink<W> {
    writer: Mutex<W>,
    newline: bool,
}

impl<W: Write + Send> WriterSink<W> {
    /// Appends a newline after every message.
    #[must_use]
    pub const fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
            newline: true,
        }
    }

    #[must_use]
    pub fn newline(mut self, enabled: bool) -> Self {
        self.newline = enabled;
        self
    }

    /// Gives the writer back, e.g. to inspect a `Vec<u8>` after logging.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write + Send> Sink for WriterSink<W> {
    fn deliver(&self, text: &str) -> Result<(), crate::Error> {
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        writer.write_all(text.as_bytes())?;
        if self.newline {
            writer.write_all(b"\n")?;
        }
        writer.flush()?;
        Ok(())
    }
}
