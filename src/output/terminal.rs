//! Stdout sinks, the default destination for a fresh logger.

use super::Sink;
use std::io::{self, Write};

/// Writes each message to stdout as-is.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrintSink;

impl Sink for PrintSink {
    fn deliver(&self, text: &str) -> Result<(), crate::Error> {
        let mut out = io::stdout().lock();
        out.write_all(text.as_bytes())?;
        out.flush()?;
        Ok(())
    }
}

/// Writes each message to stdout followed by a newline.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrintlnSink;

impl Sink for PrintlnSink {
    fn deliver(&self, text: &str) -> Result<(), crate::Error> {
        let mut out = io::stdout().lock();
        writeln!(out, "{text}")?;
        Ok(())
    }
}
