//! Destinations for finished messages.
//!
//! A [`Sink`] receives one complete string per delivered message. Closures
//! taking `&str` are sinks too, so callers can inject a sink inline.

mod memory;
mod terminal;
mod writer;

pub use memory::MemorySink;
pub use terminal::{PrintSink, PrintlnSink};
pub use writer::WriterSink;

/// `Send + Sync` so one sink can back several dispatcher slots behind an `Arc`.
pub trait Sink: Send + Sync {
    /// Hands over one finished message.
    ///
    /// # Errors
    /// I/O errors from the underlying destination. Callers in this crate drop them.
    fn deliver(&self, text: &str) -> Result<(), crate::Error>;
}

impl<F> Sink for F
where
    F: Fn(&str) + Send + Sync,
{
    fn deliver(&self, text: &str) -> Result<(), crate::Error> {
        self(text);
        Ok(())
    }
}
