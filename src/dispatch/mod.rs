//! Per-severity sink table for callers that already hold a complete string.
//!
//! Each severity has its own slot, plus a `msg` slot that ignores the
//! threshold. Empty slots swallow messages silently.
//!
//! ```
//! use ezlog::{Dispatcher, Level, MemorySink};
//!
//! let errors = MemorySink::new();
//! let mut log = Dispatcher::new();
//! log.set_level(Level::Warning);
//! log.set_err(errors.clone());
//!
//! log.err("disk full");
//! log.info("ignored: no sink and filtered");
//!
//! assert_eq!(errors.messages(), vec!["disk full".to_string()]);
//! ```

use crate::config::Config;
use crate::level::{Level, passes};
use crate::output::{PrintSink, PrintlnSink, Sink};
use std::fmt;
use std::sync::Arc;

/// One optional sink per real severity plus the level-agnostic slot.
#[derive(Clone, Default)]
pub struct SinkTable {
    levels: [Option<Arc<dyn Sink>>; 9],
    msg: Option<Arc<dyn Sink>>,
}

impl SinkTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// `Level::Log` addresses the `msg` slot. `Disabled` has no slot.
    #[must_use]
    pub fn get(&self, level: Level) -> Option<&Arc<dyn Sink>> {
        match level {
            Level::Log => self.msg.as_ref(),
            Level::Disabled => None,
            _ => self.levels[Self::index(level)].as_ref(),
        }
    }

    /// Replaces the slot for `level`. `None` empties it. Setting `Disabled` does nothing.
    pub fn set(&mut self, level: Level, sink: Option<Arc<dyn Sink>>) {
        match level {
            Level::Log => self.msg = sink,
            Level::Disabled => {}
            _ => self.levels[Self::index(level)] = sink,
        }
    }

    /// Number of filled slots, `msg` included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.levels.iter().flatten().count() + usize::from(self.msg.is_some())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[allow(clippy::cast_sign_loss)]
    const fn index(level: Level) -> usize {
        level.ordinal() as usize
    }
}

impl fmt::Debug for SinkTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let filled: Vec<Level> = Level::all()
            .into_iter()
            .filter(|l| self.get(*l).is_some())
            .collect();
        f.debug_struct("SinkTable")
            .field("levels", &filled)
            .field("msg", &self.msg.is_some())
            .finish()
    }
}

/// Threshold plus sink table. Starts `Disabled` with every slot empty.
#[derive(Debug, Clone, Default)]
pub struct Dispatcher {
    level: Level,
    sinks: SinkTable,
}

impl Dispatcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies the configured threshold and fills every slot with a stdout sink.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let mut dispatcher = Self::new();
        dispatcher.set_level(config.level);
        if config.newline {
            dispatcher.set_all(PrintlnSink);
        } else {
            dispatcher.set_all(PrintSink);
        }
        dispatcher
    }

    /// Takes effect on the next emit; nothing is buffered.
    pub const fn set_level(&mut self, level: Level) {
        self.level = level;
    }

    /// Threshold currently applied.
    #[must_use]
    pub const fn level(&self) -> Level {
        self.level
    }

    /// Read access to the slots, e.g. to check what `from_config` installed.
    #[must_use]
    pub const fn sinks(&self) -> &SinkTable {
        &self.sinks
    }

    // --- setters

    /// Generic form of the per-level setters; `Level::Log` fills the `msg` slot.
    pub fn set_sink(&mut self, level: Level, sink: impl Sink + 'static) {
        self.sinks.set(level, Some(Arc::new(sink)));
    }

    /// Empties a slot so that level goes silent.
    pub fn unset_sink(&mut self, level: Level) {
        self.sinks.set(level, None);
    }

    /// One shared sink behind every slot, `msg` included.
    pub fn set_all(&mut self, sink: impl Sink + 'static) {
        let shared: Arc<dyn Sink> = Arc::new(sink);
        for level in Level::all() {
            self.sinks.set(level, Some(Arc::clone(&shared)));
        }
        self.sinks.set(Level::Log, Some(shared));
    }

    /// Stdout with a newline in every slot, the usual quick setup.
    pub fn set_all_println(&mut self) {
        self.set_all(PrintlnSink);
    }

    /// Where EMERG messages go once they pass the threshold.
    pub fn set_emerg(&mut self, sink: impl Sink + 'static) {
        self.set_sink(Level::Emerg, sink);
    }

    /// Where ALERT messages go once they pass the threshold.
    pub fn set_alert(&mut self, sink: impl Sink + 'static) {
        self.set_sink(Level::Alert, sink);
    }

    /// Where CRIT messages go once they pass the threshold.
    pub fn set_crit(&mut self, sink: impl Sink + 'static) {
        self.set_sink(Level::Crit, sink);
    }

    /// Where ERR messages go once they pass the threshold.
    pub fn set_err(&mut self, sink: impl Sink + 'static) {
        self.set_sink(Level::Err, sink);
    }

    /// Where WARNING messages go once they pass the threshold.
    pub fn set_warning(&mut self, sink: impl Sink + 'static) {
        self.set_sink(Level::Warning, sink);
    }

    /// Where NOTICE messages go once they pass the threshold.
    pub fn set_notice(&mut self, sink: impl Sink + 'static) {
        self.set_sink(Level::Notice, sink);
    }

    /// Where INFO messages go once they pass the threshold.
    pub fn set_info(&mut self, sink: impl Sink + 'static) {
        self.set_sink(Level::Info, sink);
    }

    /// Where DEBUG messages go once they pass the threshold.
    pub fn set_debug(&mut self, sink: impl Sink + 'static) {
        self.set_sink(Level::Debug, sink);
    }

    /// Where TRACE messages go once they pass the threshold.
    pub fn set_trace(&mut self, sink: impl Sink + 'static) {
        self.set_sink(Level::Trace, sink);
    }

    /// Where threshold-free [`Self::msg`] calls go.
    pub fn set_msg(&mut self, sink: impl Sink + 'static) {
        self.set_sink(Level::Log, sink);
    }

    // --- emitters

    /// Core routing: threshold check, then slot lookup. Sink errors are dropped.
    pub fn emit(&self, level: Level, msg: impl AsRef<str>) {
        if !passes(self.level, level) {
            return;
        }
        if let Some(sink) = self.sinks.get(level) {
            let _ = sink.deliver(msg.as_ref());
        }
    }

    /// Sends EMERG; dropped when the threshold is below it or the slot is empty.
    pub fn emerg(&self, msg: impl AsRef<str>) {
        self.emit(Level::Emerg, msg);
    }

    /// Sends ALERT; dropped when the threshold is below it or the slot is empty.
    pub fn alert(&self, msg: impl AsRef<str>) {
        self.emit(Level::Alert, msg);
    }

    /// Sends CRIT; dropped when the threshold is below it or the slot is empty.
    pub fn crit(&self, msg: impl AsRef<str>) {
        self.emit(Level::Crit, msg);
    }

    /// Sends ERR; dropped when the threshold is below it or the slot is empty.
    pub fn err(&self, msg: impl AsRef<str>) {
        self.emit(Level::Err, msg);
    }

    /// Sends WARNING; dropped when the threshold is below it or the slot is empty.
    pub fn warning(&self, msg: impl AsRef<str>) {
        self.emit(Level::Warning, msg);
    }

    /// Sends NOTICE; dropped when the threshold is below it or the slot is empty.
    pub fn notice(&self, msg: impl AsRef<str>) {
        self.emit(Level::Notice, msg);
    }

    /// Sends INFO; dropped when the threshold is below it or the slot is empty.
    pub fn info(&self, msg: impl AsRef<str>) {
        self.emit(Level::Info, msg);
    }

    /// Sends DEBUG; dropped when the threshold is below it or the slot is empty.
    pub fn debug(&self, msg: impl AsRef<str>) {
        self.emit(Level::Debug, msg);
    }

    /// Sends TRACE; dropped when the threshold is below it or the slot is empty.
    pub fn trace(&self, msg: impl AsRef<str>) {
        self.emit(Level::Trace, msg);
    }

    /// Skips the threshold; delivered whenever the `msg` slot is filled.
    pub fn msg(&self, msg: impl AsRef<str>) {
        self.emit(Level::Log, msg);
    }
}
