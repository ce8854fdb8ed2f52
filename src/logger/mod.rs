//! Fluent per-instance logger.
//!
//! A message starts with a severity call (`info()`, `warning()`, ...), which
//! clears the buffer. Fragments are then chained on and `out()` hands the
//! assembled text to the sink:
//!
//! ```
//! use ezlog::{Level, Logger, MemorySink};
//!
//! let sink = MemorySink::new();
//! let mut log = Logger::new();
//! log.set_level(Level::Debug).set_sink(sink.clone());
//! log.info().name("user").msg("alice").out();
//!
//! assert_eq!(sink.messages(), vec!["user: alice".to_string()]);
//! ```

mod from_config;

use crate::fmt::{MessageBuffer, Stringify};
use crate::level::{Level, passes};
use crate::output::{PrintSink, PrintlnSink, Sink};
use serde::Serialize;
use std::fmt;

pub struct Logger {
    level: Level,
    msg_level: Level,
    sink: Box<dyn Sink>,
    buffer: MessageBuffer,
    stringify: Stringify,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Prints with a trailing newline. The threshold starts at `Emerg`, so only
    /// `emerg()` and [`Self::log`] messages get through until it is raised.
    #[must_use]
    pub fn new() -> Self {
        Self {
            level: Level::Emerg,
            msg_level: Level::Emerg,
            sink: Box::new(PrintlnSink),
            buffer: MessageBuffer::new(),
            stringify: Stringify::new(),
        }
    }

    // --- configuration

    /// Raising the threshold lets more verbose severities through; `Disabled` silences all but `log()`.
    pub fn set_level(&mut self, level: Level) -> &mut Self {
        self.level = level;
        self
    }

    /// Threshold currently applied; tests and callers inspect it after `from_config`.
    #[must_use]
    pub const fn level(&self) -> Level {
        self.level
    }

    /// Severity of the message currently being built.
    #[must_use]
    pub const fn message_level(&self) -> Level {
        self.msg_level
    }

    /// Replaces where finished messages go; any `Fn(&str)` closure works.
    pub fn set_sink(&mut self, sink: impl Sink + 'static) -> &mut Self {
        self.sink = Box::new(sink);
        self
    }

    /// Stdout without a trailing newline, for callers that embed their own line breaks.
    pub fn set_out_print(&mut self) -> &mut Self {
        self.set_sink(PrintSink)
    }

    /// Stdout with a trailing newline, the default sink.
    pub fn set_out_println(&mut self) -> &mut Self {
        self.set_sink(PrintlnSink)
    }

    /// Whether compound values in fragments are rendered as multi-line JSON.
    pub const fn set_indent(&mut self, enabled: bool) -> &mut Self {
        self.stringify.set_indent(enabled);
        self
    }

    // --- starting a message

    /// Starts a message at `level`, discarding anything buffered.
    pub fn at(&mut self, level: Level) -> &mut Self {
        self.buffer.clear();
        self.msg_level = level;
        self
    }

    /// Starts a message that is delivered at every threshold.
    pub fn log(&mut self) -> &mut Self {
        self.at(Level::Log)
    }

    /// System is unusable; passes at every threshold except `Disabled`.
    pub fn emerg(&mut self) -> &mut Self {
        self.at(Level::Emerg)
    }

    /// Someone has to act right now.
    pub fn alert(&mut self) -> &mut Self {
        self.at(Level::Alert)
    }

    /// Critical conditions, e.g. a failing dependency.
    pub fn crit(&mut self) -> &mut Self {
        self.at(Level::Crit)
    }

    /// Failed operations the caller could not recover from.
    pub fn err(&mut self) -> &mut Self {
        self.at(Level::Err)
    }

    /// Anomalies worth a look that did not stop the operation.
    pub fn warning(&mut self) -> &mut Self {
        self.at(Level::Warning)
    }

    /// Normal but significant events.
    pub fn notice(&mut self) -> &mut Self {
        self.at(Level::Notice)
    }

    /// Operational milestones such as startup or config loaded.
    pub fn info(&mut self) -> &mut Self {
        self.at(Level::Info)
    }

    /// Diagnostics too noisy for normal operation.
    pub fn debug(&mut self) -> &mut Self {
        self.at(Level::Debug)
    }

    /// High-volume instrumentation, the most verbose severity.
    pub fn trace(&mut self) -> &mut Self {
        self.at(Level::Trace)
    }

    // --- building the message

    /// Appends `data` as a new fragment.
    ///
    /// Filtered messages skip the conversion entirely, so a suppressed
    /// `debug()` chain costs no formatting.
    pub fn msg<T: Serialize>(&mut self, data: T) -> &mut Self {
        if self.is_enabled() {
            self.buffer.push(self.stringify.str(data));
        }
        self
    }

    /// Glues `data` onto the previous fragment without a space, e.g. a trailing `:`.
    pub fn sp<T: Serialize>(&mut self, data: T) -> &mut Self {
        if self.is_enabled() {
            self.buffer.attach(&self.stringify.str(data));
        }
        self
    }

    /// Appends a line break; the next fragment starts without a space.
    pub fn ln(&mut self) -> &mut Self {
        self.msg("\n")
    }

    /// Appends `data`, then a line break.
    pub fn msg_ln<T: Serialize>(&mut self, data: T) -> &mut Self {
        self.msg(data).ln()
    }

    /// Appends `data` followed by `:`.
    pub fn name<T: Serialize>(&mut self, data: T) -> &mut Self {
        self.msg(data).sp(":")
    }

    /// Appends `data:` and a line break, for a label above a multi-line value.
    pub fn name_ln<T: Serialize>(&mut self, data: T) -> &mut Self {
        self.name(data).ln()
    }

    /// Drops buffered fragments but keeps the message severity.
    pub fn clear(&mut self) -> &mut Self {
        self.buffer.clear();
        self
    }

    // --- output

    /// Checked against the threshold as it is now, not when the message was started.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        passes(self.level, self.msg_level)
    }

    /// Assembled text, or empty when the current message is filtered.
    #[must_use]
    pub fn render(&self) -> String {
        if self.is_enabled() {
            self.buffer.render()
        } else {
            String::new()
        }
    }

    /// Delivers the current message if it passes the threshold.
    pub fn out(&mut self) -> &mut Self {
        if self.is_enabled() {
            let _ = self.sink.deliver(&self.buffer.render());
        }
        self
    }
}

impl fmt::Display for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("level", &self.level)
            .field("msg_level", &self.msg_level)
            .field("buffer", &self.buffer)
            .field("stringify", &self.stringify)
            .finish_non_exhaustive()
    }
}
