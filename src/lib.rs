//! `ezlog` - Leveled logging facade.
//!
//! Messages carry a severity [`Level`]. A configured threshold decides which of
//! them reach a [`Sink`]. Two independent front ends share that predicate:
//!
//! - [`Logger`]: a fluent builder that collects fragments into one message and
//!   delivers it on [`Logger::out`].
//! - [`Dispatcher`]: a table holding one sink per severity plus one
//!   level-agnostic slot, fed with complete strings.
//!
//! # Example
//!
//! ```
//! use ezlog::{Level, Logger, MemorySink};
//!
//! let sink = MemorySink::new();
//! let mut log = Logger::new();
//! log.set_level(Level::Info).set_sink(sink.clone());
//!
//! log.warning().msg("low disk").out();
//! log.debug().msg("cache hit").out();
//!
//! assert_eq!(sink.messages(), vec!["low disk".to_string()]);
//! ```

pub mod config;
pub mod dispatch;
pub mod fmt;
pub mod level;
pub mod logger;
pub mod output;

mod error;

pub use config::Config;
pub use dispatch::{Dispatcher, SinkTable};
pub use error::Error;
pub use fmt::{MessageBuffer, Stringify};
pub use level::{Level, ParseLevelError, passes};
pub use logger::Logger;
pub use output::{MemorySink, PrintSink, PrintlnSink, Sink, WriterSink};
