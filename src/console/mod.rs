//! Console-like output sinks
//!
//! Diagnostics are written through the [`ConsoleSink`] trait so tests can
//! capture them. [`StdoutSink`] is the ambient default; [`RecordingSink`]
//! records every entry for assertions.
//!
//! # Example
//!
//! ```rust
//! use testkit_settle::console::{ConsoleSink, RecordingSink};
//!
//! let mut sink = RecordingSink::new();
//! sink.group("Scheduled async");
//! sink.log("at app.rs:12");
//! sink.group_end();
//!
//! assert_eq!(sink.lines(), vec!["at app.rs:12"]);
//! ```

mod recording;
mod sink;

pub use recording::{ConsoleEntry, RecordingSink};
pub use sink::{ConsoleSink, StdoutSink};
