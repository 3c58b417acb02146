//! # testkit-settle
//!
//! > Settle-state diagnostics for async test teardown
//!
//! **testkit-settle** explains *why* a test ended with asynchronous work
//! still in flight. Given a snapshot of the settle state (pending timers,
//! an active run-loop, pending test waiters, pending requests) and an
//! optional debug dump from the scheduler, it aggregates everything into
//! a single summary and prints actionable diagnostics — the stack traces
//! of whatever is still pending.
//!
//! ## Quick Start
//!
//! ```rust
//! use testkit_settle::prelude::*;
//!
//! let state = SettledState::new(false, false, false, true);
//! let report = SettleReport::new(state, None);
//!
//! let mut sink = RecordingSink::new();
//! report.write_to(&mut sink);
//!
//! assert_eq!(sink.lines(), vec!["Pending AJAX requests"]);
//! ```
//!
//! ## Features
//!
//! - 🔍 **Settle summaries** - One value object describing everything pending
//! - 📋 **Stack traces** - Scheduling sites of pending timers and queue items
//! - 🔌 **Capability detection** - Degrades gracefully when the scheduler
//!   exposes no debug introspection
//! - 🧪 **Recording sink** - Assert on diagnostic output in your own tests

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod console;
pub mod error;
pub mod report;
pub mod scheduler;

/// Prelude for convenient imports
///
/// ```rust
/// use testkit_settle::prelude::*;
/// ```
pub mod prelude {
    pub use crate::console::{ConsoleEntry, ConsoleSink, RecordingSink, StdoutSink};
    pub use crate::error::{Error, Result};
    pub use crate::report::{
        ensure_settled, ScheduledWorkSummary, SettleReport, SettleSummary, SettledState,
    };
    pub use crate::scheduler::{
        get_debug_info, AutorunInfo, DebugDump, DebugIntrospection, MockScheduler, QueueItem,
        QueueSnapshot, TimerInfo,
    };
}

// Re-exports
pub use error::{Error, Result};

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn test_quiet_report_prints_nothing() {
        let report = SettleReport::new(SettledState::settled(), None);
        let mut sink = RecordingSink::new();
        report.write_to(&mut sink);
        assert!(sink.is_empty());
    }
}
