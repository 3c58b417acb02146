//! Settle-state aggregation and reporting
//!
//! This is the core of the crate. A [`SettledState`] snapshot plus an
//! optional scheduler [`DebugDump`](crate::scheduler::DebugDump) go in;
//! a memoized [`SettleSummary`] and a console diagnostic come out.
//!
//! # Example
//!
//! ```rust
//! use testkit_settle::console::RecordingSink;
//! use testkit_settle::report::{SettleReport, SettledState};
//! use testkit_settle::scheduler::{DebugDump, TimerInfo};
//!
//! let state = SettledState::new(true, true, false, false);
//! let dump = DebugDump::new().with_timer(TimerInfo::with_stack("at app.rs:40"));
//!
//! let report = SettleReport::new(state, Some(dump));
//! assert_eq!(report.summary().scheduled.as_ref().unwrap().pending_timers_count, 1);
//!
//! let mut sink = RecordingSink::new();
//! report.write_to(&mut sink);
//! assert_eq!(sink.lines(), vec!["at app.rs:40"]);
//! ```

mod check;
mod settle_report;
mod state;
mod summary;

pub use check::ensure_settled;
pub use settle_report::SettleReport;
pub use state::SettledState;
pub use summary::{ScheduledWorkSummary, SettleSummary};
