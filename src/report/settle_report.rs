//! The per-test settle report.

use std::cell::OnceCell;
use std::fmt;

use crate::console::ConsoleSink;
use crate::error::TEST_NOT_ISOLATED;
use crate::report::{SettleSummary, SettledState};
use crate::scheduler::{get_debug_info, DebugDump, DebugIntrospection};

/// Encapsulates settle diagnostics for an individual test.
///
/// A report is created fresh at test teardown from the settle detector's
/// [`SettledState`] plus, when available, the scheduler's
/// [`DebugDump`] — taken as a snapshot at construction so later
/// scheduler activity cannot leak into the diagnostics. It is read
/// immediately and then discarded.
///
/// # Example
///
/// ```rust
/// use testkit_settle::report::{SettleReport, SettledState};
/// use testkit_settle::scheduler::MockScheduler;
///
/// let state = SettledState::new(false, false, true, false);
/// let report = SettleReport::from_scheduler(state, &MockScheduler::new());
///
/// assert!(report.summary().has_pending_waiters);
/// ```
pub struct SettleReport {
    state: SettledState,
    dump: Option<DebugDump>,
    summary: OnceCell<SettleSummary>,
}

impl SettleReport {
    /// Creates a report from a settle-state snapshot and an optional
    /// scheduler dump.
    #[must_use]
    pub fn new(state: SettledState, dump: Option<DebugDump>) -> Self {
        Self {
            state,
            dump,
            summary: OnceCell::new(),
        }
    }

    /// Creates a report, obtaining the dump from the scheduler via
    /// [`get_debug_info`].
    ///
    /// The scheduler is only read here; passing a canned dump to
    /// [`new`](Self::new) instead is how tests inject state.
    #[must_use]
    pub fn from_scheduler<S>(state: SettledState, scheduler: &S) -> Self
    where
        S: DebugIntrospection + ?Sized,
    {
        Self::new(state, get_debug_info(scheduler))
    }

    /// Returns the aggregated summary.
    ///
    /// Computed on first access and memoized; every subsequent call
    /// returns the identical cached value. The formatter reads the
    /// summary repeatedly, and recomputing could double-count or
    /// observe scheduler state that changed between reads.
    pub fn summary(&self) -> &SettleSummary {
        self.summary
            .get_or_init(|| SettleSummary::aggregate(&self.state, self.dump.as_ref()))
    }

    /// The fixed introductory message for an unsettled test, for the
    /// caller to emit before the diagnostics themselves.
    #[must_use]
    pub fn message(&self) -> &'static str {
        TEST_NOT_ISOLATED
    }

    /// Writes the diagnostics for this report to the given sink.
    pub fn write_to(&self, sink: &mut dyn ConsoleSink) {
        self.summary().write_to(sink);
    }
}

impl fmt::Debug for SettleReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SettleReport")
            .field("state", &self.state)
            .field("has_dump", &self.dump.is_some())
            .field("summarized", &self.summary.get().is_some())
            .finish()
    }
}
