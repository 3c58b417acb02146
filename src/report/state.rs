//! The settle-state snapshot taken at test teardown.

/// The boolean snapshot of "is the system quiescent" at test teardown.
///
/// Produced by an external settle detector once per test; consumed once
/// by a [`SettleReport`](crate::report::SettleReport).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SettledState {
    /// Timers are still scheduled.
    pub has_pending_timers: bool,
    /// A run-loop is currently active.
    pub has_run_loop: bool,
    /// Registered test waiters have not released.
    pub has_pending_waiters: bool,
    /// Network requests are still in flight.
    pub has_pending_requests: bool,
}

impl SettledState {
    /// Creates a snapshot from the four settle flags.
    #[must_use]
    pub fn new(
        has_pending_timers: bool,
        has_run_loop: bool,
        has_pending_waiters: bool,
        has_pending_requests: bool,
    ) -> Self {
        Self {
            has_pending_timers,
            has_run_loop,
            has_pending_waiters,
            has_pending_requests,
        }
    }

    /// A fully quiescent snapshot.
    #[must_use]
    pub fn settled() -> Self {
        Self::default()
    }

    /// Returns true if nothing is pending.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        !self.has_pending_timers
            && !self.has_run_loop
            && !self.has_pending_waiters
            && !self.has_pending_requests
    }
}
