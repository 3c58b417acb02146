//! The teardown-time settle check.

use crate::console::ConsoleSink;
use crate::error::{Error, Result};
use crate::report::{SettleReport, SettledState};
use crate::scheduler::DebugDump;

/// Fails a teardown check when asynchronous work is still pending.
///
/// When the state is settled this is a no-op returning `Ok(())`. When it
/// is not, the isolation message and full diagnostics are written to the
/// sink and [`Error::NotIsolated`] is returned for the test harness to
/// surface.
///
/// # Errors
///
/// Returns [`Error::NotIsolated`] if any settle flag is set.
///
/// # Example
///
/// ```rust
/// use testkit_settle::console::RecordingSink;
/// use testkit_settle::report::{ensure_settled, SettledState};
///
/// let mut sink = RecordingSink::new();
///
/// let quiet = SettledState::settled();
/// assert!(ensure_settled(quiet, None, &mut sink).is_ok());
/// assert!(sink.is_empty());
///
/// let leaking = SettledState::new(false, false, false, true);
/// assert!(ensure_settled(leaking, None, &mut sink).is_err());
/// assert!(sink.lines().contains(&"Pending AJAX requests".to_string()));
/// ```
pub fn ensure_settled(
    state: SettledState,
    dump: Option<DebugDump>,
    sink: &mut dyn ConsoleSink,
) -> Result<()> {
    if state.is_settled() {
        return Ok(());
    }

    let report = SettleReport::new(state, dump);
    sink.log(report.message());
    report.write_to(sink);

    Err(Error::NotIsolated)
}
