//! Aggregation of settle flags and scheduler dumps into one summary.

use crate::console::ConsoleSink;
use crate::report::SettledState;
use crate::scheduler::DebugDump;

const PENDING_AJAX_REQUESTS: &str = "Pending AJAX requests";
const PENDING_TEST_WAITERS: &str = "Pending test waiters";
const SCHEDULED_ASYNC: &str = "Scheduled async";
const SCHEDULED_AUTORUN: &str = "Scheduled autorun";

/// The dump-derived half of a [`SettleSummary`].
///
/// Present only when a scheduler debug dump was available; a flags-only
/// summary has no scheduled-work detail at all, which keeps "count is
/// zero" distinct from "count is unknown".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScheduledWorkSummary {
    /// Stack of the pending autorun, if one is outstanding.
    pub autorun_stack_trace: Option<String>,
    /// Number of pending timers the scheduler reported.
    pub pending_timers_count: usize,
    /// Timer stacks in scheduling order. Entries without a captured
    /// stack are preserved positionally as `None`.
    pub pending_timers_stack_traces: Vec<Option<String>>,
    /// Total queued items across all non-null queue snapshots.
    pub pending_scheduled_queue_item_count: usize,
    /// Flattened stacks of queued items, in order. Items without a
    /// stack are skipped here but still counted above.
    pub pending_scheduled_queue_item_stack_traces: Vec<String>,
}

/// A value object combining the settle flags with scheduler debug detail.
///
/// Produced once per [`SettleReport`](crate::report::SettleReport) and
/// cached; see [`SettleReport::summary`](crate::report::SettleReport::summary).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SettleSummary {
    /// Timers are still scheduled. When a dump was available this is
    /// narrowed to `flag AND pending_timers_count > 0`.
    pub has_pending_timers: bool,
    /// A run-loop is currently active.
    pub has_run_loop: bool,
    /// Registered test waiters have not released.
    pub has_pending_waiters: bool,
    /// Network requests are still in flight.
    pub has_pending_requests: bool,
    /// Dump-derived detail, or `None` when no dump was available.
    pub scheduled: Option<ScheduledWorkSummary>,
}

impl SettleSummary {
    /// Aggregates the settle flags with an optional scheduler dump.
    ///
    /// Without a dump the summary is the four flags verbatim. With one,
    /// the dump can narrow `has_pending_timers` but never widen it:
    /// a flag the settle detector already cleared stays cleared even if
    /// the scheduler still reports timers, and a set flag is dropped
    /// when the scheduler shows zero timers backing it.
    ///
    /// Partial dumps are fine: a missing autorun, empty timers, and
    /// null `instance_stack` entries each degrade independently.
    #[must_use]
    pub fn aggregate(state: &SettledState, dump: Option<&DebugDump>) -> Self {
        let mut summary = Self {
            has_pending_timers: state.has_pending_timers,
            has_run_loop: state.has_run_loop,
            has_pending_waiters: state.has_pending_waiters,
            has_pending_requests: state.has_pending_requests,
            scheduled: None,
        };

        let Some(dump) = dump else {
            return summary;
        };

        let pending_timers_count = dump.timers.len();
        summary.has_pending_timers = state.has_pending_timers && pending_timers_count > 0;

        let mut pending_scheduled_queue_item_count = 0;
        let mut pending_scheduled_queue_item_stack_traces = Vec::new();
        // Null snapshot entries are vacated levels; skip them up front.
        for snapshot in dump.instance_stack.iter().flatten() {
            for (_queue_name, items) in snapshot.queues() {
                pending_scheduled_queue_item_count += items.len();
                pending_scheduled_queue_item_stack_traces
                    .extend(items.iter().filter_map(|item| item.stack.clone()));
            }
        }

        summary.scheduled = Some(ScheduledWorkSummary {
            autorun_stack_trace: dump.autorun.as_ref().map(|autorun| autorun.stack.clone()),
            pending_timers_count,
            pending_timers_stack_traces: dump
                .timers
                .iter()
                .map(|timer| timer.stack.clone())
                .collect(),
            pending_scheduled_queue_item_count,
            pending_scheduled_queue_item_stack_traces,
        });

        summary
    }

    /// Writes this summary to a console-like sink as human-readable
    /// diagnostics.
    ///
    /// The blocks are evaluated independently; several may print for a
    /// single summary. The autorun block fires only when a run-loop is
    /// active and dump detail exists showing no timer or queue item to
    /// blame, leaving an implicit autorun as the suspected culprit.
    pub fn write_to(&self, sink: &mut dyn ConsoleSink) {
        if self.has_pending_requests {
            sink.log(PENDING_AJAX_REQUESTS);
        }

        if self.has_pending_waiters {
            sink.log(PENDING_TEST_WAITERS);
        }

        let queue_item_count = self
            .scheduled
            .as_ref()
            .map_or(0, |work| work.pending_scheduled_queue_item_count);

        if self.has_pending_timers || queue_item_count > 0 {
            sink.group(SCHEDULED_ASYNC);

            if let Some(work) = &self.scheduled {
                for stack in work.pending_timers_stack_traces.iter().flatten() {
                    sink.log(stack);
                }
                for stack in &work.pending_scheduled_queue_item_stack_traces {
                    sink.log(stack);
                }
            }

            sink.group_end();
        }

        if let Some(work) = &self.scheduled {
            if self.has_run_loop
                && work.pending_timers_count == 0
                && work.pending_scheduled_queue_item_count == 0
            {
                sink.log(SCHEDULED_AUTORUN);

                if let Some(stack) = &work.autorun_stack_trace {
                    sink.log(stack);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::{ConsoleEntry, RecordingSink};
    use crate::scheduler::{AutorunInfo, QueueItem, QueueSnapshot, TimerInfo};

    fn unsettled_timers() -> SettledState {
        SettledState::new(true, false, false, false)
    }

    #[test]
    fn test_no_dump_keeps_flags_verbatim() {
        let state = SettledState::new(true, true, true, true);
        let summary = SettleSummary::aggregate(&state, None);

        assert!(summary.has_pending_timers);
        assert!(summary.has_run_loop);
        assert!(summary.has_pending_waiters);
        assert!(summary.has_pending_requests);
        assert!(summary.scheduled.is_none());
    }

    #[test]
    fn test_zero_timers_narrows_flag() {
        let summary = SettleSummary::aggregate(&unsettled_timers(), Some(&DebugDump::new()));
        assert!(!summary.has_pending_timers);
        assert_eq!(
            summary.scheduled.as_ref().unwrap().pending_timers_count,
            0
        );
    }

    #[test]
    fn test_dump_never_widens_timer_flag() {
        let state = SettledState::settled();
        let dump = DebugDump::new().with_timer(TimerInfo::with_stack("at x.rs:1"));

        let summary = SettleSummary::aggregate(&state, Some(&dump));
        assert!(!summary.has_pending_timers);
        assert_eq!(summary.scheduled.as_ref().unwrap().pending_timers_count, 1);
    }

    #[test]
    fn test_timer_stacks_preserved_positionally() {
        let dump = DebugDump::new()
            .with_timer(TimerInfo::without_stack())
            .with_timer(TimerInfo::with_stack("at y.rs:2"));

        let summary = SettleSummary::aggregate(&unsettled_timers(), Some(&dump));
        let work = summary.scheduled.unwrap();

        assert!(summary.has_pending_timers);
        assert_eq!(work.pending_timers_count, 2);
        assert_eq!(
            work.pending_timers_stack_traces,
            vec![None, Some("at y.rs:2".to_string())]
        );
    }

    #[test]
    fn test_queue_items_counted_across_levels_and_queues() {
        let dump = DebugDump::new()
            .with_null_snapshot()
            .with_snapshot(
                QueueSnapshot::new().with_queue(
                    "actions",
                    vec![
                        QueueItem::with_stack("at a.rs:1"),
                        QueueItem::with_stack("at b.rs:2"),
                    ],
                ),
            )
            .with_snapshot(
                QueueSnapshot::new().with_queue("render", vec![QueueItem::with_stack("at c.rs:3")]),
            );

        let summary = SettleSummary::aggregate(&SettledState::settled(), Some(&dump));
        let work = summary.scheduled.unwrap();

        assert_eq!(work.pending_scheduled_queue_item_count, 3);
        assert_eq!(
            work.pending_scheduled_queue_item_stack_traces,
            vec!["at a.rs:1", "at b.rs:2", "at c.rs:3"]
        );
    }

    #[test]
    fn test_stackless_items_counted_but_not_listed() {
        let dump = DebugDump::new().with_snapshot(QueueSnapshot::new().with_queue(
            "actions",
            vec![QueueItem::without_stack(), QueueItem::with_stack("X")],
        ));

        let summary = SettleSummary::aggregate(&SettledState::settled(), Some(&dump));
        let work = summary.scheduled.unwrap();

        assert_eq!(work.pending_scheduled_queue_item_count, 2);
        assert_eq!(work.pending_scheduled_queue_item_stack_traces, vec!["X"]);
    }

    #[test]
    fn test_autorun_stack_extracted() {
        let dump = DebugDump::new().with_autorun(AutorunInfo::new("at foo.rs:10"));
        let summary = SettleSummary::aggregate(&SettledState::settled(), Some(&dump));

        assert_eq!(
            summary.scheduled.unwrap().autorun_stack_trace,
            Some("at foo.rs:10".to_string())
        );
    }

    #[test]
    fn test_write_pending_requests_only() {
        let state = SettledState::new(false, false, false, true);
        let summary = SettleSummary::aggregate(&state, None);

        let mut sink = RecordingSink::new();
        summary.write_to(&mut sink);

        assert_eq!(
            sink.entries(),
            vec![ConsoleEntry::Log("Pending AJAX requests".to_string())]
        );
    }

    #[test]
    fn test_write_pending_waiters() {
        let state = SettledState::new(false, false, true, false);
        let summary = SettleSummary::aggregate(&state, None);

        let mut sink = RecordingSink::new();
        summary.write_to(&mut sink);

        assert_eq!(sink.lines(), vec!["Pending test waiters"]);
    }

    #[test]
    fn test_write_scheduled_async_group() {
        let dump = DebugDump::new()
            .with_timer(TimerInfo::with_stack("at timer.rs:5"))
            .with_snapshot(
                QueueSnapshot::new().with_queue("render", vec![QueueItem::with_stack("at q.rs:9")]),
            );
        let summary = SettleSummary::aggregate(&unsettled_timers(), Some(&dump));

        let mut sink = RecordingSink::new();
        summary.write_to(&mut sink);

        assert_eq!(
            sink.entries(),
            vec![
                ConsoleEntry::Group("Scheduled async".to_string()),
                ConsoleEntry::Log("at timer.rs:5".to_string()),
                ConsoleEntry::Log("at q.rs:9".to_string()),
                ConsoleEntry::GroupEnd,
            ]
        );
    }

    #[test]
    fn test_write_autorun_with_stack() {
        let state = SettledState::new(false, true, false, false);
        let dump = DebugDump::new().with_autorun(AutorunInfo::new("at foo.js:10"));
        let summary = SettleSummary::aggregate(&state, Some(&dump));

        let mut sink = RecordingSink::new();
        summary.write_to(&mut sink);

        assert_eq!(sink.lines(), vec!["Scheduled autorun", "at foo.js:10"]);
    }

    #[test]
    fn test_autorun_suppressed_by_concrete_work() {
        let state = SettledState::new(true, true, false, false);
        let dump = DebugDump::new()
            .with_autorun(AutorunInfo::new("at foo.rs:10"))
            .with_timer(TimerInfo::with_stack("at timer.rs:5"));
        let summary = SettleSummary::aggregate(&state, Some(&dump));

        let mut sink = RecordingSink::new();
        summary.write_to(&mut sink);

        // The timer explains the run-loop; no autorun block.
        assert_eq!(sink.lines(), vec!["at timer.rs:5"]);
    }

    #[test]
    fn test_autorun_needs_dump_detail() {
        let state = SettledState::new(false, true, false, false);
        let summary = SettleSummary::aggregate(&state, None);

        let mut sink = RecordingSink::new();
        summary.write_to(&mut sink);

        assert!(sink.is_empty());
    }

    #[test]
    fn test_write_nothing_when_settled() {
        let summary = SettleSummary::aggregate(&SettledState::settled(), None);

        let mut sink = RecordingSink::new();
        summary.write_to(&mut sink);

        assert!(sink.is_empty());
    }

    #[test]
    fn test_multiple_blocks_in_one_report() {
        let state = SettledState::new(true, false, true, true);
        let dump = DebugDump::new().with_timer(TimerInfo::with_stack("at t.rs:1"));
        let summary = SettleSummary::aggregate(&state, Some(&dump));

        let mut sink = RecordingSink::new();
        summary.write_to(&mut sink);

        assert_eq!(
            sink.lines(),
            vec!["Pending AJAX requests", "Pending test waiters", "at t.rs:1"]
        );
    }
}
