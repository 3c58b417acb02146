//! Debug dump types for scheduler introspection.

/// A pending implicit flush of the scheduler.
///
/// An autorun is a flush the scheduler triggered on its own because work
/// was scheduled outside an explicit run. The stack points at the call
/// site that caused it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AutorunInfo {
    /// Textual capture of the call site that triggered the autorun.
    pub stack: String,
}

impl AutorunInfo {
    /// Creates autorun info from a captured stack.
    pub fn new(stack: impl Into<String>) -> Self {
        Self {
            stack: stack.into(),
        }
    }
}

/// A pending timer recorded by the scheduler.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TimerInfo {
    /// Textual capture of where the timer was scheduled, if the
    /// scheduler recorded one.
    pub stack: Option<String>,
}

impl TimerInfo {
    /// Creates a timer record with a captured stack.
    pub fn with_stack(stack: impl Into<String>) -> Self {
        Self {
            stack: Some(stack.into()),
        }
    }

    /// Creates a timer record without a captured stack.
    #[must_use]
    pub fn without_stack() -> Self {
        Self { stack: None }
    }
}

/// A single item of scheduled work inside a queue.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueueItem {
    /// Textual capture of the scheduling site, if the scheduler
    /// recorded one.
    pub stack: Option<String>,
}

impl QueueItem {
    /// Creates a queue item with a captured stack.
    pub fn with_stack(stack: impl Into<String>) -> Self {
        Self {
            stack: Some(stack.into()),
        }
    }

    /// Creates a queue item without a captured stack.
    #[must_use]
    pub fn without_stack() -> Self {
        Self { stack: None }
    }
}

/// One level of the scheduler's nested in-flight work, keyed by queue name.
///
/// Queue order is preserved exactly as the scheduler reported it; this is
/// an ordered sequence of `(name, items)` pairs, not a hash map, so
/// diagnostics come out in scheduling order.
///
/// # Example
///
/// ```rust
/// use testkit_settle::scheduler::{QueueItem, QueueSnapshot};
///
/// let snapshot = QueueSnapshot::new()
///     .with_queue("actions", vec![QueueItem::with_stack("at a.rs:1")])
///     .with_queue("render", vec![QueueItem::without_stack()]);
///
/// assert_eq!(snapshot.item_count(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueueSnapshot {
    queues: Vec<(String, Vec<QueueItem>)>,
}

impl QueueSnapshot {
    /// Creates an empty snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a named queue and its items.
    #[must_use]
    pub fn with_queue(mut self, name: impl Into<String>, items: Vec<QueueItem>) -> Self {
        self.queues.push((name.into(), items));
        self
    }

    /// Iterates queues in the order the scheduler reported them.
    pub fn queues(&self) -> impl Iterator<Item = (&str, &[QueueItem])> {
        self.queues
            .iter()
            .map(|(name, items)| (name.as_str(), items.as_slice()))
    }

    /// Total number of items across all queues in this snapshot.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.queues.iter().map(|(_, items)| items.len()).sum()
    }

    /// Returns true if no queue in this snapshot holds any items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.item_count() == 0
    }
}

/// A structural snapshot of a scheduler's internal state.
///
/// Every field is optional in the sense that a partially populated dump
/// is valid: no autorun, zero timers, and null entries in
/// [`instance_stack`](Self::instance_stack) are all normal. Aggregation
/// downstream tolerates each independently.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DebugDump {
    /// The pending autorun, if an implicit flush is outstanding.
    pub autorun: Option<AutorunInfo>,
    /// Pending timers, in scheduling order.
    pub timers: Vec<TimerInfo>,
    /// Nested levels of in-flight scheduled work. Entries may be `None`
    /// (the scheduler reports vacated levels as null); consumers filter
    /// those out before aggregating.
    pub instance_stack: Vec<Option<QueueSnapshot>>,
}

impl DebugDump {
    /// Creates an empty dump.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the pending autorun.
    #[must_use]
    pub fn with_autorun(mut self, autorun: AutorunInfo) -> Self {
        self.autorun = Some(autorun);
        self
    }

    /// Appends a pending timer.
    #[must_use]
    pub fn with_timer(mut self, timer: TimerInfo) -> Self {
        self.timers.push(timer);
        self
    }

    /// Appends a queue snapshot level.
    #[must_use]
    pub fn with_snapshot(mut self, snapshot: QueueSnapshot) -> Self {
        self.instance_stack.push(Some(snapshot));
        self
    }

    /// Appends a vacated (null) queue snapshot level.
    #[must_use]
    pub fn with_null_snapshot(mut self) -> Self {
        self.instance_stack.push(None);
        self
    }
}
