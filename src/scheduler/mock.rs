//! A configurable scheduler stand-in for tests.

use crate::scheduler::{DebugDump, DebugIntrospection};

/// A mock scheduler for exercising settle diagnostics without a real
/// run-loop.
///
/// The mock holds a canned [`DebugDump`] and a debug flag; it implements
/// [`DebugIntrospection`] so it can be injected anywhere a real scheduler
/// integration would go.
///
/// # Example
///
/// ```rust
/// use testkit_settle::scheduler::{get_debug_info, DebugDump, MockScheduler};
///
/// let scheduler = MockScheduler::new()
///     .with_debug_enabled(true)
///     .with_dump(DebugDump::new());
///
/// assert!(get_debug_info(&scheduler).is_some());
/// ```
#[derive(Clone, Debug, Default)]
pub struct MockScheduler {
    debug_enabled: bool,
    dump: Option<DebugDump>,
}

impl MockScheduler {
    /// Creates a mock with the debug flag off and no dump capability.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the debug flag.
    #[must_use]
    pub fn with_debug_enabled(mut self, enabled: bool) -> Self {
        self.debug_enabled = enabled;
        self
    }

    /// Gives the mock a dump to return from introspection.
    ///
    /// Without this, the mock behaves like a scheduler build that does
    /// not implement introspection at all.
    #[must_use]
    pub fn with_dump(mut self, dump: DebugDump) -> Self {
        self.dump = Some(dump);
        self
    }

    /// Replaces the dump after construction, simulating scheduler state
    /// changing between reads.
    pub fn set_dump(&mut self, dump: Option<DebugDump>) {
        self.dump = dump;
    }
}

impl DebugIntrospection for MockScheduler {
    fn debug_enabled(&self) -> bool {
        self.debug_enabled
    }

    fn debug_info(&self) -> Option<DebugDump> {
        self.dump.clone()
    }
}
