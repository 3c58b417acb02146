//! Capability detection for scheduler debug introspection.

use crate::scheduler::DebugDump;

/// Debug-introspection capability of a cooperative scheduler.
///
/// Capturing stacks for every scheduled item is expensive, so schedulers
/// keep it behind an explicit flag — and older or minimal scheduler
/// builds may not expose the dump operation at all. Both cases are
/// modelled here: [`debug_enabled`](Self::debug_enabled) reports the
/// flag, and the default [`debug_info`](Self::debug_info) body returns
/// `None` for schedulers without the operation.
///
/// Implementations must treat [`debug_info`](Self::debug_info) as a pure
/// read: it returns a snapshot and must not mutate scheduler state.
pub trait DebugIntrospection {
    /// Whether the scheduler's debug flag is currently set.
    fn debug_enabled(&self) -> bool;

    /// Returns a snapshot of the scheduler's internal state, or `None`
    /// if this scheduler does not implement introspection.
    fn debug_info(&self) -> Option<DebugDump> {
        None
    }
}

/// Retrieves debug information from the scheduler's current state.
///
/// Returns the dump only when the scheduler's debug flag is set *and*
/// the scheduler actually implements the dump operation; otherwise
/// returns `None`. Safe to call against any scheduler.
///
/// # Example
///
/// ```rust
/// use testkit_settle::scheduler::{get_debug_info, MockScheduler};
///
/// // Debug flag off: no dump, regardless of capability.
/// let scheduler = MockScheduler::new();
/// assert!(get_debug_info(&scheduler).is_none());
/// ```
pub fn get_debug_info<S>(scheduler: &S) -> Option<DebugDump>
where
    S: DebugIntrospection + ?Sized,
{
    if scheduler.debug_enabled() {
        scheduler.debug_info()
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FlagOnly {
        enabled: bool,
    }

    // Relies on the default debug_info body.
    impl DebugIntrospection for FlagOnly {
        fn debug_enabled(&self) -> bool {
            self.enabled
        }
    }

    struct Introspectable {
        enabled: bool,
    }

    impl DebugIntrospection for Introspectable {
        fn debug_enabled(&self) -> bool {
            self.enabled
        }

        fn debug_info(&self) -> Option<DebugDump> {
            Some(DebugDump::new())
        }
    }

    #[test]
    fn test_flag_enabled_but_capability_absent() {
        let scheduler = FlagOnly { enabled: true };
        assert!(get_debug_info(&scheduler).is_none());
    }

    #[test]
    fn test_capability_present_but_flag_disabled() {
        let scheduler = Introspectable { enabled: false };
        assert!(get_debug_info(&scheduler).is_none());
    }

    #[test]
    fn test_flag_and_capability_both_present() {
        let scheduler = Introspectable { enabled: true };
        assert_eq!(get_debug_info(&scheduler), Some(DebugDump::new()));
    }

    #[test]
    fn test_works_through_trait_object() {
        let scheduler = Introspectable { enabled: true };
        let dynamic: &dyn DebugIntrospection = &scheduler;
        assert!(get_debug_info(dynamic).is_some());
    }
}
