//! Scheduler introspection
//!
//! The `scheduler` module defines the shape of a cooperative scheduler's
//! debug dump ([`DebugDump`]) and the capability interface used to obtain
//! one ([`DebugIntrospection`]). The crate never talks to a scheduler
//! directly; a scheduler integration implements the trait and the rest of
//! the crate consumes the dump as a read-only snapshot.
//!
//! # Example
//!
//! ```rust
//! use testkit_settle::scheduler::{get_debug_info, DebugDump, MockScheduler, TimerInfo};
//!
//! let scheduler = MockScheduler::new()
//!     .with_debug_enabled(true)
//!     .with_dump(DebugDump::new().with_timer(TimerInfo::with_stack("at app.rs:12")));
//!
//! let dump = get_debug_info(&scheduler).unwrap();
//! assert_eq!(dump.timers.len(), 1);
//! ```

mod dump;
mod introspect;
mod mock;

pub use dump::{AutorunInfo, DebugDump, QueueItem, QueueSnapshot, TimerInfo};
pub use introspect::{get_debug_info, DebugIntrospection};
pub use mock::MockScheduler;
