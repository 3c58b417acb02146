//! A sink that records console output for assertions.

use std::fmt::Debug;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::console::ConsoleSink;

/// One recorded console operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleEntry {
    /// A plain logged line.
    Log(String),
    /// A group opened with the given title.
    Group(String),
    /// The most recent group was closed.
    GroupEnd,
}

/// A console sink that records every entry instead of printing.
///
/// Clones share the same recording, so a test can hand one clone to the
/// reporter and keep another for assertions.
///
/// # Example
///
/// ```rust
/// use testkit_settle::console::{ConsoleEntry, ConsoleSink, RecordingSink};
///
/// let mut sink = RecordingSink::new();
/// let observer = sink.clone();
///
/// sink.log("Pending AJAX requests");
///
/// assert_eq!(
///     observer.entries(),
///     vec![ConsoleEntry::Log("Pending AJAX requests".to_string())]
/// );
/// ```
#[derive(Default)]
pub struct RecordingSink {
    entries: Arc<Mutex<Vec<ConsoleEntry>>>,
}

impl RecordingSink {
    /// Creates an empty recording sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all recorded entries in order.
    #[must_use]
    pub fn entries(&self) -> Vec<ConsoleEntry> {
        self.entries.lock().clone()
    }

    /// Returns only the logged lines, in order, ignoring group markers.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.entries
            .lock()
            .iter()
            .filter_map(|entry| match entry {
                ConsoleEntry::Log(text) => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    /// Returns the number of recorded entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Returns true if nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Clears the recording.
    pub fn reset(&self) {
        self.entries.lock().clear();
    }
}

impl ConsoleSink for RecordingSink {
    fn log(&mut self, text: &str) {
        self.entries.lock().push(ConsoleEntry::Log(text.to_string()));
    }

    fn group(&mut self, title: &str) {
        self.entries
            .lock()
            .push(ConsoleEntry::Group(title.to_string()));
    }

    fn group_end(&mut self) {
        self.entries.lock().push(ConsoleEntry::GroupEnd);
    }
}

impl Clone for RecordingSink {
    fn clone(&self) -> Self {
        Self {
            entries: Arc::clone(&self.entries),
        }
    }
}

impl Debug for RecordingSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordingSink")
            .field("entries", &*self.entries.lock())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_entries_in_order() {
        let mut sink = RecordingSink::new();
        sink.log("one");
        sink.group("block");
        sink.log("two");
        sink.group_end();

        assert_eq!(
            sink.entries(),
            vec![
                ConsoleEntry::Log("one".to_string()),
                ConsoleEntry::Group("block".to_string()),
                ConsoleEntry::Log("two".to_string()),
                ConsoleEntry::GroupEnd,
            ]
        );
    }

    #[test]
    fn test_lines_skips_group_markers() {
        let mut sink = RecordingSink::new();
        sink.group("block");
        sink.log("inside");
        sink.group_end();

        assert_eq!(sink.lines(), vec!["inside"]);
        assert_eq!(sink.len(), 3);
    }

    #[test]
    fn test_clones_share_recording() {
        let mut sink = RecordingSink::new();
        let observer = sink.clone();

        sink.log("shared");

        assert_eq!(observer.lines(), vec!["shared"]);
    }

    #[test]
    fn test_reset() {
        let mut sink = RecordingSink::new();
        sink.log("line");
        assert!(!sink.is_empty());

        sink.reset();
        assert!(sink.is_empty());
    }
}
