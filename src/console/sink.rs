//! The `ConsoleSink` trait and the ambient stdout sink.

/// A console-like output target for diagnostics.
///
/// Mirrors the minimal console surface the reporter needs: plain lines
/// plus titled groups. Sinks are assumed infallible; a sink that can
/// fail should swallow or surface its own errors, since diagnostics are
/// written during test cleanup where a secondary failure would mask the
/// primary one.
pub trait ConsoleSink {
    /// Emits one line of text.
    fn log(&mut self, text: &str);

    /// Opens a titled group. Subsequent [`log`](Self::log) calls belong
    /// to the group until [`group_end`](Self::group_end).
    fn group(&mut self, title: &str);

    /// Closes the most recently opened group.
    fn group_end(&mut self);
}

/// A sink that writes to the process's standard output.
///
/// Groups are rendered as an indented block under the group title.
#[derive(Debug, Default)]
pub struct StdoutSink {
    depth: usize,
}

impl StdoutSink {
    /// Creates a stdout sink with no open groups.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn indent(&self) -> String {
        "  ".repeat(self.depth)
    }
}

impl ConsoleSink for StdoutSink {
    fn log(&mut self, text: &str) {
        println!("{}{text}", self.indent());
    }

    fn group(&mut self, title: &str) {
        println!("{}{title}", self.indent());
        self.depth += 1;
    }

    fn group_end(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stdout_sink_tracks_depth() {
        let mut sink = StdoutSink::new();
        assert_eq!(sink.indent(), "");

        sink.group("outer");
        assert_eq!(sink.indent(), "  ");

        sink.group("inner");
        assert_eq!(sink.indent(), "    ");

        sink.group_end();
        sink.group_end();
        assert_eq!(sink.indent(), "");
    }

    #[test]
    fn test_unbalanced_group_end_is_harmless() {
        let mut sink = StdoutSink::new();
        sink.group_end();
        assert_eq!(sink.indent(), "");
    }
}
