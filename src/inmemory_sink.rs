// SPDX-License-Identifier: MIT OR Apache-2.0

//! # In-Memory Sink
//!
//! A sink that captures formatted lines instead of printing them.  It is meant for:
//!
//! - Unit testing code that logs through a [`Logger`](crate::Logger)
//! - Capturing output where stdout is redirected or unavailable
//! - Programmatically examining log output
//!
//! The buffer is a `Mutex<Vec<String>>`, so one sink can be shared by loggers
//! on several threads.

use crate::log_event::LogEvent;
use crate::sink::Sink;
use std::sync::{Mutex, MutexGuard};

/// A sink that stores each event's final text in a `Vec<String>`.
///
/// # Example
///
/// ```rust
/// use loglane::{InMemorySink, Logger, Mode};
/// use std::sync::Arc;
///
/// let sink = Arc::new(InMemorySink::new());
/// let logger = Logger::new(sink.clone());
/// logger.enable(Mode::ESSENTIAL);
///
/// logger.warn("disk almost full", Some(Mode::ESSENTIAL));
/// logger.warn("not shown", Some(Mode::DEBUGGING));
///
/// let logs = sink.drain_logs();
/// assert!(logs.contains("disk almost full"));
/// assert!(!logs.contains("not shown"));
/// ```
#[derive(Debug, Default)]
pub struct InMemorySink {
    lines: Mutex<Vec<String>>,
}

// ============================================================================
// BOILERPLATE TRAIT IMPLEMENTATIONS
// ============================================================================
//
// - Debug: derived, required by Sink
// - Default: derived, empty buffer
// - Clone: NOT implemented - two sinks sharing nothing would be surprising; share via Arc
// - PartialEq/Eq/Hash: NOT implemented - comparing mutex contents is racy
// - Send/Sync: automatic through Mutex

impl InMemorySink {
    pub fn new() -> Self {
        Self {
            lines: Mutex::new(Vec::new()),
        }
    }

    // a test that panicked while holding the lock shouldn't hide the captured lines
    fn lock(&self) -> MutexGuard<'_, Vec<String>> {
        self.lines.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// A copy of the captured lines, oldest first.
    pub fn lines(&self) -> Vec<String> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Drains all lines into a single newline-joined string, clearing the buffer.
    ///
    /// ```rust
    /// use loglane::{InMemorySink, Logger};
    /// use std::sync::Arc;
    ///
    /// let sink = Arc::new(InMemorySink::new());
    /// let logger = Logger::new(sink.clone());
    /// logger.inform("first", None);
    /// logger.inform("second", None);
    ///
    /// let logs = sink.drain_logs();
    /// assert!(logs.contains("first"));
    /// assert!(logs.contains("second"));
    /// assert_eq!(sink.drain_logs(), "");
    /// ```
    pub fn drain_logs(&self) -> String {
        let mut lines = self.lock();
        let result = lines.join("\n");
        lines.clear();
        result
    }

    /// Prints all lines to stderr and clears the buffer.
    pub fn drain_to_console(&self) {
        let mut lines = self.lock();
        for line in lines.iter() {
            #[cfg(target_arch = "wasm32")]
            web_sys::console::log_1(&line.clone().into());
            #[cfg(not(target_arch = "wasm32"))]
            eprintln!("{}", line);
        }
        lines.clear();
    }
}

impl Sink for InMemorySink {
    fn write(&self, event: &LogEvent) -> std::io::Result<()> {
        let line = event.text();
        self.lock().push(line);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log_event::Clock;
    use crate::mode::Mode;

    #[test]
    fn captures_in_order() {
        let sink = InMemorySink::new();
        for text in ["a", "b", ""] {
            sink.write(&LogEvent::new(text, "Message", Mode::PRINT_ALL, Clock::Utc))
                .unwrap();
        }
        assert_eq!(sink.lines(), vec!["a", "b", ""]);
        assert_eq!(sink.drain_logs(), "a\nb\n");
        assert!(sink.is_empty());
    }
}
