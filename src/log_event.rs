// SPDX-License-Identifier: MIT OR Apache-2.0

//! The event type passed through the logging pipeline.
//!
//! A [`LogEvent`] is created once per logging call, gated, localized, rewritten
//! in place by formatting rules, handed to a [`Sink`](crate::Sink), and dropped.
//!
//! # Example
//!
//! ```rust
//! use loglane::{Category, Clock, LogEvent, Mode};
//!
//! let mut event = LogEvent::new("disk almost full", "Warning", Mode::ESSENTIAL, Clock::Utc);
//! assert_eq!(event.category(), Category::Warning);
//!
//! event.prepend("[!] ");
//! assert_eq!(event.text(), "[!] disk almost full");
//! ```

use crate::category::Category;
use crate::message::Message;
use crate::mode::Mode;
use chrono::{DateTime, FixedOffset, Local, Utc};
use std::fmt::Display;

/**
Which wall clock event timestamps are read from.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Clock {
    #[default]
    Local,
    Utc,
}

impl Clock {
    pub fn now(self) -> DateTime<FixedOffset> {
        match self {
            Clock::Local => Local::now().fixed_offset(),
            Clock::Utc => Utc::now().fixed_offset(),
        }
    }
}

/**
A single log event.

The message starts out as a localizable [`Message`].  Once the pipeline
localizes or rewrites it, it holds the plain display text.
*/
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEvent {
    time: DateTime<FixedOffset>,
    message: Message,
    category: String,
    mode: Mode,
}

impl LogEvent {
    /// Creates an event, reading the timestamp from `clock`.
    pub fn new(
        message: impl Into<Message>,
        category: impl Into<String>,
        mode: Mode,
        clock: Clock,
    ) -> Self {
        Self::at(clock.now(), message, category, mode)
    }

    /// Creates an event with an explicit timestamp.
    pub fn at(
        time: DateTime<FixedOffset>,
        message: impl Into<Message>,
        category: impl Into<String>,
        mode: Mode,
    ) -> Self {
        Self {
            time,
            message: message.into(),
            category: category.into(),
            mode,
        }
    }

    /**
    An empty event used as a visual divider.

    Separators are written straight to the sink and never gated or formatted.
    */
    pub fn separator(clock: Clock) -> Self {
        Self::new("", Category::Other.as_str(), Mode::PRINT_ALL, clock)
    }

    pub fn time(&self) -> DateTime<FixedOffset> {
        self.time
    }

    pub fn message(&self) -> &Message {
        &self.message
    }

    /// The rendered display text.
    pub fn text(&self) -> String {
        self.message.render()
    }

    /// Replaces the message with plain text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.message = Message::new(text);
    }

    pub fn prepend(&mut self, prefix: &str) {
        let text = format!("{}{}", prefix, self.message.render());
        self.set_text(text);
    }

    pub fn append(&mut self, suffix: &str) {
        let mut text = self.message.render();
        text.push_str(suffix);
        self.set_text(text);
    }

    /// The category string exactly as the caller supplied it.
    pub fn category_name(&self) -> &str {
        &self.category
    }

    pub fn category(&self) -> Category {
        Category::classify(&self.category)
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn is_message(&self) -> bool {
        self.category() == Category::Message
    }
    pub fn is_warning(&self) -> bool {
        self.category() == Category::Warning
    }
    pub fn is_info(&self) -> bool {
        self.category() == Category::Information
    }
    pub fn is_error(&self) -> bool {
        self.category() == Category::Error
    }
    pub fn is_success(&self) -> bool {
        self.category() == Category::Successful
    }
    pub fn is_system(&self) -> bool {
        self.category() == Category::System
    }
    pub fn is_other(&self) -> bool {
        self.category() == Category::Other
    }
}

impl Display for LogEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text())
    }
}
/*
Boilerplate notes for LogEvent:

IMPLEMENTED:
- Debug/Clone: derived
- PartialEq/Eq: derived; note that Mode compares by name only
- Display: the rendered text, which is what sinks print

NOT IMPLEMENTED:
- Default: an event needs a timestamp from a chosen clock
- Hash: not needed, events are never used as keys
- Ord/PartialOrd: no meaningful ordering
*/
