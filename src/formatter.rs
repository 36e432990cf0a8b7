// SPDX-License-Identifier: MIT OR Apache-2.0

//! Rule-based event formatting.
//!
//! A [`RuleFormatter`] holds an ordered list of rules.  Formatting an event
//! runs *every* rule whose predicate matches, in registration order.  Each
//! predicate sees the event as left by the rules before it, so rules compose
//! as a pipeline of patches:
//!
//! ```
//! use loglane::{Clock, LogEvent, Mode, RuleFormatter};
//!
//! let mut formatter = RuleFormatter::new();
//! formatter.add_rule(|_| true, |e| e.append("A"));
//! formatter.add_rule(|e| e.text().contains('A'), |e| e.append("B"));
//!
//! let mut event = LogEvent::new("x", "Message", Mode::PRINT_ALL, Clock::Utc);
//! formatter.format(&mut event);
//! assert_eq!(event.text(), "xAB");
//! ```
//!
//! A rule that panics is contained: a panicking predicate counts as no match,
//! a panicking transform is abandoned, and the remaining rules still run.

use crate::category::Category;
use crate::log_event::LogEvent;
use std::fmt::Debug;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;

/**
One formatting rule.

Implement this for rules that carry state or need a name in `Debug` output.
For one-off rules, [`RuleFormatter::add_rule`] accepts a pair of closures.
*/
pub trait FormatRule: Debug + Send + Sync {
    fn matches(&self, event: &LogEvent) -> bool;

    fn apply(&self, event: &mut LogEvent);
}

/// A rule made from a predicate closure and a transform closure.
struct FnRule<P, T> {
    predicate: P,
    transform: T,
}

impl<P, T> Debug for FnRule<P, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("FnRule")
    }
}

impl<P, T> FormatRule for FnRule<P, T>
where
    P: Fn(&LogEvent) -> bool + Send + Sync,
    T: Fn(&mut LogEvent) + Send + Sync,
{
    fn matches(&self, event: &LogEvent) -> bool {
        (self.predicate)(event)
    }

    fn apply(&self, event: &mut LogEvent) {
        (self.transform)(event)
    }
}

/**
Prepends a fixed marker to events of one category.
*/
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixRule {
    category: Category,
    prefix: &'static str,
}

impl PrefixRule {
    pub const fn new(category: Category, prefix: &'static str) -> Self {
        Self { category, prefix }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn prefix(&self) -> &'static str {
        self.prefix
    }
}

impl FormatRule for PrefixRule {
    fn matches(&self, event: &LogEvent) -> bool {
        event.category() == self.category
    }

    fn apply(&self, event: &mut LogEvent) {
        event.prepend(self.prefix);
    }
}

/**
The console markers, in the order they are registered by [`RuleFormatter::console`].
*/
pub const CONSOLE_PREFIXES: [PrefixRule; 7] = [
    PrefixRule::new(Category::Message, "[>] "),
    PrefixRule::new(Category::System, "[*] "),
    PrefixRule::new(Category::Information, "[>] "),
    PrefixRule::new(Category::Other, "[>] "),
    PrefixRule::new(Category::Successful, "[O] "),
    PrefixRule::new(Category::Warning, "[!] "),
    PrefixRule::new(Category::Error, "[X] "),
];

/**
An ordered list of rules.

Rules are shared, so cloning a formatter is cheap and the clone keeps
working if rules are added to the original afterwards.
*/
#[derive(Debug, Default, Clone)]
pub struct RuleFormatter {
    rules: Vec<Arc<dyn FormatRule>>,
}

impl RuleFormatter {
    /// A formatter with no rules; events pass through unchanged.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// A formatter with the console category markers.
    pub fn console() -> Self {
        let mut formatter = Self::new();
        for rule in CONSOLE_PREFIXES {
            formatter.add(rule);
        }
        formatter
    }

    /// Appends a rule.  Rules are never deduplicated or removed.
    pub fn add(&mut self, rule: impl FormatRule + 'static) {
        self.rules.push(Arc::new(rule));
    }

    /// Appends a rule built from closures.
    pub fn add_rule<P, T>(&mut self, predicate: P, transform: T)
    where
        P: Fn(&LogEvent) -> bool + Send + Sync + 'static,
        T: Fn(&mut LogEvent) + Send + Sync + 'static,
    {
        self.add(FnRule {
            predicate,
            transform,
        });
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Applies every matching rule, in order, to `event`.
    pub fn format(&self, event: &mut LogEvent) {
        for rule in &self.rules {
            let matched = catch_unwind(AssertUnwindSafe(|| rule.matches(event))).unwrap_or(false);
            if matched {
                //a panicking transform may leave the event partially rewritten; keep going
                let _ = catch_unwind(AssertUnwindSafe(|| rule.apply(event)));
            }
        }
    }
}
