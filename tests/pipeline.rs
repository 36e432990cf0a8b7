// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end behavior of the logging pipeline.

use loglane::{
    CallSite, Category, Clock, InMemorySink, LogEvent, Logger, LoggerConfig, MapLocalizer,
    Message, Mode, PrefixRule, RuleFormatter, Sink,
};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

fn capture() -> (Arc<InMemorySink>, Logger) {
    let sink = Arc::new(InMemorySink::new());
    let logger = Logger::new(sink.clone())
        .with_formatter(RuleFormatter::console())
        .with_config(LoggerConfig::default().with_clock(Clock::Utc));
    (sink, logger)
}

/// Drops the "[HH:MM:SS] " stamp that follows the category marker.
fn without_stamp(line: &str) -> String {
    let (marker, rest) = line.split_at(4);
    format!("{marker}{}", &rest[11..])
}

#[test]
fn category_markers() {
    let (sink, logger) = capture();
    logger.error("e", None);
    logger.warn("w", None);
    logger.success("s", None);
    logger.system("y", None);
    logger.inform("i", None);
    logger.log("m", "Message", None);
    logger.log("c", "Telemetry", None);

    let lines: Vec<String> = sink.lines().iter().map(|l| without_stamp(l)).collect();
    assert_eq!(
        lines,
        vec!["[X] e", "[!] w", "[O] s", "[*] y", "[>] i", "[>] m", "[>] c"]
    );
}

#[test]
fn rules_see_each_others_output() {
    let sink = Arc::new(InMemorySink::new());
    let logger = Logger::new(sink.clone());
    logger.add_rule(|_| true, |e| e.append("A"));
    logger.add_rule(|e| e.text().ends_with('A'), |e| e.append("B"));

    assert!(logger.inform("x", None));
    assert!(sink.drain_logs().ends_with("xAB"));
}

#[test]
fn custom_prefix_rule() {
    let sink = Arc::new(InMemorySink::new());
    let logger = Logger::new(sink.clone());
    logger.add_format_rule(PrefixRule::new(Category::Other, "[audit] "));

    logger.log("login", "Audit", None);
    logger.log("plain", "Message", None);
    let lines = sink.lines();
    assert!(lines[0].starts_with("[audit] ["));
    assert!(lines[1].starts_with('['));
    assert!(!lines[1].starts_with("[audit]"));
}

#[test]
fn drop_empty_bypasses_gate() {
    let (sink, logger) = capture();
    logger.disable(Mode::PRINT_ALL);
    logger.set_depth_ceiling(-1);
    assert!(!logger.inform("gated", None));

    logger.drop_empty();
    assert_eq!(sink.lines(), vec![String::new()]);
}

#[test]
fn localizes_before_formatting() {
    let mut localizer = MapLocalizer::new("en");
    localizer.insert("uk", "greeting", "привіт, {0}");
    let sink = Arc::new(InMemorySink::new());
    let logger = Logger::new(sink.clone())
        .with_formatter(RuleFormatter::console())
        .with_localizer(Arc::new(localizer))
        .with_config(LoggerConfig::default().with_language("uk"));

    logger.inform(Message::new("greeting").arg("Ada"), None);
    logger.inform(Message::new("untranslated {0}").arg(1), None);

    let lines = sink.lines();
    assert!(lines[0].starts_with("[>] ["));
    assert!(lines[0].ends_with("] привіт, Ada"));
    assert!(lines[1].ends_with("] untranslated 1"));
}

#[test]
fn localizer_gets_no_fallback() {
    let mut localizer = MapLocalizer::new("en");
    localizer.insert("en", "greeting", "hello");
    let sink = Arc::new(InMemorySink::new());
    let logger = Logger::new(sink.clone())
        .with_localizer(Arc::new(localizer))
        .with_config(LoggerConfig::default().with_language("de"));

    logger.inform("greeting", None);
    assert!(sink.drain_logs().ends_with("] greeting"));
}

#[derive(Debug, Default)]
struct BrokenSink {
    attempts: AtomicUsize,
}

impl Sink for BrokenSink {
    fn write(&self, _event: &LogEvent) -> std::io::Result<()> {
        let attempt = self.attempts.fetch_add(1, Ordering::SeqCst);
        if attempt % 2 == 0 {
            Err(std::io::Error::other("device unavailable"))
        } else {
            panic!("device exploded")
        }
    }
}

#[test]
fn sink_failures_are_swallowed() {
    let sink = Arc::new(BrokenSink::default());
    let logger = Logger::new(sink.clone());

    assert!(logger.error("first", None));
    assert!(logger.error("second", None));
    logger.drop_empty();
    logger.flush();
    assert_eq!(sink.attempts.load(Ordering::SeqCst), 3);
}

#[test]
fn panicking_rule_does_not_abort_call() {
    let (sink, logger) = capture();
    logger.add_rule(|_| true, |_| panic!("bad rule"));
    logger.add_rule(|e| e.is_warning(), |e| e.append(" (checked)"));

    assert!(logger.warn("careful", None));
    assert!(sink.drain_logs().ends_with("careful (checked)"));
}

#[test]
fn rule_can_add_rules_while_formatting() {
    let sink = Arc::new(InMemorySink::new());
    let logger = Arc::new(Logger::new(sink.clone()));
    let handle = Arc::downgrade(&logger);
    logger.add_rule(
        |e| e.is_info(),
        move |e| {
            e.append("!");
            if let Some(logger) = handle.upgrade() {
                logger.add_rule(|e| e.is_info(), |e| e.append("?"));
            }
        },
    );

    // on a worker, so a lock-up fails the test instead of hanging it
    let (tx, rx) = std::sync::mpsc::channel();
    let worker = Arc::clone(&logger);
    std::thread::spawn(move || {
        let _ = tx.send(worker.inform("x", None));
    });
    assert_eq!(rx.recv_timeout(Duration::from_secs(5)), Ok(true));

    // the rule added during "x" applies from the next event on
    assert!(logger.inform("y", None));
    let lines = sink.lines();
    assert!(lines[0].ends_with("x!"), "{}", lines[0]);
    assert!(lines[1].ends_with("y!?"), "{}", lines[1]);
}

#[derive(Debug)]
struct Wrapped {
    source: std::io::Error,
}

impl std::fmt::Display for Wrapped {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("could not save report")
    }
}

impl std::error::Error for Wrapped {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

#[test]
fn exception_chain() {
    let (sink, logger) = capture();
    let error = Wrapped {
        source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only volume"),
    };

    assert!(logger.exception(&error, None));
    assert!(logger.exception_full(&error, None));

    let lines: Vec<String> = sink.lines().iter().map(|l| without_stamp(l)).collect();
    assert_eq!(
        lines,
        vec![
            "[X] could not save report",
            "[X] could not save report",
            "[X] Caused by: read-only volume",
        ]
    );
}

#[test]
fn exception_under_custom_category() {
    let (sink, logger) = capture();
    let error = Wrapped {
        source: std::io::Error::other("quota exceeded"),
    };

    assert!(logger.exception_as(&error, "Warning", None));
    assert!(logger.exception_full_as(&error, "Audit", None));

    let lines: Vec<String> = sink.lines().iter().map(|l| without_stamp(l)).collect();
    assert_eq!(
        lines,
        vec![
            "[!] could not save report",
            "[>] could not save report",
            "[>] Caused by: quota exceeded",
        ]
    );
}

#[test]
fn exception_respects_ceiling() {
    let (sink, logger) = capture();
    logger.set_depth_ceiling(0);
    let error = std::io::Error::other("disk gone");
    // the catch-all mode at level 1 is too deep for a ceiling of 0
    assert!(!logger.exception(&error, None));
    assert!(logger.exception(&error, Some(Mode::at_level(0))));
    assert_eq!(sink.len(), 1);
}

#[test]
fn debug_and_trace_modes() {
    let (sink, logger) = capture();
    assert!(!logger.debug("hidden"));
    assert!(!logger.trace_in(CallSite::caller(), None));

    logger.enable(Mode::DEBUGGING);
    logger.enable(Mode::TRACING);
    assert!(logger.debug("shown"));
    assert!(logger.trace_in(CallSite::new("app::job", "src/job.rs", 10), None));
    assert!(logger.trace_out(CallSite::new("app::job", "src/job.rs", 42), None));

    let lines: Vec<String> = sink.lines().iter().map(|l| without_stamp(l)).collect();
    assert_eq!(
        lines,
        vec![
            "[*] shown",
            "[*] entering app::job at src/job.rs:10",
            "[*] leaving app::job at src/job.rs:42",
        ]
    );
}

#[test]
fn utc_timestamp_prefix() {
    let sink = Arc::new(InMemorySink::new());
    let logger = Logger::new(sink.clone())
        .with_config(LoggerConfig::default().with_clock(Clock::Utc));
    let time = chrono::DateTime::parse_from_rfc3339("2024-05-01T08:09:10+00:00").unwrap();
    let event = LogEvent::at(time, "fixed", "Message", Mode::PRINT_ALL);
    assert!(logger.log_event(event, "en"));
    assert_eq!(sink.drain_logs(), "[08:09:10] fixed");
}
