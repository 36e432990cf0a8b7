// SPDX-License-Identifier: MIT OR Apache-2.0

//! Dispatching through `Sink::write_async`.

use loglane::{InMemorySink, LogEvent, Logger, Mode, RuleFormatter, Sink};
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use test_executors::async_test;

/// Records which path each event took.
#[derive(Debug, Default)]
struct PathSink {
    paths: Mutex<Vec<&'static str>>,
}

impl Sink for PathSink {
    fn write(&self, _event: &LogEvent) -> std::io::Result<()> {
        self.paths.lock().unwrap().push("sync");
        Ok(())
    }

    fn write_async<'s>(
        &'s self,
        _event: LogEvent,
    ) -> Pin<Box<dyn Future<Output = std::io::Result<()>> + Send + 's>> {
        Box::pin(async move {
            self.paths.lock().unwrap().push("async");
            Ok(())
        })
    }
}

#[derive(Debug)]
struct PanickingSink;

impl Sink for PanickingSink {
    fn write(&self, _event: &LogEvent) -> std::io::Result<()> {
        panic!("sync write")
    }

    fn write_async<'s>(
        &'s self,
        _event: LogEvent,
    ) -> Pin<Box<dyn Future<Output = std::io::Result<()>> + Send + 's>> {
        Box::pin(async move { Err(explode()) })
    }
}

fn explode() -> std::io::Error {
    panic!("async write")
}

#[async_test]
async fn default_write_async_uses_write() {
    let sink = Arc::new(InMemorySink::new());
    let logger = Logger::new(sink.clone()).with_formatter(RuleFormatter::console());

    assert!(logger.log_async("hello", "Successful", None).await);
    assert!(!logger.log_async("hidden", "Successful", Some(Mode::DEBUGGING)).await);

    let logs = sink.drain_logs();
    assert!(logs.starts_with("[O] ["));
    assert!(logs.ends_with("hello"));
}

#[async_test]
async fn async_path_is_taken() {
    let sink = Arc::new(PathSink::default());
    let logger = Logger::new(sink.clone());

    assert!(logger.log_async("a", "Message", None).await);
    assert!(logger.log("b", "Message", None));
    assert_eq!(*sink.paths.lock().unwrap(), vec!["async", "sync"]);
}

#[async_test]
async fn async_sink_panic_is_contained() {
    let logger = Logger::new(Arc::new(PanickingSink));
    assert!(logger.log_async("x", "Error", None).await);
    assert!(logger.log("y", "Error", None));
}
