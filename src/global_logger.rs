// SPDX-License-Identifier: MIT OR Apache-2.0

//! The process-wide default logger.
//!
//! The logging macros ([`inform!`](crate::inform), [`error!`](crate::error), ...)
//! log through the global logger.  Until one is installed, the first access
//! builds a [`Logger::console`] and runs [`Logger::configure`] on it, so it
//! reads `Resources/Logging/levels.txt` relative to the working directory or
//! falls back to the default ladder.
//!
//! # Examples
//!
//! ## Using the default logger
//!
//! ```
//! let logger = loglane::global_logger();
//! assert!(logger.should_print(&loglane::Mode::PRINT_ALL));
//! ```
//!
//! ## Replacing it
//!
//! ```
//! use loglane::{InMemorySink, Logger, set_global_logger};
//! use std::sync::Arc;
//!
//! let sink = Arc::new(InMemorySink::new());
//! set_global_logger(Arc::new(Logger::new(sink.clone())));
//!
//! loglane::inform!("{} widgets", 3);
//! assert!(sink.drain_logs().ends_with("3 widgets"));
//! ```
//!
//! # Implementation Notes
//!
//! The slot is a spinlock-protected `Arc<Logger>`, for the same wasm reasons as
//! the logger's own state.  Callers get a clone of the `Arc`, so a logger that
//! is replaced mid-call finishes that call normally.

use crate::logger::Logger;
use crate::spinlock::Spinlock;
use std::sync::{Arc, OnceLock};

static GLOBAL_LOGGER: OnceLock<Spinlock<Arc<Logger>>> = OnceLock::new();

fn default_logger() -> Arc<Logger> {
    let logger = Logger::console();
    //falls back to the default ladder when there is no levels file
    let _ = logger.configure();
    Arc::new(logger)
}

/// Returns the global logger, building the default one on first use.
pub fn global_logger() -> Arc<Logger> {
    GLOBAL_LOGGER
        .get_or_init(|| Spinlock::new(default_logger()))
        .with(|logger| logger.clone())
}

/// Replaces the global logger.
pub fn set_global_logger(logger: Arc<Logger>) {
    let initial = logger.clone();
    GLOBAL_LOGGER
        .get_or_init(|| Spinlock::new(initial))
        .with_mut(|slot| *slot = logger);
}
