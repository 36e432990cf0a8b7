// SPDX-License-Identifier: MIT OR Apache-2.0

//! The logging facade.
//!
//! A [`Logger`] ties the pieces together.  Each call goes through the same
//! pipeline:
//!
//! 1. **Gate**: the [`ModeRegistry`] decides whether the event's mode prints.
//!    Rejected events cost nothing further.
//! 2. **Localize**: with a [`Localizer`] attached, the message is resolved for
//!    the configured language.  Unresolved messages are kept as they are.
//! 3. **Timestamp**: the text is prefixed with `[HH:MM:SS] `.
//! 4. **Format**: every matching rule of the [`RuleFormatter`] runs, in order.
//! 5. **Write**: the event goes to the [`Sink`].  Sink errors and panics are
//!    swallowed.
//!
//! The only thing a caller ever gets back is whether the event was emitted.
//!
//! # Construction
//!
//! Building a logger and configuring its modes are separate steps:
//!
//! ```no_run
//! use loglane::{ConfigOutcome, Logger, LoggerConfig};
//!
//! let logger = Logger::console()
//!     .with_config(LoggerConfig::default().with_levels_path("levels.txt"));
//! match logger.configure() {
//!     ConfigOutcome::Loaded(count) => println!("{count} modes from levels.txt"),
//!     ConfigOutcome::Fallback(error) => println!("using default modes: {error}"),
//! }
//! logger.success("ready", None);
//! ```

use crate::category::Category;
use crate::config::{ConfigError, LoggerConfig, load_modes};
use crate::console_sink::ConsoleSink;
use crate::formatter::{FormatRule, RuleFormatter};
use crate::localizer::Localizer;
use crate::log_event::LogEvent;
use crate::message::Message;
use crate::mode::Mode;
use crate::registry::{ConfigOutcome, ModeRegistry};
use crate::sink::Sink;
use crate::spinlock::Spinlock;
use std::future::Future;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

/// Message template for [`Logger::trace_in`]: function, file, line.
pub const TRACE_IN_KEY: &str = "entering {0} at {1}:{2}";
/// Message template for [`Logger::trace_out`]: function, file, line.
pub const TRACE_OUT_KEY: &str = "leaving {0} at {1}:{2}";
/// Message template for each cause logged by [`Logger::exception_full`].
pub const CAUSED_BY_KEY: &str = "Caused by: {0}";

/**
Where a trace call was made.

Usually captured by the [`trace_in!`](crate::trace_in) and
[`trace_out!`](crate::trace_out) macros.  [`CallSite::caller`] captures the file
and line without a macro, but not the module.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CallSite {
    pub module: Option<&'static str>,
    pub file: &'static str,
    pub line: u32,
}

impl CallSite {
    pub const fn new(module: &'static str, file: &'static str, line: u32) -> Self {
        Self {
            module: Some(module),
            file,
            line,
        }
    }

    #[track_caller]
    pub fn caller() -> Self {
        let location = std::panic::Location::caller();
        Self {
            module: None,
            file: location.file(),
            line: location.line(),
        }
    }

    /// The module path, or the file stem when the module is unknown.
    pub fn scope(&self) -> &'static str {
        match self.module {
            Some(module) => module,
            None => {
                let file = self.file;
                let name = file.rsplit(['/', '\\']).next().unwrap_or(file);
                name.strip_suffix(".rs").unwrap_or(name)
            }
        }
    }
}

/**
The logging facade.

A logger is `Send + Sync`; share it with an `Arc`.  See the [module
docs](self) for the pipeline every call goes through.
*/
#[derive(Debug)]
pub struct Logger {
    config: LoggerConfig,
    registry: Spinlock<ModeRegistry>,
    formatter: Spinlock<RuleFormatter>,
    localizer: Option<Arc<dyn Localizer>>,
    sink: Arc<dyn Sink>,
}

impl Logger {
    /**
    A logger writing to `sink`, with no formatting rules and only the
    catch-all mode enabled.

    Call [`Self::configure`] to load modes.
    */
    pub fn new(sink: Arc<dyn Sink>) -> Self {
        Self {
            config: LoggerConfig::default(),
            registry: Spinlock::new(ModeRegistry::new()),
            formatter: Spinlock::new(RuleFormatter::new()),
            localizer: None,
            sink,
        }
    }

    /// A logger printing to stdout with the console category markers.
    pub fn console() -> Self {
        Self::new(Arc::new(ConsoleSink::new())).with_formatter(RuleFormatter::console())
    }

    pub fn with_config(mut self, config: LoggerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_localizer(mut self, localizer: Arc<dyn Localizer>) -> Self {
        self.localizer = Some(localizer);
        self
    }

    /// Replaces the rule list.
    pub fn with_formatter(mut self, formatter: RuleFormatter) -> Self {
        self.formatter = Spinlock::new(formatter);
        self
    }

    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    pub fn sink(&self) -> &Arc<dyn Sink> {
        &self.sink
    }

    // ------------------------------------------------------------------
    // configuration
    // ------------------------------------------------------------------

    /**
    Loads modes from the configured levels file.

    On any failure the default ladder is enabled instead; the error is
    returned in the outcome and otherwise ignored.
    */
    pub fn configure(&self) -> ConfigOutcome {
        let loaded = load_modes(&self.config.levels_path, self.config.delimiter);
        self.apply_config(loaded)
    }

    /// Applies modes loaded by some other means, with the same fallback as [`Self::configure`].
    pub fn apply_config(&self, loaded: Result<Vec<Mode>, ConfigError>) -> ConfigOutcome {
        self.registry.with_mut(|registry| registry.apply_config(loaded))
    }

    /**
    Loads the levels file on a background thread.

    The default ladder is enabled before this returns, so calls made while
    the file is loading behave as if the load had failed.  If the load
    succeeds, the ladder switches are put back the way they were and the
    loaded modes are enabled, ending in the same state as [`Self::configure`].
    An [`Self::enable`]/[`Self::disable`] of a ladder mode made while the load
    is running is undone by that; join the handle before adjusting those by hand.
    */
    pub fn configure_in_background(
        self: &Arc<Self>,
    ) -> std::thread::JoinHandle<ConfigOutcome> {
        let previous = self
            .registry
            .with_mut(|registry| registry.enable_provisional_ladder());
        let logger = Arc::clone(self);
        std::thread::spawn(move || {
            match load_modes(&logger.config.levels_path, logger.config.delimiter) {
                Ok(modes) => {
                    let count = logger
                        .registry
                        .with_mut(|registry| registry.settle_loaded(previous, modes));
                    ConfigOutcome::Loaded(count)
                }
                Err(error) => ConfigOutcome::Fallback(error),
            }
        })
    }

    pub fn enable(&self, mode: Mode) {
        self.registry.with_mut(|registry| registry.enable(mode));
    }

    pub fn disable(&self, mode: Mode) {
        self.registry.with_mut(|registry| registry.disable(mode));
    }

    /// Prints exactly the modes with `level <= ceiling`.  Negative removes the ceiling.
    pub fn set_depth_ceiling(&self, ceiling: i64) {
        self.registry
            .with_mut(|registry| registry.set_depth_ceiling(ceiling));
    }

    pub fn depth_ceiling(&self) -> Option<u32> {
        self.registry.with(|registry| registry.depth_ceiling())
    }

    pub fn should_print(&self, mode: &Mode) -> bool {
        self.registry.with(|registry| registry.should_print(mode))
    }

    pub fn resolve(&self, name: &str) -> Option<Mode> {
        self.registry.with(|registry| registry.resolve(name))
    }

    /// Appends a formatting rule built from closures.
    pub fn add_rule<P, T>(&self, predicate: P, transform: T)
    where
        P: Fn(&LogEvent) -> bool + Send + Sync + 'static,
        T: Fn(&mut LogEvent) + Send + Sync + 'static,
    {
        self.formatter
            .with_mut(|formatter| formatter.add_rule(predicate, transform));
    }

    pub fn add_format_rule(&self, rule: impl FormatRule + 'static) {
        self.formatter.with_mut(|formatter| formatter.add(rule));
    }

    // ------------------------------------------------------------------
    // pipeline
    // ------------------------------------------------------------------

    /**
    Runs `event` through the pipeline.  Returns whether it was emitted.

    `language` is passed to the localizer, if any.  The event's mode is used
    as given; see [`Self::log`] for name resolution.
    */
    pub fn log_event(&self, event: LogEvent, language: &str) -> bool {
        match self.prepare(event, language) {
            Some(event) => {
                self.dispatch(&event);
                true
            }
            None => false,
        }
    }

    /// [`Self::log_event`], dispatching through [`Sink::write_async`].
    pub async fn log_event_async(&self, event: LogEvent, language: &str) -> bool {
        let Some(event) = self.prepare(event, language) else {
            return false;
        };
        if let Ok(write) = catch_unwind(AssertUnwindSafe(|| self.sink.write_async(event))) {
            Contained(write).await;
        }
        true
    }

    fn prepare(&self, mut event: LogEvent, language: &str) -> Option<LogEvent> {
        if !self.should_print(event.mode()) {
            return None;
        }
        if let Some(localizer) = &self.localizer {
            let resolved = catch_unwind(AssertUnwindSafe(|| {
                localizer.resolve(language, event.message(), false)
            }));
            if let Ok(Some(text)) = resolved {
                event.set_text(text);
            }
        }
        let stamp = event.time().format("[%H:%M:%S] ").to_string();
        event.prepend(&stamp);
        //rules run outside the lock so they may add rules to this logger
        let formatter = self.formatter.with(|formatter| formatter.clone());
        formatter.format(&mut event);
        Some(event)
    }

    fn dispatch(&self, event: &LogEvent) {
        //best effort: an unwritable sink must not take the caller down
        let _ = catch_unwind(AssertUnwindSafe(|| self.sink.write(event)));
    }

    /**
    Builds an event for `message` and logs it.

    With no ceiling set, `mode` is first resolved by name against the
    registered modes so that a [`Mode::named`] picks up its registered level.
    A name that isn't registered keeps the mode as given (and is silenced).
    Without a mode, the configured default mode is used, then the catch-all mode.
    */
    pub fn log(&self, message: impl Into<Message>, category: &str, mode: Option<Mode>) -> bool {
        let event = self.event(message.into(), category, mode);
        self.log_event(event, &self.config.language)
    }

    /// [`Self::log`], dispatching through [`Sink::write_async`].
    pub async fn log_async(
        &self,
        message: impl Into<Message>,
        category: &str,
        mode: Option<Mode>,
    ) -> bool {
        let event = self.event(message.into(), category, mode);
        self.log_event_async(event, &self.config.language).await
    }

    fn event(&self, message: Message, category: &str, mode: Option<Mode>) -> LogEvent {
        let mode = mode.unwrap_or_else(|| self.config.fallback_mode());
        let mode = self.registry.with(|registry| {
            if registry.depth_ceiling().is_some() {
                return mode;
            }
            registry.resolve(mode.name()).unwrap_or(mode)
        });
        LogEvent::new(message, category, mode, self.config.clock)
    }

    pub fn error(&self, message: impl Into<Message>, mode: Option<Mode>) -> bool {
        self.log(message, Category::Error.as_str(), mode)
    }

    pub fn warn(&self, message: impl Into<Message>, mode: Option<Mode>) -> bool {
        self.log(message, Category::Warning.as_str(), mode)
    }

    pub fn success(&self, message: impl Into<Message>, mode: Option<Mode>) -> bool {
        self.log(message, Category::Successful.as_str(), mode)
    }

    pub fn system(&self, message: impl Into<Message>, mode: Option<Mode>) -> bool {
        self.log(message, Category::System.as_str(), mode)
    }

    pub fn inform(&self, message: impl Into<Message>, mode: Option<Mode>) -> bool {
        self.log(message, Category::Information.as_str(), mode)
    }

    /**
    Writes a blank line.

    The divider goes straight to the sink: it is never gated, localized,
    timestamped or formatted.
    */
    pub fn drop_empty(&self) {
        self.dispatch(&LogEvent::separator(self.config.clock));
    }

    /// A system message at [`Mode::DEBUGGING`].
    pub fn debug(&self, message: impl Into<Message>) -> bool {
        self.system(message, Some(Mode::DEBUGGING))
    }

    /// Logs entry into `site`, at [`Mode::TRACING`] unless another mode is given.
    pub fn trace_in(&self, site: CallSite, mode: Option<Mode>) -> bool {
        self.trace(TRACE_IN_KEY, site, mode)
    }

    /// Logs exit from `site`, at [`Mode::TRACING`] unless another mode is given.
    pub fn trace_out(&self, site: CallSite, mode: Option<Mode>) -> bool {
        self.trace(TRACE_OUT_KEY, site, mode)
    }

    fn trace(&self, key: &'static str, site: CallSite, mode: Option<Mode>) -> bool {
        let message = Message::new(key)
            .arg(site.scope())
            .arg(site.file)
            .arg(site.line);
        self.system(message, Some(mode.unwrap_or(Mode::TRACING)))
    }

    /**
    Logs an error's message as an Error event.

    Without a mode, the catch-all mode at level 1 is used.
    */
    pub fn exception<E>(&self, error: &E, mode: Option<Mode>) -> bool
    where
        E: std::error::Error + ?Sized,
    {
        self.exception_as(error, Category::Error.as_str(), mode)
    }

    /// [`Self::exception`] under another category.
    pub fn exception_as<E>(&self, error: &E, category: &str, mode: Option<Mode>) -> bool
    where
        E: std::error::Error + ?Sized,
    {
        self.log(error.to_string(), category, Some(mode.unwrap_or(Mode::at_level(1))))
    }

    /**
    Logs an error followed by each error in its `source()` chain.

    Returns whether the top-level error was emitted.
    */
    pub fn exception_full<E>(&self, error: &E, mode: Option<Mode>) -> bool
    where
        E: std::error::Error + ?Sized,
    {
        self.exception_full_as(error, Category::Error.as_str(), mode)
    }

    /// [`Self::exception_full`] under another category.
    pub fn exception_full_as<E>(&self, error: &E, category: &str, mode: Option<Mode>) -> bool
    where
        E: std::error::Error + ?Sized,
    {
        let mode = mode.unwrap_or(Mode::at_level(1));
        let emitted = self.exception_as(error, category, Some(mode.clone()));
        let mut source = error.source();
        while let Some(cause) = source {
            self.log(Message::new(CAUSED_BY_KEY).arg(cause), category, Some(mode.clone()));
            source = cause.source();
        }
        emitted
    }

    /// Flushes the sink, ignoring errors.
    pub fn flush(&self) {
        let _ = catch_unwind(AssertUnwindSafe(|| self.sink.flush()));
    }
}

/// Polls a sink's write future, treating a panic as completion.
struct Contained<'a>(Pin<Box<dyn Future<Output = std::io::Result<()>> + Send + 'a>>);

impl Future for Contained<'_> {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        match catch_unwind(AssertUnwindSafe(|| self.0.as_mut().poll(cx))) {
            Ok(Poll::Pending) => Poll::Pending,
            Ok(Poll::Ready(_)) | Err(_) => Poll::Ready(()),
        }
    }
}

/*
Boilerplate notes for Logger:

- Debug: derived, every field is Debug
- Clone: NOT implemented - two loggers silently sharing a sink but not modes would be confusing; share via Arc
- PartialEq/Eq/Hash: NOT implemented - rules are closures
- Default: NOT implemented - pick Logger::console() or Logger::new(sink) explicitly
- Send/Sync: automatic, the spinlocks make shared mutation safe
*/
