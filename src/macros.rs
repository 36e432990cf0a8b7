// SPDX-License-Identifier: MIT OR Apache-2.0

//! Logging macros.
//!
//! Each macro formats its arguments like [`format!`] and logs the result
//! through the [global logger](crate::global_logger), evaluating to whether the
//! event was emitted.  An optional leading `mode = <expr>;` picks the mode:
//!
//! ```
//! use loglane::Mode;
//!
//! loglane::inform!("{} files scanned", 12);
//! loglane::warn!(mode = Mode::DIAGNOSTIC; "cache miss for {key}", key = "a/b");
//! ```
//!
//! | macro | category | default mode |
//! |---|---|---|
//! | [`error!`](crate::error) | Error | configured default |
//! | [`warn!`](crate::warn) | Warning | configured default |
//! | [`success!`](crate::success) | Successful | configured default |
//! | [`system!`](crate::system) | System | configured default |
//! | [`inform!`](crate::inform) | Information | configured default |
//! | [`debug!`](crate::debug) | System | Debugging |
//! | [`trace_in!`](crate::trace_in) / [`trace_out!`](crate::trace_out) | System | Tracing |

#[doc(hidden)]
#[macro_export]
macro_rules! __log_global {
    ($method:ident, mode = $mode:expr; $($arg:tt)+) => {
        $crate::global_logger().$method(
            ::std::format!($($arg)+),
            ::std::option::Option::Some($mode),
        )
    };
    ($method:ident, $($arg:tt)+) => {
        $crate::global_logger().$method(::std::format!($($arg)+), ::std::option::Option::None)
    };
}

/// Logs an Error event through the global logger.
#[macro_export]
macro_rules! error {
    ($($arg:tt)+) => { $crate::__log_global!(error, $($arg)+) };
}

/// Logs a Warning event through the global logger.
#[macro_export]
macro_rules! warn {
    ($($arg:tt)+) => { $crate::__log_global!(warn, $($arg)+) };
}

/// Logs a Successful event through the global logger.
#[macro_export]
macro_rules! success {
    ($($arg:tt)+) => { $crate::__log_global!(success, $($arg)+) };
}

/// Logs a System event through the global logger.
#[macro_export]
macro_rules! system {
    ($($arg:tt)+) => { $crate::__log_global!(system, $($arg)+) };
}

/// Logs an Information event through the global logger.
#[macro_export]
macro_rules! inform {
    ($($arg:tt)+) => { $crate::__log_global!(inform, $($arg)+) };
}

/// Logs a System event at [`Mode::DEBUGGING`](crate::Mode::DEBUGGING) through the global logger.
#[macro_export]
macro_rules! debug {
    ($($arg:tt)+) => {
        $crate::global_logger().debug(::std::format!($($arg)+))
    };
}

/// The [`CallSite`](crate::CallSite) of the macro invocation.
#[macro_export]
macro_rules! call_site {
    () => {
        $crate::CallSite::new(::std::module_path!(), ::std::file!(), ::std::line!())
    };
}

/**
Logs entry into the current function through the global logger.

```
fn transfer() {
    loglane::trace_in!();
    // ...
    loglane::trace_out!();
}
# transfer();
```
*/
#[macro_export]
macro_rules! trace_in {
    () => {
        $crate::global_logger().trace_in($crate::call_site!(), ::std::option::Option::None)
    };
    (mode = $mode:expr) => {
        $crate::global_logger().trace_in($crate::call_site!(), ::std::option::Option::Some($mode))
    };
}

/// Logs exit from the current function through the global logger.
#[macro_export]
macro_rules! trace_out {
    () => {
        $crate::global_logger().trace_out($crate::call_site!(), ::std::option::Option::None)
    };
    (mode = $mode:expr) => {
        $crate::global_logger().trace_out($crate::call_site!(), ::std::option::Option::Some($mode))
    };
}
