//SPDX-License-Identifier: MIT OR Apache-2.0
/*!
# loglane

loglane is a logging facade built around verbosity *modes* and rule-based formatting.

# The problem

Severity and verbosity are different questions.  "Is this an error?" is about
the event.  "Does anyone want to see it right now?" is about the person running
the program.  Most facades fold both into one level enum, so turning on detail
for one subsystem means turning it on for everything at that severity.

loglane keeps them apart.  Every event has a **category** (what it is) and a
**mode** (how much detail it represents), and the logger gates on the mode.

# Modes

A [`Mode`] is a name and a level.  The standard ladder is:

| Name       | Level |
|------------|-------|
| Essential  | 1     |
| Advanced   | 3     |
| Tracing    | 5     |
| Diagnostic | 7     |
| Debugging  | 9     |

plus the catch-all mode `AllMode` (level 0), which is always enabled.  Modes
are switched on and off by name, or all at once with a depth ceiling:

```
use loglane::{InMemorySink, Logger, Mode};
use std::sync::Arc;

let sink = Arc::new(InMemorySink::new());
let logger = Logger::new(sink.clone());
logger.enable(Mode::ESSENTIAL);

assert!(logger.inform("printed", Some(Mode::ESSENTIAL)));
assert!(!logger.inform("silenced", Some(Mode::DEBUGGING)));

// everything up to level 9 prints, whatever was enabled
logger.set_depth_ceiling(9);
assert!(logger.inform("printed too", Some(Mode::DEBUGGING)));
```

Modes that were never enabled are silenced.  Modes compare equal by name
alone; see [`Mode`].

# Categories and formatting

The category is a string: one of Message, Warning, Information, Error,
Successful, System, or anything else (which counts as Other).  A
[`RuleFormatter`] rewrites accepted events through an ordered list of
predicate/transform rules.  The console rules mark each category:

```text
[14:03:27] starting          -> [>] [14:03:27] starting
[14:03:28] copied 3 files    -> [O] [14:03:28] copied 3 files
[14:03:28] checksum mismatch -> [X] [14:03:28] checksum mismatch
```

# Configuration

Which modes are enabled usually comes from a levels file, loaded explicitly
after the logger is built; see [`config`] and [`Logger::configure`].  If the
file is missing or malformed the default ladder is enabled.

# Output

Formatted events go to a [`Sink`].  [`ConsoleSink`] prints colored lines to
stdout; [`InMemorySink`] captures them.  Sink failures are swallowed: logging
never fails the caller.

# Multithreading

A [`Logger`] is `Send + Sync`.  The [`global_logger`] and the logging macros
([`inform!`], [`error!`], ...) give the whole process one shared logger.
*/

mod category;
pub mod config;
mod console_sink;
mod formatter;
pub mod global_logger;
mod inmemory_sink;
mod localizer;
mod log_event;
mod logger;
mod macros;
mod message;
mod mode;
mod registry;
mod sink;
mod spinlock;

pub use category::Category;
pub use config::{ConfigError, LoggerConfig};
pub use console_sink::{ConsoleSink, DEFAULT_MAX_OUTPUT_LENGTH};
pub use formatter::{CONSOLE_PREFIXES, FormatRule, PrefixRule, RuleFormatter};
pub use global_logger::{global_logger, set_global_logger};
pub use inmemory_sink::InMemorySink;
pub use localizer::{Localizer, MapLocalizer};
pub use log_event::{Clock, LogEvent};
pub use logger::{CAUSED_BY_KEY, CallSite, Logger, TRACE_IN_KEY, TRACE_OUT_KEY};
pub use message::Message;
pub use mode::{Mode, PRINT_ALL_MODE_NAME};
pub use registry::{ConfigOutcome, ModeRegistry};
pub use sink::Sink;
