// SPDX-License-Identifier: MIT OR Apache-2.0

//! Verbosity modes.
//!
//! A [`Mode`] names a verbosity tier and carries a numeric level, where higher
//! levels are more detailed.  Events are raised "at" a mode, and the
//! [`ModeRegistry`](crate::ModeRegistry) decides whether that mode is printed.
//!
//! # Equality
//!
//! Two modes are equal iff their *names* are equal.  The level does not take
//! part in equality or hashing:
//!
//! ```
//! use loglane::Mode;
//! assert_eq!(Mode::new("Tracing", 5), Mode::new("Tracing", 1));
//! assert_ne!(Mode::new("Tracing", 5), Mode::new("Debugging", 5));
//! ```
//!
//! This lets a caller refer to a registered mode by name alone
//! (see [`Mode::named`]) and have the registry restore its real level.

use std::borrow::{Borrow, Cow};
use std::fmt::Display;
use std::hash::{Hash, Hasher};

/// Reserved name of the catch-all mode.
pub const PRINT_ALL_MODE_NAME: &str = "AllMode";

/**
A named verbosity tier.

Modes are immutable once created.  Use the associated constants for the
standard ladder, [`Mode::new`] for ad hoc tiers, or one of the explicit
factories [`Mode::named`] and [`Mode::at_level`].
*/
#[derive(Debug, Clone)]
pub struct Mode {
    name: Cow<'static, str>,
    level: u32,
}

impl Mode {
    /// The catch-all mode.  Always enabled by a fresh registry.
    pub const PRINT_ALL: Mode = Mode::constant(PRINT_ALL_MODE_NAME, 0);
    pub const ESSENTIAL: Mode = Mode::constant("Essential", 1);
    pub const ADVANCED: Mode = Mode::constant("Advanced", 3);
    pub const TRACING: Mode = Mode::constant("Tracing", 5);
    pub const DIAGNOSTIC: Mode = Mode::constant("Diagnostic", 7);
    pub const DEBUGGING: Mode = Mode::constant("Debugging", 9);

    /**
    The ladder enabled when no levels file could be loaded.
    */
    pub const DEFAULT_LADDER: [Mode; 5] = [
        Mode::ESSENTIAL,
        Mode::ADVANCED,
        Mode::TRACING,
        Mode::DIAGNOSTIC,
        Mode::DEBUGGING,
    ];

    const fn constant(name: &'static str, level: u32) -> Self {
        Self {
            name: Cow::Borrowed(name),
            level,
        }
    }

    pub fn new(name: impl Into<Cow<'static, str>>, level: u32) -> Self {
        Self {
            name: name.into(),
            level,
        }
    }

    /**
    A mode that carries only a name; its level is 0.

    Use this to refer to an already registered mode.  [`crate::Logger::log`]
    resolves such a mode back to the registered instance before gating.
    */
    pub fn named(name: impl Into<Cow<'static, str>>) -> Self {
        Self::new(name, 0)
    }

    /// The catch-all mode, raised at `level`.
    pub fn at_level(level: u32) -> Self {
        Self::new(PRINT_ALL_MODE_NAME, level)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Whether this is the reserved catch-all mode (at any level).
    pub fn is_print_all(&self) -> bool {
        self.name == PRINT_ALL_MODE_NAME
    }
}

impl PartialEq for Mode {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Mode {}

// Must agree with `Borrow<str>`: hash the name exactly as `str` would.
impl Hash for Mode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name().hash(state);
    }
}

impl Borrow<str> for Mode {
    fn borrow(&self) -> &str {
        &self.name
    }
}

impl Default for Mode {
    fn default() -> Self {
        Mode::PRINT_ALL
    }
}

impl Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.level)
    }
}

/*
Boilerplate notes for Mode:

IMPLEMENTED:
- Debug/Clone: derived
- PartialEq/Eq/Hash: by name only, see module docs
- Borrow<str>: sound because Eq and Hash only look at the name; lets maps keyed by Mode be queried by &str
- Default: the catch-all mode
- Display: "Name (level)"

NOT IMPLEMENTED:
- Copy: the name may be owned
- Ord/PartialOrd: ordering by level would disagree with name-only equality
- From<&str>/From<u32>: use Mode::named / Mode::at_level so conversions stay visible
*/
