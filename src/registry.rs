// SPDX-License-Identifier: MIT OR Apache-2.0

//! The mode gate.
//!
//! [`ModeRegistry`] answers one question: should an event raised at a given
//! [`Mode`] be printed?  It combines two sources of truth:
//!
//! 1. A **depth ceiling**.  When set, a mode prints iff its level is at or
//!    below the ceiling, and nothing else is consulted.
//! 2. An **enabled mapping** from mode name to on/off, consulted only when no
//!    ceiling is set.  Modes absent from the mapping are silenced.
//!
//! ```
//! use loglane::{Mode, ModeRegistry};
//!
//! let mut registry = ModeRegistry::new();
//! registry.enable(Mode::ESSENTIAL);
//! assert!(registry.should_print(&Mode::ESSENTIAL));
//! assert!(!registry.should_print(&Mode::DEBUGGING));
//!
//! registry.set_depth_ceiling(9);
//! assert!(registry.should_print(&Mode::DEBUGGING));
//! ```

use crate::config::ConfigError;
use crate::mode::Mode;
use std::collections::HashMap;

/**
What happened when a registry was configured from a levels file.
*/
#[derive(Debug)]
pub enum ConfigOutcome {
    /// The file was read; this many modes were enabled from it.
    Loaded(usize),
    /// The file could not be used; the default ladder was enabled instead.
    Fallback(ConfigError),
}

impl ConfigOutcome {
    pub fn is_loaded(&self) -> bool {
        matches!(self, ConfigOutcome::Loaded(_))
    }
}

#[derive(Debug, Clone)]
pub struct ModeRegistry {
    enabled: HashMap<Mode, bool>,
    depth_ceiling: Option<u32>,
}

impl Default for ModeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ModeRegistry {
    /// A registry with only the catch-all mode enabled and no ceiling.
    pub fn new() -> Self {
        let mut registry = Self {
            enabled: HashMap::new(),
            depth_ceiling: None,
        };
        registry.enable(Mode::PRINT_ALL);
        registry
    }

    /**
    Enables `mode`.

    If a mode with the same name is already registered only its switch
    changes; the registered mode, and therefore its level, is kept.
    */
    pub fn enable(&mut self, mode: Mode) {
        self.set(mode, true);
    }

    /// Disables `mode`.  Same upsert rules as [`Self::enable`].
    pub fn disable(&mut self, mode: Mode) {
        self.set(mode, false);
    }

    fn set(&mut self, mode: Mode, on: bool) {
        *self.enabled.entry(mode).or_insert(on) = on;
    }

    /**
    Sets the depth ceiling.  A negative value removes it.
    */
    pub fn set_depth_ceiling(&mut self, ceiling: i64) {
        self.depth_ceiling = u32::try_from(ceiling).ok();
    }

    pub fn depth_ceiling(&self) -> Option<u32> {
        self.depth_ceiling
    }

    pub fn should_print(&self, mode: &Mode) -> bool {
        if let Some(ceiling) = self.depth_ceiling {
            return mode.level() <= ceiling;
        }
        self.enabled.get(mode.name()).copied().unwrap_or(false)
    }

    /**
    Finds the registered mode called `name`.

    Callers often hold a mode built with [`Mode::named`], whose level is 0.
    Resolving it yields the registered instance with its real level.
    */
    pub fn resolve(&self, name: &str) -> Option<Mode> {
        self.enabled.get_key_value(name).map(|(mode, _)| mode.clone())
    }

    pub fn is_registered(&self, name: &str) -> bool {
        self.enabled.contains_key(name)
    }

    /// Registered modes with their switches, in no particular order.
    pub fn modes(&self) -> impl Iterator<Item = (&Mode, bool)> {
        self.enabled.iter().map(|(mode, on)| (mode, *on))
    }

    /// Enables [`Mode::DEFAULT_LADDER`].
    pub fn enable_default_ladder(&mut self) {
        for mode in Mode::DEFAULT_LADDER {
            self.enable(mode);
        }
    }

    /**
    Applies the result of loading a levels file.

    Loaded modes are enabled.  On failure the default ladder is enabled
    instead.  The catch-all mode is enabled either way.
    */
    pub fn apply_config(&mut self, loaded: Result<Vec<Mode>, ConfigError>) -> ConfigOutcome {
        self.enable(Mode::PRINT_ALL);
        match loaded {
            Ok(modes) => {
                let count = modes.len();
                for mode in modes {
                    self.enable(mode);
                }
                ConfigOutcome::Loaded(count)
            }
            Err(error) => {
                self.enable_default_ladder();
                ConfigOutcome::Fallback(error)
            }
        }
    }

    /**
    Enables the default ladder until a background load settles.

    Returns each ladder mode's prior switch, `None` if it wasn't registered,
    for [`Self::settle_loaded`].
    */
    pub(crate) fn enable_provisional_ladder(&mut self) -> Vec<(Mode, Option<bool>)> {
        self.enable(Mode::PRINT_ALL);
        let previous = Mode::DEFAULT_LADDER
            .into_iter()
            .map(|mode| {
                let was = self.enabled.get(mode.name()).copied();
                (mode, was)
            })
            .collect();
        self.enable_default_ladder();
        previous
    }

    /**
    Withdraws a provisional ladder and enables `modes`.

    Ladder modes go back to their switch from before
    [`Self::enable_provisional_ladder`]; every other mode is left alone.
    Returns how many modes were loaded.
    */
    pub(crate) fn settle_loaded(
        &mut self,
        previous: Vec<(Mode, Option<bool>)>,
        modes: Vec<Mode>,
    ) -> usize {
        for (mode, was) in previous {
            match was {
                Some(on) => self.set(mode, on),
                None => {
                    self.enabled.remove(mode.name());
                }
            }
        }
        self.enable(Mode::PRINT_ALL);
        let count = modes.len();
        for mode in modes {
            self.enable(mode);
        }
        count
    }
}
