// SPDX-License-Identifier: MIT OR Apache-2.0

//! Logger configuration and the levels file loader.
//!
//! # The levels file
//!
//! A levels file lists the modes a logger enables, one `name<delimiter>level`
//! pair per line.  The default delimiter is `$`:
//!
//! ```text
//! # name$level
//! Essential$1
//! Network$4
//! Debugging$9
//! ```
//!
//! Blank lines and lines starting with `#` are ignored.  Any other line that
//! cannot be parsed fails the whole load; the logger then falls back to
//! [`Mode::DEFAULT_LADDER`].

use crate::log_event::Clock;
use crate::mode::Mode;
use std::num::ParseIntError;
use std::path::{Path, PathBuf};

pub const DEFAULT_LEVELS_PATH: &str = "Resources/Logging/levels.txt";
pub const DEFAULT_DELIMITER: char = '$';
pub const DEFAULT_LANGUAGE: &str = "en";

/// Reasons a levels file could not be loaded.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read levels file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("line {line}: expected `name{delimiter}level`")]
    MissingDelimiter { line: usize, delimiter: char },
    #[error("line {line}: mode name is empty")]
    EmptyName { line: usize },
    #[error("line {line}: level `{value}` of mode `{name}` is not a non-negative integer")]
    MalformedLevel {
        line: usize,
        name: String,
        value: String,
        #[source]
        source: ParseIntError,
    },
}

/**
Settings a [`Logger`](crate::Logger) is built with.

```
use loglane::{Clock, LoggerConfig, Mode};

let config = LoggerConfig::default()
    .with_levels_path("conf/levels.txt")
    .with_delimiter('=')
    .with_clock(Clock::Utc)
    .with_default_mode(Mode::ESSENTIAL);
assert_eq!(config.delimiter, '=');
```
*/
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerConfig {
    /// Where [`Logger::configure`](crate::Logger::configure) reads modes from.
    pub levels_path: PathBuf,
    pub delimiter: char,
    pub clock: Clock,
    /// Mode for calls that don't name one.  `None` means the catch-all mode.
    pub default_mode: Option<Mode>,
    /// Language passed to the localizer.
    pub language: String,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            levels_path: PathBuf::from(DEFAULT_LEVELS_PATH),
            delimiter: DEFAULT_DELIMITER,
            clock: Clock::default(),
            default_mode: None,
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

impl LoggerConfig {
    pub fn with_levels_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.levels_path = path.into();
        self
    }

    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_default_mode(mut self, mode: Mode) -> Self {
        self.default_mode = Some(mode);
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// The mode used when a call supplies none.
    pub fn fallback_mode(&self) -> Mode {
        self.default_mode.clone().unwrap_or(Mode::PRINT_ALL)
    }
}

/**
Reads and parses a levels file.
*/
pub fn load_modes(path: &Path, delimiter: char) -> Result<Vec<Mode>, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_modes(&text, delimiter)
}

/**
Parses levels file contents.  Line numbers in errors are 1-based.
*/
pub fn parse_modes(text: &str, delimiter: char) -> Result<Vec<Mode>, ConfigError> {
    let mut modes = Vec::new();
    for (index, raw) in text.lines().enumerate() {
        let line = index + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let (name, value) = trimmed
            .split_once(delimiter)
            .ok_or(ConfigError::MissingDelimiter { line, delimiter })?;
        let name = name.trim();
        let value = value.trim();
        if name.is_empty() {
            return Err(ConfigError::EmptyName { line });
        }
        let level: u32 = value.parse().map_err(|source| ConfigError::MalformedLevel {
            line,
            name: name.to_string(),
            value: value.to_string(),
            source,
        })?;
        modes.push(Mode::new(name.to_string(), level));
    }
    Ok(modes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_pairs_and_skips_comments() {
        let modes = parse_modes("# header\n\nEssential$1\n  Network $ 4  \r\n", '$').unwrap();
        assert_eq!(modes.len(), 2);
        assert_eq!(modes[0], Mode::ESSENTIAL);
        assert_eq!(modes[0].level(), 1);
        assert_eq!(modes[1].name(), "Network");
        assert_eq!(modes[1].level(), 4);
    }

    #[test]
    fn custom_delimiter() {
        let modes = parse_modes("Verbose=6", '=').unwrap();
        assert_eq!(modes[0].level(), 6);
        assert!(matches!(
            parse_modes("Verbose=6", '$'),
            Err(ConfigError::MissingDelimiter { line: 1, delimiter: '$' })
        ));
    }

    #[test]
    fn malformed_level_fails_whole_load() {
        let err = parse_modes("Essential$1\nAdvanced$three\n", '$').unwrap_err();
        match err {
            ConfigError::MalformedLevel { line, name, value, .. } => {
                assert_eq!(line, 2);
                assert_eq!(name, "Advanced");
                assert_eq!(value, "three");
            }
            other => panic!("unexpected error {other:?}"),
        }
        assert!(matches!(
            parse_modes("Essential$-1", '$'),
            Err(ConfigError::MalformedLevel { .. })
        ));
    }

    #[test]
    fn empty_name() {
        assert!(matches!(
            parse_modes("$3", '$'),
            Err(ConfigError::EmptyName { line: 1 })
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_modes(Path::new("definitely/not/here/levels.txt"), '$').unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("definitely/not/here"));
    }

    #[test]
    fn fallback_mode() {
        assert_eq!(LoggerConfig::default().fallback_mode(), Mode::PRINT_ALL);
        let config = LoggerConfig::default().with_default_mode(Mode::ADVANCED);
        assert_eq!(config.fallback_mode().level(), 3);
    }
}
