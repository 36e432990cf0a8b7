// SPDX-License-Identifier: MIT OR Apache-2.0
use crate::category::Category;
use crate::log_event::LogEvent;
use crate::sink::Sink;
use colored::{Color, Colorize};

/// Default limit on printed characters per line.
pub const DEFAULT_MAX_OUTPUT_LENGTH: usize = 128;

/**
A reference sink that prints to stdout, one colored line per event.

Lines longer than [`max_output_length`](Self::max_output_length) characters
are cut off.
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConsoleSink {
    max_output_length: usize,
    colored: bool,
}

// ============================================================================
// BOILERPLATE TRAIT IMPLEMENTATIONS
// ============================================================================
//
// - Debug/Clone/Copy: derived, two plain fields
// - PartialEq/Eq/Hash: derived, sinks with equal settings print identically
// - Default: 128 characters, colored
// - Display: NOT implemented - no meaningful string representation

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleSink {
    pub const fn new() -> Self {
        Self {
            max_output_length: DEFAULT_MAX_OUTPUT_LENGTH,
            colored: true,
        }
    }

    pub const fn with_max_output_length(mut self, max_output_length: usize) -> Self {
        self.max_output_length = max_output_length;
        self
    }

    pub const fn with_colors(mut self, colored: bool) -> Self {
        self.colored = colored;
        self
    }

    pub fn max_output_length(&self) -> usize {
        self.max_output_length
    }

    /// The foreground color used for `category`.
    pub fn color_for(category: Category) -> Color {
        match category {
            Category::Message => Color::White,
            Category::Warning => Color::Yellow,
            Category::Error => Color::Red,
            Category::Successful => Color::Green,
            Category::Information => Color::Cyan,
            Category::System | Category::Other => Color::BrightBlack,
        }
    }

    /// The line as it will be printed, without color.
    pub fn render(&self, event: &LogEvent) -> String {
        event.text().chars().take(self.max_output_length).collect()
    }
}

impl Sink for ConsoleSink {
    fn write(&self, event: &LogEvent) -> std::io::Result<()> {
        let line = self.render(event);
        #[cfg(not(target_arch = "wasm32"))]
        {
            use std::io::Write;
            let mut lock = std::io::stdout().lock();
            if self.colored {
                writeln!(lock, "{}", line.as_str().color(Self::color_for(event.category())))?;
            } else {
                writeln!(lock, "{}", line)?;
            }
        }
        #[cfg(target_arch = "wasm32")]
        {
            let value = wasm_bindgen::JsValue::from_str(&line);
            match event.category() {
                Category::Error => web_sys::console::error_1(&value),
                Category::Warning => web_sys::console::warn_1(&value),
                Category::Information => web_sys::console::info_1(&value),
                Category::System => web_sys::console::debug_1(&value),
                _ => web_sys::console::log_1(&value),
            }
        }
        Ok(())
    }

    fn flush(&self) -> std::io::Result<()> {
        #[cfg(not(target_arch = "wasm32"))]
        {
            use std::io::Write;
            std::io::stdout().flush()?;
        }
        Ok(())
    }
}
