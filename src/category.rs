// SPDX-License-Identifier: MIT OR Apache-2.0
use std::fmt::Display;

/**
The semantic category of an event.

Events carry their category as a free-form string so callers may invent their
own; [`Category::classify`] maps any string onto this set.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    /// Plain output
    #[default]
    Message,
    /// Suspicious condition
    Warning,
    /// Supporting detail
    Information,
    /// Something failed
    Error,
    /// Something completed
    Successful,
    /// Emitted by the program's own machinery (tracing, debugging)
    System,
    /// Anything unrecognized
    Other,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Message,
        Category::Warning,
        Category::Information,
        Category::Error,
        Category::Successful,
        Category::System,
        Category::Other,
    ];

    /**
    Classifies a category string.

    Matching is exact and case-sensitive.  Every unrecognized string is [`Category::Other`].
    */
    pub fn classify(name: &str) -> Category {
        match name {
            "Message" => Category::Message,
            "Warning" => Category::Warning,
            "Information" => Category::Information,
            "Error" => Category::Error,
            "Successful" => Category::Successful,
            "System" => Category::System,
            _ => Category::Other,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Category::Message => "Message",
            Category::Warning => "Warning",
            Category::Information => "Information",
            Category::Error => "Error",
            Category::Successful => "Successful",
            Category::System => "System",
            Category::Other => "Other",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Category {
    fn from(name: &str) -> Self {
        Category::classify(name)
    }
}
