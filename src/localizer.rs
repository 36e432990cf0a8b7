// SPDX-License-Identifier: MIT OR Apache-2.0

//! Message localization.
//!
//! A [`Logger`](crate::Logger) with a [`Localizer`] attached resolves every
//! accepted event's [`Message`] for its configured language before formatting.
//! If nothing resolves, the message is left as it was.

use crate::message::{Message, render_template};
use std::collections::HashMap;
use std::fmt::Debug;

pub trait Localizer: Debug + Send + Sync {
    /**
    Resolves `message` into display text for `language`.

    When `allow_fallback` is set the localizer may answer from another
    language it knows.  Returns `None` when the message is unknown.
    */
    fn resolve(&self, language: &str, message: &Message, allow_fallback: bool) -> Option<String>;
}

/**
A localizer backed by an in-memory table of templates.

Templates use the same `{0}` placeholders as [`Message::render`].

```
use loglane::{Localizer, MapLocalizer, Message};

let mut localizer = MapLocalizer::new("en");
localizer.insert("en", "greeting", "hello {0}");
localizer.insert("de", "greeting", "hallo {0}");

let msg = Message::new("greeting").arg("Ada");
assert_eq!(localizer.resolve("de", &msg, false).as_deref(), Some("hallo Ada"));
assert_eq!(localizer.resolve("fr", &msg, false), None);
assert_eq!(localizer.resolve("fr", &msg, true).as_deref(), Some("hello Ada"));
```
*/
#[derive(Debug, Clone, Default)]
pub struct MapLocalizer {
    fallback_language: String,
    templates: HashMap<String, HashMap<String, String>>,
}

impl MapLocalizer {
    pub fn new(fallback_language: impl Into<String>) -> Self {
        Self {
            fallback_language: fallback_language.into(),
            templates: HashMap::new(),
        }
    }

    pub fn insert(
        &mut self,
        language: impl Into<String>,
        key: impl Into<String>,
        template: impl Into<String>,
    ) {
        self.templates
            .entry(language.into())
            .or_default()
            .insert(key.into(), template.into());
    }

    fn lookup(&self, language: &str, key: &str) -> Option<&str> {
        self.templates
            .get(language)
            .and_then(|table| table.get(key))
            .map(String::as_str)
    }
}

impl Localizer for MapLocalizer {
    fn resolve(&self, language: &str, message: &Message, allow_fallback: bool) -> Option<String> {
        let template = self.lookup(language, message.key()).or_else(|| {
            allow_fallback
                .then(|| self.lookup(&self.fallback_language, message.key()))
                .flatten()
        })?;
        Some(render_template(template, message.args()))
    }
}
