// SPDX-License-Identifier: MIT OR Apache-2.0

//! Localizable message text.
//!
//! A [`Message`] is a lookup key plus positional arguments.  A
//! [`Localizer`](crate::Localizer) may turn it into a display string for some
//! language; when nothing resolves it, [`Message::render`] uses the key itself
//! as the template.  Placeholders are `{0}`, `{1}`, and so on:
//!
//! ```
//! use loglane::Message;
//! let msg = Message::new("copied {0} files to {1}").arg(3).arg("/tmp");
//! assert_eq!(msg.render(), "copied 3 files to /tmp");
//! ```

use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Message {
    key: String,
    args: Vec<String>,
}

impl Message {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            args: Vec::new(),
        }
    }

    /// Appends a positional argument.
    pub fn arg(mut self, arg: impl Display) -> Self {
        self.args.push(arg.to_string());
        self
    }

    pub fn with_args<I, A>(key: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Display,
    {
        Self {
            key: key.into(),
            args: args.into_iter().map(|a| a.to_string()).collect(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /**
    Renders the key as a template, substituting `{n}` with the n-th argument.

    Placeholders without a matching argument are left as written.
    */
    pub fn render(&self) -> String {
        render_template(&self.key, &self.args)
    }
}

/**
Substitutes `{n}` placeholders in `template` with `args[n]`.

Shared with [`MapLocalizer`](crate::MapLocalizer), whose templates use the same syntax.
*/
pub(crate) fn render_template(template: &str, args: &[String]) -> String {
    if args.is_empty() {
        return template.to_string();
    }
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let substituted = after.find('}').and_then(|close| {
            let index: usize = after[..close].parse().ok()?;
            let arg = args.get(index)?;
            Some((arg, close))
        });
        match substituted {
            Some((arg, close)) => {
                out.push_str(arg);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

impl From<&str> for Message {
    fn from(key: &str) -> Self {
        Message::new(key)
    }
}

impl From<String> for Message {
    fn from(key: String) -> Self {
        Message::new(key)
    }
}

impl Display for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}
