//! Line normalizer: turns raw physical lines into logical lines.
//!
//! Rules, applied in order to each raw line:
//!
//! 1. Strip the chat timestamp/sender prefix (`12/03/24, 10:15 - Titli: `)
//!    and surrounding whitespace.
//! 2. Drop empty lines and media placeholders without touching state.
//! 3. If a fragment is pending, emit `fragment + " " + line`.
//! 4. Otherwise, if the line ends in a lone two-integer-digit decimal
//!    (`22.601152`), keep it as the pending fragment: the value continues on
//!    the next line. This holds for a complete pair too (`22.601152
//!    88.431620`), whose angle and distance then come from the next line.
//! 5. Otherwise emit the stripped line.

use regex::Regex;

use crate::config::ParserConfig;
use crate::error::Error;

/// At most one pending fragment awaiting its continuation line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineBuffer {
    pending: Option<String>,
}

impl LineBuffer {
    pub fn pending(&self) -> Option<&str> {
        self.pending.as_deref()
    }

    /// Remove and return the pending fragment.
    pub fn take(&mut self) -> Option<String> {
        self.pending.take()
    }
}

/// Stateless rule set; the fragment state lives in the caller's [`LineBuffer`].
#[derive(Debug, Clone)]
pub struct LineNormalizer {
    chat_prefix: Regex,
    media_markers: Vec<String>,
    truncated: Regex,
}

impl LineNormalizer {
    pub fn new(config: &ParserConfig) -> Result<Self, Error> {
        let chat_prefix =
            Regex::new(&config.chat_prefix_pattern).map_err(|source| Error::InvalidPattern {
                name: "chat prefix",
                source,
            })?;
        Ok(Self {
            chat_prefix,
            media_markers: config.media_markers.clone(),
            truncated: Regex::new(r"(?:^|\s)[0-9]{2}\.[0-9]+$").expect("truncation regex is valid"),
        })
    }

    /// Rule 1: remove the first chat-prefix match and trim.
    pub fn strip<'a>(&self, raw: &'a str) -> std::borrow::Cow<'a, str> {
        match self.chat_prefix.find(raw) {
            Some(m) if !m.is_empty() => {
                let mut out = String::with_capacity(raw.len() - m.len());
                out.push_str(&raw[..m.start()]);
                out.push_str(&raw[m.end()..]);
                std::borrow::Cow::Owned(out.trim().to_string())
            }
            _ => std::borrow::Cow::Borrowed(raw.trim()),
        }
    }

    fn is_media(&self, line: &str) -> bool {
        self.media_markers.iter().any(|m| !m.is_empty() && line.starts_with(m.as_str()))
    }

    /// True when `line` ends in a lone two-integer-digit decimal.
    pub fn is_truncated(&self, line: &str) -> bool {
        self.truncated.is_match(line)
    }

    /// Apply rules 1–5 to one raw line. Returns the logical line, if any.
    pub fn normalize(&self, raw: &str, buffer: &mut LineBuffer) -> Option<String> {
        let line = self.strip(raw);
        if line.is_empty() || self.is_media(&line) {
            return None;
        }

        if let Some(fragment) = buffer.take() {
            return Some(format!("{fragment} {line}"));
        }

        if self.is_truncated(&line) {
            tracing::trace!(line = %line, "holding truncated coordinate for the next line");
            buffer.pending = Some(line.into_owned());
            return None;
        }

        Some(line.into_owned())
    }
}
