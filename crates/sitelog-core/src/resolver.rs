//! Identifier resolver: the first pass over a document.
//!
//! Collects every long-form site declaration (`I-KO-KLKT-ENB-0132` alone on
//! a line) into an [`IdentifierMap`] keyed by its suffix, so that a bare
//! `0132` further down can be expanded. The map is complete before the
//! record builder runs, which is what lets a short id resolve regardless of
//! where in the document its declaration sits.

use regex::Regex;

use crate::error::Error;
use crate::types::IdentifierMap;

/// Recognises long-form declarations for one configured site prefix.
#[derive(Debug, Clone)]
pub struct IdentifierResolver {
    declaration: Regex,
}

impl IdentifierResolver {
    pub fn new(site_prefix: &str) -> Result<Self, Error> {
        if site_prefix.is_empty() {
            return Err(Error::EmptySitePrefix);
        }
        let pattern = format!(r"^({}([A-Za-z0-9_]+))$", regex::escape(site_prefix));
        let declaration = Regex::new(&pattern).map_err(|source| Error::InvalidPattern {
            name: "site prefix",
            source,
        })?;
        Ok(Self { declaration })
    }

    /// Split a declaration line into `(long form, short form)`.
    ///
    /// The line is trimmed first; anything besides prefix and suffix on the
    /// line means it is not a declaration.
    pub fn declaration<'a>(&self, line: &'a str) -> Option<(&'a str, &'a str)> {
        let caps = self.declaration.captures(line.trim())?;
        let long = caps.get(1)?.as_str();
        let short = caps.get(2)?.as_str();
        Some((long, short))
    }

    /// Scan every line once and map each declared suffix to its long form.
    pub fn resolve<'a, I>(&self, lines: I) -> IdentifierMap
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut ids = IdentifierMap::default();
        for line in lines {
            if let Some((long, short)) = self.declaration(line) {
                if let Some(previous) = ids.get(short) {
                    tracing::debug!(short, previous, long, "site declared twice; keeping the later one");
                }
                ids.declare(short, long);
            }
        }
        ids
    }
}
