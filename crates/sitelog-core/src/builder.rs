//! Record builder: the stateful second pass.
//!
//! Tracks the current [`SiteContext`] and turns each logical data line into
//! at most one [`Record`]. Only identifier lines move the context:
//!
//! ```text
//!            identifier line                 identifier line
//! Unset ─────────────────────────► Site(id) ───────────────────► Site(id')
//!   │ data line: ignored             │ data line: maybe emit, context unchanged
//! ```

use std::sync::LazyLock;

use regex::Regex;

use crate::resolver::IdentifierResolver;
use crate::rules::RuleTable;
use crate::types::{IdentifierMap, Record, SiteContext};

/// Optional uppercase letter followed by 3–4 digits, alone on the line.
static SHORT_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]?[0-9]{3,4}$").expect("short id regex is valid"));

/// What a logical line turned out to be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// The line names a site; carries the resolved identifier.
    Identifier(String),
    Data,
}

/// Borrowing view over one document's id map and the shared rules.
#[derive(Debug)]
pub struct RecordBuilder<'a> {
    ids: &'a IdentifierMap,
    resolver: &'a IdentifierResolver,
    rules: &'a RuleTable,
}

impl<'a> RecordBuilder<'a> {
    pub fn new(ids: &'a IdentifierMap, resolver: &'a IdentifierResolver, rules: &'a RuleTable) -> Self {
        Self { ids, resolver, rules }
    }

    /// Classify a logical line. Short ids resolve through the map and fall
    /// back to the bare token; long forms are taken as they are.
    pub fn classify(&self, line: &str) -> LineKind {
        let line = line.trim();
        if SHORT_ID.is_match(line) {
            let id = self.ids.get(line).unwrap_or(line);
            return LineKind::Identifier(id.to_string());
        }
        match self.resolver.declaration(line) {
            Some((long, _)) => LineKind::Identifier(long.to_string()),
            None => LineKind::Data,
        }
    }

    /// Feed one logical line through the state machine.
    pub fn step(&self, context: &mut SiteContext, line: &str) -> Option<Record> {
        match self.classify(line) {
            LineKind::Identifier(id) => {
                tracing::debug!(from = %context, to = %id, "site context changed");
                *context = SiteContext::Site(id);
                None
            }
            LineKind::Data => {
                let site_id = context.site_id()?;
                let record = self.rules.extract(line).into_record(site_id);
                if record.is_none() {
                    tracing::debug!(site = site_id, line, "data line missing mandatory fields");
                }
                record
            }
        }
    }
}
