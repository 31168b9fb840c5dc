//! sitelog-core: site-survey record extraction from chat logs.
//!
//! Turns a human-authored log (chat export, field notes, pasted measurement
//! dumps) into an ordered list of [`Record`] values.
//!
//! # Architecture
//!
//! ```text
//! text ──► IdentifierResolver ──► IdentifierMap
//!   │                                  │
//!   └──► LineNormalizer ──► RecordBuilder ──► Vec<Record>
//! ```
//!
//! Two independent passes over the same lines. The first builds the
//! short-to-long id map; the second normalises lines, tracks the current
//! site and applies the [`RuleTable`]. All scan state is local to one
//! [`SurveyParser::parse`] call, so a parser can be shared freely across
//! threads.
//!
//! # Other backends
//!
//! Anything implementing [`Extractor`] can stand in for the rule-based
//! parser. A backend whose answer is a JSON array of records (a language
//! model behind an HTTP API, say) decodes it with [`records_from_json`], and
//! callers wrap the backend in [`WithFallback`].

pub mod builder;
pub mod config;
pub mod error;
pub mod extractor;
pub mod normalizer;
pub mod resolver;
pub mod rules;
pub mod types;

use std::sync::LazyLock;

pub use builder::{LineKind, RecordBuilder};
pub use error::{Error, ExtractError};
pub use extractor::{records_from_json, Extractor, WithFallback};
pub use normalizer::{LineBuffer, LineNormalizer};
pub use resolver::IdentifierResolver;
pub use rules::{Extraction, Field, FieldRule, RuleTable};
pub use types::{IdentifierMap, Record, SiteContext, NO_BUILDING};

use crate::config::ParserConfig;

/// Compiled rule-based extractor for one [`ParserConfig`].
#[derive(Debug, Clone)]
pub struct SurveyParser {
    resolver: IdentifierResolver,
    normalizer: LineNormalizer,
    rules: RuleTable,
}

/// Second-pass state threaded through the fold over lines.
#[derive(Debug, Default)]
struct ScanState {
    context: SiteContext,
    buffer: LineBuffer,
    records: Vec<Record>,
}

impl SurveyParser {
    pub fn new(config: &ParserConfig) -> Result<Self, Error> {
        Ok(Self {
            resolver: IdentifierResolver::new(&config.site_prefix)?,
            normalizer: LineNormalizer::new(config)?,
            rules: RuleTable::standard(),
        })
    }

    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    /// Extract every complete record from `text`, in document order.
    ///
    /// Never fails: lines that match nothing are skipped.
    pub fn parse(&self, text: &str) -> Vec<Record> {
        let ids = self.resolver.resolve(text.lines());
        let builder = RecordBuilder::new(&ids, &self.resolver, &self.rules);

        let mut state = text.lines().fold(ScanState::default(), |mut state, raw| {
            if let Some(line) = self.normalizer.normalize(raw, &mut state.buffer) {
                if let Some(record) = builder.step(&mut state.context, &line) {
                    state.records.push(record);
                }
            }
            state
        });

        if let Some(fragment) = state.buffer.take() {
            tracing::debug!(fragment = %fragment, "dropping unterminated fragment at end of document");
        }
        tracing::debug!(
            declared_sites = ids.len(),
            records = state.records.len(),
            "document parsed"
        );
        state.records
    }
}

impl Extractor for SurveyParser {
    fn name(&self) -> &'static str {
        "rules"
    }

    fn extract(&self, text: &str) -> Result<Vec<Record>, ExtractError> {
        Ok(self.parse(text))
    }
}

static DEFAULT_PARSER: LazyLock<SurveyParser> = LazyLock::new(|| {
    SurveyParser::new(&ParserConfig::default()).expect("built-in parser config must compile")
});

/// Parse `text` with the built-in configuration.
pub fn parse(text: &str) -> Vec<Record> {
    DEFAULT_PARSER.parse(text)
}
