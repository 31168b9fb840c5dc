//! Error types for sitelog-core.
//!
//! Parsing itself never fails: malformed lines are skipped. Errors only
//! arise while building a parser from configuration, or from an alternate
//! [`Extractor`](crate::extractor::Extractor) backend.

use thiserror::Error;

/// Errors raised while loading configuration or compiling a parser.
#[derive(Debug, Error)]
pub enum Error {
    /// A configured regular expression did not compile.
    #[error("invalid {name} pattern: {source}")]
    InvalidPattern {
        name: &'static str,
        #[source]
        source: regex::Error,
    },

    /// The long-form site prefix is empty, which would make every word a
    /// declaration.
    #[error("site prefix must not be empty")]
    EmptySitePrefix,

    /// Layered configuration could not be built or deserialised.
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// The config file could not be created.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors an alternate extractor may report. [`WithFallback`](crate::extractor::WithFallback)
/// turns every one of these into a sentinel record.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The backend itself failed (unreachable, refused, timed out, …).
    #[error("extractor backend failed: {0}")]
    Backend(String),

    /// The backend answered with content that is not a JSON record array.
    #[error("extractor returned invalid output: {0}")]
    InvalidOutput(#[from] serde_json::Error),
}
