//! Extractor seam: the `text in, records out` contract.
//!
//! [`SurveyParser`](crate::SurveyParser) is the rule-based implementation and
//! never fails. Alternate backends (an LLM behind an HTTP API, say) implement
//! the same trait and may fail; callers wrap them in [`WithFallback`] so a
//! failure becomes a single sentinel record instead of an error.

use crate::error::ExtractError;
use crate::types::Record;

/// Anything that can turn a document into records.
pub trait Extractor: Send + Sync {
    /// Short backend name for logs.
    fn name(&self) -> &'static str;

    fn extract(&self, text: &str) -> Result<Vec<Record>, ExtractError>;
}

impl<E: Extractor + ?Sized> Extractor for Box<E> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn extract(&self, text: &str) -> Result<Vec<Record>, ExtractError> {
        (**self).extract(text)
    }
}

impl<E: Extractor + ?Sized> Extractor for std::sync::Arc<E> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn extract(&self, text: &str) -> Result<Vec<Record>, ExtractError> {
        (**self).extract(text)
    }
}

/// Boundary wrapper: any extractor error becomes `[Record::error_sentinel()]`.
#[derive(Debug, Clone)]
pub struct WithFallback<E> {
    inner: E,
}

impl<E: Extractor> WithFallback<E> {
    pub fn new(inner: E) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &E {
        &self.inner
    }

    /// Extract, converting a failure into the sentinel record.
    pub fn records(&self, text: &str) -> Vec<Record> {
        match self.inner.extract(text) {
            Ok(records) => records,
            Err(err) => {
                tracing::warn!(
                    backend = self.inner.name(),
                    error = %err,
                    "extractor failed; returning sentinel record"
                );
                vec![Record::error_sentinel()]
            }
        }
    }
}

/// Decode a backend's JSON answer into records.
///
/// Accepts either key set (`lat`/`long` or `latitude`/`longitude`) and
/// tolerates a surrounding markdown code fence, which chat-style models tend
/// to add.
pub fn records_from_json(body: &str) -> Result<Vec<Record>, ExtractError> {
    let body = body.trim();
    let body = body
        .strip_prefix("```json")
        .or_else(|| body.strip_prefix("```"))
        .and_then(|rest| rest.trim_end().strip_suffix("```"))
        .unwrap_or(body);
    Ok(serde_json::from_str(body.trim())?)
}
