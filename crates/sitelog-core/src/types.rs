//! Core types for sitelog-core.
//!
//! This module defines the data shared across the extraction stages: the
//! emitted [`Record`], the short-to-long [`IdentifierMap`], and the
//! [`SiteContext`] that attributes data lines to a site.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Building value used when a data line carries no building code.
pub const NO_BUILDING: &str = "N/A";

/// Site identifier carried by the record returned when an extractor fails.
pub const ERROR_SITE_ID: &str = "ERROR";

/// One fully-qualified measurement tuple extracted from a logical line.
///
/// Every field is kept as the text that matched, so `"022.50"` and `"22.5"`
/// are different latitudes. Serialises with the upload endpoint's key set
/// (`siteId`, `lat`, `long`, …); deserialisation also accepts the
/// `latitude`/`longitude` keys produced by alternate extractors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "siteId")]
    pub site_id: String,
    #[serde(rename = "lat", alias = "latitude")]
    pub latitude: String,
    #[serde(rename = "long", alias = "longitude")]
    pub longitude: String,
    pub angle: String,
    pub distance: String,
    /// Uppercased building code (`B1`), or [`NO_BUILDING`].
    #[serde(default = "default_building")]
    pub building: String,
}

fn default_building() -> String {
    NO_BUILDING.to_string()
}

impl Record {
    /// The single record an extractor boundary returns in place of an error.
    pub fn error_sentinel() -> Self {
        Self {
            site_id: ERROR_SITE_ID.to_string(),
            latitude: NO_BUILDING.to_string(),
            longitude: NO_BUILDING.to_string(),
            angle: NO_BUILDING.to_string(),
            distance: NO_BUILDING.to_string(),
            building: NO_BUILDING.to_string(),
        }
    }

    pub fn is_error_sentinel(&self) -> bool {
        self.site_id == ERROR_SITE_ID
    }
}

/// Short site code → long-form declaration, built once per document.
///
/// Read-only once the resolver pass has finished.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentifierMap {
    entries: HashMap<String, String>,
}

impl IdentifierMap {
    /// Record a declaration. A later declaration of the same suffix wins.
    pub(crate) fn declare(&mut self, short: &str, long: &str) {
        self.entries.insert(short.to_string(), long.to_string());
    }

    pub fn get(&self, short: &str) -> Option<&str> {
        self.entries.get(short).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The site every data line is attributed to until the next identifier line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SiteContext {
    /// No identifier line seen yet; data lines are ignored.
    #[default]
    Unset,
    Site(String),
}

impl SiteContext {
    pub fn site_id(&self) -> Option<&str> {
        match self {
            SiteContext::Unset => None,
            SiteContext::Site(id) => Some(id),
        }
    }
}

impl std::fmt::Display for SiteContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SiteContext::Unset => write!(f, "<none>"),
            SiteContext::Site(id) => write!(f, "{id}"),
        }
    }
}
