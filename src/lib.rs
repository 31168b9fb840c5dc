//! sitelog: site-survey record extraction from chat logs.
//!
//! Reads human-authored survey logs (chat exports mixing timestamps, notes
//! and raw measurement dumps) and emits one record per complete measurement
//! line: site id, latitude, longitude, angle, distance and building.
//!
//! # Architecture
//!
//! ```text
//!                 ┌──► sitelog parse  (stdout JSON)
//! sitelog-core ───┤
//!                 └──► sitelog-server (POST /upload)
//! ```
//!
//! The extraction engine lives in [`sitelog_core`]; this crate only adds the
//! command line and re-exports the engine for integration tests.

pub mod cli;

pub use sitelog_core::{parse, config, Extractor, Record, SurveyParser, WithFallback, NO_BUILDING};
