//! Test builders: ergonomic constructors for expected [`Record`] values.
//!
//! These builders are designed for readability in test assertions, not for
//! production use.

use sitelog_core::{Record, NO_BUILDING};

// ---------------------------------------------------------------------------
// RecordFixture
// ---------------------------------------------------------------------------

/// Fluent builder for expected records. Starts from the sample-scenario
/// measurement so a test only spells out what it cares about.
///
/// # Example
///
/// ```rust
/// let expected = RecordFixture::new("0150").angle("90").no_building().build();
/// ```
pub struct RecordFixture {
    site_id: String,
    latitude: String,
    longitude: String,
    angle: String,
    distance: String,
    building: String,
}

impl RecordFixture {
    pub fn new(site_id: impl Into<String>) -> Self {
        Self {
            site_id: site_id.into(),
            latitude: "22.601152".to_string(),
            longitude: "88.43162".to_string(),
            angle: "45".to_string(),
            distance: "120".to_string(),
            building: "B1".to_string(),
        }
    }

    pub fn coordinates(mut self, latitude: impl Into<String>, longitude: impl Into<String>) -> Self {
        self.latitude = latitude.into();
        self.longitude = longitude.into();
        self
    }

    pub fn angle(mut self, angle: impl Into<String>) -> Self {
        self.angle = angle.into();
        self
    }

    pub fn distance(mut self, distance: impl Into<String>) -> Self {
        self.distance = distance.into();
        self
    }

    pub fn building(mut self, building: impl Into<String>) -> Self {
        self.building = building.into();
        self
    }

    pub fn no_building(self) -> Self {
        self.building(NO_BUILDING)
    }

    pub fn build(self) -> Record {
        Record {
            site_id: self.site_id,
            latitude: self.latitude,
            longitude: self.longitude,
            angle: self.angle,
            distance: self.distance,
            building: self.building,
        }
    }
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

/// Build a record from all six fields in JSON key order.
pub fn record(site: &str, lat: &str, long: &str, angle: &str, distance: &str, building: &str) -> Record {
    RecordFixture::new(site)
        .coordinates(lat, long)
        .angle(angle)
        .distance(distance)
        .building(building)
        .build()
}

/// Join lines into a document with a trailing newline.
pub fn doc(lines: &[&str]) -> String {
    let mut text = lines.join("\n");
    text.push('\n');
    text
}
