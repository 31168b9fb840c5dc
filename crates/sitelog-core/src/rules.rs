//! Field rules: the ordered pattern table applied to every data line.
//!
//! Each [`FieldRule`] pairs a pattern with the field it fills and a
//! transform over the captures. [`RuleTable::extract`] walks the table in
//! order and the first rule to match a field wins, so the table order *is*
//! the precedence policy:
//!
//! | Rule               | Field       | Shape                                   |
//! |--------------------|-------------|-----------------------------------------|
//! | `coordinates`      | lat + long  | `22.601152 88.431620`, `22.6°, 088.4`   |
//! | `angle_unit`       | angle       | `45 deg`, `45°`, `45 Degrees`           |
//! | `angle_bare`       | angle       | `45 120 m` (bare number before distance)|
//! | `distance`         | distance    | `120 m`, `120m`, `120 Mtrs`             |
//! | `building`         | building    | `B1`, `b2`                              |
//!
//! The unit-qualified angle always beats the bare form, even when the bare
//! form would match earlier on the line.

use regex::{Captures, Regex};

use crate::types::{Record, NO_BUILDING};

/// Latitude (exactly two integer digits) then longitude (two or three),
/// optionally separated by a degree mark, whitespace, commas or semicolons.
const COORDINATES_PATTERN: &str = r"(?:^|[^0-9])([0-9]{2}\.[0-9]+)\s*°?[\s,;]*([0-9]{2,3}\.[0-9]+)";

/// Left edge of a bare integer: not glued to a letter, digit, underscore or
/// decimal point, so `B1` and `tower2` never yield a number.
const INTEGER_START: &str = r"(?:^|[^0-9A-Za-z_.])";

const METER_UNIT: &str = r"(?:m|mtrs?|meters?|metres?)\b";

// ---------------------------------------------------------------------------
// Rule types
// ---------------------------------------------------------------------------

/// Which part of a [`Record`] a rule fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Coordinates,
    Angle,
    Distance,
    Building,
}

/// Fields found on one logical line. Unmatched fields stay `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub angle: Option<String>,
    pub distance: Option<String>,
    pub building: Option<String>,
}

impl Extraction {
    fn has(&self, field: Field) -> bool {
        match field {
            Field::Coordinates => self.latitude.is_some() && self.longitude.is_some(),
            Field::Angle => self.angle.is_some(),
            Field::Distance => self.distance.is_some(),
            Field::Building => self.building.is_some(),
        }
    }

    /// True when coordinates, angle and distance were all found.
    pub fn is_complete(&self) -> bool {
        self.has(Field::Coordinates) && self.has(Field::Angle) && self.has(Field::Distance)
    }

    /// Attribute the extraction to `site_id`, or `None` if a mandatory field
    /// is missing.
    pub fn into_record(self, site_id: &str) -> Option<Record> {
        Some(Record {
            site_id: site_id.to_string(),
            latitude: self.latitude?,
            longitude: self.longitude?,
            angle: self.angle?,
            distance: self.distance?,
            building: self.building.unwrap_or_else(|| NO_BUILDING.to_string()),
        })
    }
}

/// One entry of the rule table.
#[derive(Clone)]
pub struct FieldRule {
    pub name: &'static str,
    pub field: Field,
    pattern: Regex,
    transform: fn(&Captures<'_>, &mut Extraction),
}

impl std::fmt::Debug for FieldRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldRule")
            .field("name", &self.name)
            .field("field", &self.field)
            .field("pattern", &self.pattern.as_str())
            .finish()
    }
}

impl FieldRule {
    fn new(
        name: &'static str,
        field: Field,
        pattern: &str,
        transform: fn(&Captures<'_>, &mut Extraction),
    ) -> Self {
        let pattern = Regex::new(pattern).expect("built-in field pattern is valid");
        Self { name, field, pattern, transform }
    }

    /// Apply this rule alone to `line`, filling `out` on a match.
    /// Returns whether the rule matched.
    pub fn apply(&self, line: &str, out: &mut Extraction) -> bool {
        match self.pattern.captures(line) {
            Some(caps) => {
                (self.transform)(&caps, out);
                true
            }
            None => false,
        }
    }
}

// ---------------------------------------------------------------------------
// Rule table
// ---------------------------------------------------------------------------

/// The canonical, ordered rule table.
#[derive(Debug, Clone)]
pub struct RuleTable {
    rules: Vec<FieldRule>,
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl RuleTable {
    pub fn standard() -> Self {
        let rules = vec![
            FieldRule::new("coordinates", Field::Coordinates, COORDINATES_PATTERN, |caps, out| {
                out.latitude = Some(caps[1].to_string());
                out.longitude = Some(normalize_longitude(&caps[2]));
            }),
            FieldRule::new(
                "angle_unit",
                Field::Angle,
                &format!(r"(?i){INTEGER_START}([0-9]{{1,3}})\s*(?:°|deg(?:ree)?s?\b)"),
                |caps, out| out.angle = Some(caps[1].to_string()),
            ),
            FieldRule::new(
                "angle_bare",
                Field::Angle,
                &format!(r"(?i){INTEGER_START}([0-9]{{1,3}})[\s,]+[0-9]+\s*{METER_UNIT}"),
                |caps, out| out.angle = Some(caps[1].to_string()),
            ),
            FieldRule::new(
                "distance",
                Field::Distance,
                &format!(r"(?i){INTEGER_START}([0-9]+)\s*{METER_UNIT}"),
                |caps, out| out.distance = Some(caps[1].to_string()),
            ),
            FieldRule::new("building", Field::Building, r"(?i)b[0-9]", |caps, out| {
                out.building = Some(caps[0].to_ascii_uppercase());
            }),
        ];
        Self { rules }
    }

    pub fn rules(&self) -> &[FieldRule] {
        &self.rules
    }

    /// Look up a rule by name.
    pub fn rule(&self, name: &str) -> Option<&FieldRule> {
        self.rules.iter().find(|r| r.name == name)
    }

    /// Run the table over one logical line. A field already filled by an
    /// earlier rule is never overwritten.
    pub fn extract(&self, line: &str) -> Extraction {
        let mut out = Extraction::default();
        for rule in &self.rules {
            if out.has(rule.field) {
                continue;
            }
            rule.apply(line, &mut out);
        }
        out
    }
}

/// Strip leading zeros from the whole longitude string, then trailing zeros
/// from its fraction (keeping at least one fractional digit).
///
/// The leading strip runs over the entire match, so `00.5` becomes `.5`.
pub fn normalize_longitude(raw: &str) -> String {
    let stripped = raw.trim_start_matches('0');
    match stripped.split_once('.') {
        Some((int, frac)) => {
            let frac = frac.trim_end_matches('0');
            let frac = if frac.is_empty() { "0" } else { frac };
            format!("{int}.{frac}")
        }
        None => stripped.to_string(),
    }
}
