//! Domain-specific assertion macros for sitelog harnesses.
//!
//! These wrap `pretty_assertions` and add failure messages that say which
//! extraction invariant was violated.

use sitelog_core::{Record, NO_BUILDING};

// ---------------------------------------------------------------------------
// Site attribution
// ---------------------------------------------------------------------------

/// Assert the site ids of a record list, in order.
///
/// ```rust
/// assert_sites!(records, ["I-KO-KLKT-ENB-0132", "0150"]);
/// ```
#[macro_export]
macro_rules! assert_sites {
    ($records:expr, [$($site:expr),* $(,)?]) => {{
        let records: &[sitelog_core::Record] = &$records;
        let actual: Vec<&str> = records.iter().map(|r| r.site_id.as_str()).collect();
        let expected: Vec<&str> = vec![$($site),*];
        pretty_assertions::assert_eq!(
            actual, expected,
            "record site attribution differs ({} records)", records.len()
        );
    }};
}

/// Assert that a document produced no records at all.
#[macro_export]
macro_rules! assert_no_records {
    ($records:expr) => {{
        let records: &[sitelog_core::Record] = &$records;
        if !records.is_empty() {
            panic!(
                "assert_no_records! failed: {} record(s) emitted.\n  first: {:?}",
                records.len(),
                records[0]
            );
        }
    }};
}

/// Assert that every record in a list satisfies a predicate.
///
/// ```rust
/// assert_records_all!(records, |r| r.building == "N/A");
/// ```
#[macro_export]
macro_rules! assert_records_all {
    ($records:expr, $pred:expr) => {{
        let records: &[sitelog_core::Record] = &$records;
        let pred = $pred;
        let failing: Vec<_> = records.iter().filter(|r| !pred(r)).collect();
        if !failing.is_empty() {
            panic!(
                "assert_records_all! failed: {} of {} records did not satisfy predicate.\n  first: {:?}",
                failing.len(),
                records.len(),
                failing[0]
            );
        }
    }};
}

// ---------------------------------------------------------------------------
// Record shape
// ---------------------------------------------------------------------------

/// Assert that an emitted record carries every mandatory field and a
/// building that is either a `B<digit>` code or the default.
pub fn assert_well_formed(record: &Record) {
    assert!(!record.site_id.is_empty(), "record without site id: {record:?}");
    assert!(!record.latitude.is_empty(), "record without latitude: {record:?}");
    assert!(!record.longitude.is_empty(), "record without longitude: {record:?}");
    assert!(!record.angle.is_empty(), "record without angle: {record:?}");
    assert!(!record.distance.is_empty(), "record without distance: {record:?}");
    let b = record.building.as_bytes();
    let coded = b.len() == 2 && b[0] == b'B' && b[1].is_ascii_digit();
    assert!(
        coded || record.building == NO_BUILDING,
        "building must be B<digit> or {NO_BUILDING}: {record:?}"
    );
}
