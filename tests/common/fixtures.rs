//! Static survey-log corpora used across harnesses.
//!
//! Each corpus is a complete document as a `&'static str`, paired (where it
//! matters) with a function returning the records it must produce.

use sitelog_core::Record;

use crate::common::builders::record;

/// The minimal three-line document: declaration, short id, data line.
pub const SAMPLE_SCENARIO: &str = "\
I-KO-KLKT-ENB-0132
0132
22.601152 88.431620 45 deg 120 m B1
";

/// A chat export as it comes out of the phone: sender prefixes, a manifest
/// message with continuation lines, a media placeholder, chatter, a value
/// split across two lines and an undeclared site.
pub const CHAT_EXPORT: &str = "\
12/03/24, 09:58 - Titli❤️: Sites for today
I-KO-KLKT-ENB-0132
I-KO-KLKT-ENB-0133
I-KO-KLKT-ENB-A201
12/03/24, 10:15 - Titli❤️: 0132
12/03/24, 10:16 - Titli❤️: 22.601152 88.431620 45 deg 120 m B1
12/03/24, 10:16 - Titli❤️: <Media omitted>
12/03/24, 10:17 - Titli❤️: 22.601310 88.431702 130deg 85m
12/03/24, 10:20 - Titli❤️: 0133
12/03/24, 10:21 - Titli❤️: reached, roof access pending
12/03/24, 10:25 - Titli❤️: 22.598877 88.429931 270 Degrees 60 Mtrs b2
12/03/24, 10:40 - Titli❤️: A201
12/03/24, 10:41 - Titli❤️: 22.611004
88.440215 15 deg 200 m B3
12/03/24, 10:45 - Titli❤️: 0150
12/03/24, 10:46 - Titli❤️: 22.620000 88.450000 90 40 m
";

/// Records [`CHAT_EXPORT`] must produce, in order.
pub fn chat_export_records() -> Vec<Record> {
    vec![
        record("I-KO-KLKT-ENB-0132", "22.601152", "88.43162", "45", "120", "B1"),
        record("I-KO-KLKT-ENB-0132", "22.601310", "88.431702", "130", "85", "N/A"),
        record("I-KO-KLKT-ENB-0133", "22.598877", "88.429931", "270", "60", "B2"),
        record("I-KO-KLKT-ENB-A201", "22.611004", "88.440215", "15", "200", "B3"),
        record("0150", "22.620000", "88.45", "90", "40", "N/A"),
    ]
}

/// Individual lines mixed into generated documents by the property tests.
pub const CORPUS_LINES: &[&str] = &[
    "I-KO-KLKT-ENB-0132",
    "I-KO-KLKT-ENB-0133",
    "0132",
    "0133",
    "A201",
    "0150",
    "22.601152 88.431620 45 deg 120 m B1",
    "22.601310 88.431702 130deg 85m",
    "22.620000 88.450000 90 40 m",
    "22.611004",
    "88.440215 15 deg 200 m B3",
    "12/03/24, 10:16 - Titli❤️: <Media omitted>",
    "12/03/24, 10:21 - Titli❤️: reached, roof access pending",
    "",
    "   ",
];

/// Build a document of `sites` sites with `lines_per_site` data lines each.
pub fn corpus_high_volume(sites: usize, lines_per_site: usize) -> String {
    let mut doc = String::new();
    for s in 0..sites {
        doc.push_str(&format!("I-KO-KLKT-ENB-{s:04}\n"));
    }
    for s in 0..sites {
        doc.push_str(&format!("12/03/24, 10:{:02} - Titli: {s:04}\n", s % 60));
        for i in 0..lines_per_site {
            doc.push_str(&format!(
                "22.{:06} 88.{:06} {} deg {} m B{}\n",
                s * 7 + i,
                s * 11 + i,
                i % 360,
                10 + i,
                i % 10,
            ));
        }
    }
    doc
}
