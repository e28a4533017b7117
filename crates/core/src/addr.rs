//! Address generation: configuration in, flat ordered label list out.
//!
//! Two independent sources feed the list, concatenated **patterns first,
//! then sections** (callers see this order on the printed sheet). No
//! deduplication happens anywhere; duplicate addresses are legal and
//! preserved. Generation is deterministic: the same configuration always
//! yields the same records in the same order.

use serde::{Deserialize, Serialize};

use crate::config::{GenConfig, SectionSpec};
use crate::error::PatternError;
use crate::expand::expand;

/// One printable label: a QR payload and the matching human-readable text.
///
/// The two fields carry the same string today; they stay separate so a
/// distinct QR payload template can be introduced without touching the
/// layout engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelRecord {
    /// Payload encoded into the scannable code.
    pub qr_data: String,
    /// Text printed next to the code.
    pub text: String,
}

impl LabelRecord {
    fn from_text(text: String) -> Self {
        Self {
            qr_data: text.clone(),
            text,
        }
    }
}

/// Result of one generation pass: the records that expanded cleanly plus
/// the per-pattern failures that were skipped.
#[derive(Debug, Clone, Default)]
pub struct AddressList {
    /// Flat ordered label list: pattern-derived records first, then
    /// section-derived records.
    pub records: Vec<LabelRecord>,
    /// Patterns that failed to expand. Their failure never disturbs the
    /// records produced by other patterns or sections.
    pub skipped: Vec<PatternError>,
}

/// Generate the full label list for one configuration.
pub fn generate(config: &GenConfig) -> AddressList {
    let sep = config.separator();
    let mut list = AddressList::default();

    for pattern in &config.addrs {
        match expand(pattern) {
            Ok(addrs) => list.records.extend(
                addrs
                    .into_iter()
                    .map(|a| LabelRecord::from_text(substitute_separator(&a, sep))),
            ),
            Err(err) => list.skipped.push(err),
        }
    }

    for section in &config.sections {
        section_records(section, sep, &mut list.records);
    }

    list
}

/// Emit the shelf×row grid of one section: shelf is the outer loop, row the
/// inner, both starting at 1. Shelf numbers are zero-padded to two digits.
fn section_records(section: &SectionSpec, sep: char, out: &mut Vec<LabelRecord>) {
    for shelf in 1..=section.shelfs {
        for row in 1..=section.rows {
            let text = format!("{}{shelf:02}{sep}{row}", section.zone);
            out.push(LabelRecord::from_text(substitute_separator(&text, sep)));
        }
    }
}

/// Replace every literal hyphen with the separator glyph. Applies to the
/// whole generated text, zone names included.
fn substitute_separator(text: &str, sep: char) -> String {
    text.replace('-', &sep.to_string())
}
