//! Labeled field extraction from line-item detail rows.

use regex::Regex;

use super::patterns::{CASE_PACK_FIELD, IOQ_FIELD, TITLE_FIELD, VENDOR_CODE_FIELD};

/// The labeled fields a detail row can carry.
///
/// Closed set: labels are never accepted from input, so the patterns built
/// from them are fixed (see `patterns`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailLabel {
    Title,
    VendorItemCode,
    CasePackQty,
    Ioq,
}

impl DetailLabel {
    fn pattern(self) -> &'static Regex {
        match self {
            DetailLabel::Title => &TITLE_FIELD,
            DetailLabel::VendorItemCode => &VENDOR_CODE_FIELD,
            DetailLabel::CasePackQty => &CASE_PACK_FIELD,
            DetailLabel::Ioq => &IOQ_FIELD,
        }
    }
}

/// Extract a labeled field from an ordered sequence of detail-row cells.
///
/// The label's pattern is applied to each cell's flattened text in order;
/// the first match wins and its remainder-of-line capture is returned
/// trimmed. No match across all cells yields the empty string, never an
/// error.
pub fn extract_detail_field(cells: &[String], label: DetailLabel) -> String {
    let pattern = label.pattern();
    for cell in cells {
        if let Some(caps) = pattern.captures(cell) {
            return caps[1].trim().to_string();
        }
    }
    String::new()
}
