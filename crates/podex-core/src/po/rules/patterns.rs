//! Common regex patterns for purchase-order extraction.
//!
//! The detail-field labels form a closed, hardcoded set; label text is
//! never taken from input, so the patterns can be compiled once here.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Explicit line-break markers inside address cells
    pub static ref BR_TAG: Regex = Regex::new(r"(?i)<br\s*/?>").unwrap();

    // Any remaining markup after line breaks are normalized
    pub static ref HTML_TAG: Regex = Regex::new(r"<[^>]+>").unwrap();

    // Labeled fields on a line-item detail row: label, optional space,
    // then the rest of the line
    pub static ref TITLE_FIELD: Regex = Regex::new(r"Title:\s*([^\n\r]*)").unwrap();

    pub static ref VENDOR_CODE_FIELD: Regex =
        Regex::new(r"Vendor Item Code:\s*([^\n\r]*)").unwrap();

    pub static ref CASE_PACK_FIELD: Regex =
        Regex::new(r"Case Pack Qty:\s*([^\n\r]*)").unwrap();

    pub static ref IOQ_FIELD: Regex = Regex::new(r"IOQ:\s*([^\n\r]*)").unwrap();
}
