//! EAN/ISBN identifier extraction.

use scraper::ElementRef;

use crate::document::SPAN;

const EAN_PREFIX: &str = "EAN:";
const ISBN_PREFIX: &str = "ISBN:";

/// Product identifiers pulled from a line-item identifier cell.
///
/// Both fields are always present; an identifier the cell does not carry
/// is the empty string. Callers must not distinguish "absent" from
/// "empty", and a row with neither identifier is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemIdentifiers {
    pub ean: String,
    pub isbn: String,
}

/// Scan the tagged spans of an identifier cell for recognized prefixes.
///
/// Each span populates at most one identifier; spans without a recognized
/// prefix are ignored.
pub fn extract_identifiers(cell: ElementRef<'_>) -> ItemIdentifiers {
    let mut ids = ItemIdentifiers::default();

    for span in cell.select(&SPAN) {
        let text = span.text().collect::<String>();
        let text = text.trim_start();
        if let Some(rest) = text.strip_prefix(EAN_PREFIX) {
            ids.ean = rest.trim().to_string();
        } else if let Some(rest) = text.strip_prefix(ISBN_PREFIX) {
            ids.isbn = rest.trim().to_string();
        }
    }

    ids
}
