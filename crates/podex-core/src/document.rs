//! HTML document access.
//!
//! Thin wrapper around the `scraper` document model: parsing, PO block
//! discovery, and the shared selector table used by the extractors. The
//! core never reads files or raw bytes itself; callers hand it an already
//! loaded HTML string.

use lazy_static::lazy_static;
use scraper::{ElementRef, Html, Selector};

/// A table element qualifies as a PO block when its `id` attribute starts
/// with this prefix.
pub const PO_BLOCK_ID_PREFIX: &str = "PO_";

lazy_static! {
    pub(crate) static ref TABLE: Selector = Selector::parse("table").unwrap();
    pub(crate) static ref TR: Selector = Selector::parse("tr").unwrap();
    pub(crate) static ref TD: Selector = Selector::parse("td").unwrap();
    pub(crate) static ref TH: Selector = Selector::parse("th").unwrap();
    pub(crate) static ref SPAN: Selector = Selector::parse("span").unwrap();

    /// The info/address table of a PO block.
    pub(crate) static ref INFO_TABLE: Selector = Selector::parse("table.tbInfo").unwrap();

    /// The bordered metadata/line-item/totals tables of a PO block.
    pub(crate) static ref BORDERED_TABLE: Selector = Selector::parse("table.tbborder").unwrap();
}

/// A parsed purchase-order source document.
pub struct PoDocument {
    html: Html,
}

impl PoDocument {
    /// Parse an HTML document.
    ///
    /// Parsing is lenient and never fails; malformed markup simply yields
    /// fewer (or no) PO blocks.
    pub fn parse(html: &str) -> Self {
        Self {
            html: Html::parse_document(html),
        }
    }

    /// Find all PO blocks in the document, in document order.
    pub fn po_blocks(&self) -> Vec<ElementRef<'_>> {
        self.html
            .select(&TABLE)
            .filter(|table| {
                table
                    .value()
                    .attr("id")
                    .is_some_and(|id| id.starts_with(PO_BLOCK_ID_PREFIX))
            })
            .collect()
    }
}

/// Flattened, trimmed text content of an element.
pub(crate) fn cell_text(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}
