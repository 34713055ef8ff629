//! Zone location and purchase-order assembly.
//!
//! A PO block contains four structurally distinct sub-tables: the
//! info/address table, the header table, the line-items table, and the
//! totals table. Extraction locates each zone heuristically and degrades
//! to empty fields when a zone cannot be found; it never fails.

use scraper::ElementRef;
use tracing::debug;

use crate::document::{cell_text, BORDERED_TABLE, INFO_TABLE, TD, TH, TR};
use crate::models::PurchaseOrder;

use super::rows::pair_line_items;
use super::rules::html_to_multiline;

/// Header text identifying the totals table.
const TOTALS_HEADER: &str = "Total Line Items";

/// Header text locating the cancel-after metadata row.
const CANCEL_AFTER_HEADER: &str = "Cancel After";

/// A line-items table is the bordered table with more header cells than
/// this; the smaller metadata tables never reach it.
const LINE_ITEMS_MIN_HEADER_CELLS: usize = 8;

/// The structural zones of a PO block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    Addresses,
    Header,
    CancelAfter,
    LineItems,
    Totals,
}

/// Outcome of extracting one PO block.
///
/// `missing_zones` records which zones could not be located, so callers
/// can tell a found-but-empty field from a zone that was never there. The
/// record itself already carries the flattened empty-string form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoExtraction {
    pub po: PurchaseOrder,
    pub missing_zones: Vec<Zone>,
}

impl PoExtraction {
    /// Flatten to the record alone, discarding zone diagnostics.
    pub fn into_po(self) -> PurchaseOrder {
        self.po
    }
}

/// Extract a purchase order from one PO block.
///
/// Never fails: every zone that cannot be located leaves its fields empty
/// and is recorded in `missing_zones`. A block with no line-items table
/// yields a valid empty order.
pub fn extract_po(block: ElementRef<'_>) -> PoExtraction {
    let mut po = PurchaseOrder::default();
    let mut missing = Vec::new();

    match extract_addresses(block) {
        Some((bill_to, ship_to)) => {
            po.bill_to = bill_to;
            po.ship_to = ship_to;
        }
        None => missing.push(Zone::Addresses),
    }

    match extract_header(block) {
        Some((number, date)) => {
            po.number = number;
            po.date = date;
        }
        None => missing.push(Zone::Header),
    }

    match extract_cancel_after(block) {
        Some(cancel_after) => po.cancel_after = cancel_after,
        None => missing.push(Zone::CancelAfter),
    }

    let line_table = block
        .select(&BORDERED_TABLE)
        .filter(|table| table.select(&TH).count() > LINE_ITEMS_MIN_HEADER_CELLS)
        .last();

    let Some(line_table) = line_table else {
        // A block without a line-items table is a valid empty order; the
        // totals zone is not looked for either.
        debug!(number = %po.number, "no line-items table in PO block");
        missing.push(Zone::LineItems);
        missing.push(Zone::Totals);
        return PoExtraction {
            po,
            missing_zones: missing,
        };
    };

    let rows: Vec<ElementRef<'_>> = line_table.select(&TR).collect();
    po.line_items = pair_line_items(&rows);
    debug!(
        number = %po.number,
        line_items = po.line_items.len(),
        "extracted line items"
    );

    match extract_totals(block) {
        Some((total_lines, total_qty)) => {
            po.total_lines = total_lines;
            po.total_qty = total_qty;
        }
        None => missing.push(Zone::Totals),
    }

    PoExtraction {
        po,
        missing_zones: missing,
    }
}

/// Info/address zone: the first row of the first info table with at least
/// three cells supplies the bill-to (cell 0) and ship-to (cell 2) address
/// HTML. Cell 1 is a spacer.
fn extract_addresses(block: ElementRef<'_>) -> Option<(String, String)> {
    let info = block.select(&INFO_TABLE).next()?;
    let row = info
        .select(&TR)
        .find(|row| row.select(&TD).count() >= 3)?;
    let cells: Vec<ElementRef<'_>> = row.select(&TD).collect();

    let bill_to = html_to_multiline(&cells[0].inner_html());
    let ship_to = html_to_multiline(&cells[2].inner_html());
    Some((bill_to, ship_to))
}

/// Header zone: in the first bordered table, the second row supplies the
/// PO number (cell 0) and date (cell 2), positionally.
fn extract_header(block: ElementRef<'_>) -> Option<(String, String)> {
    let table = block.select(&BORDERED_TABLE).next()?;
    let row = table.select(&TR).nth(1)?;
    let cells: Vec<ElementRef<'_>> = row.select(&TD).collect();
    if cells.len() < 3 {
        return None;
    }
    Some((cell_text(cells[0]), cell_text(cells[2])))
}

/// Cancel-after zone: the first header-cell row across all bordered
/// tables whose text mentions "Cancel After"; the value sits in cell 1 of
/// the following row. The first well-formed match wins; a matching header
/// row with no usable next row does not stop the scan.
fn extract_cancel_after(block: ElementRef<'_>) -> Option<String> {
    for table in block.select(&BORDERED_TABLE) {
        let rows: Vec<ElementRef<'_>> = table.select(&TR).collect();
        for (i, row) in rows.iter().enumerate() {
            let is_header = row.select(&TH).next().is_some();
            if !is_header || !row.text().collect::<String>().contains(CANCEL_AFTER_HEADER) {
                continue;
            }

            let Some(next) = rows.get(i + 1) else {
                continue;
            };
            let cells: Vec<ElementRef<'_>> = next.select(&TD).collect();
            if cells.len() < 2 {
                continue;
            }
            return Some(cell_text(cells[1]));
        }
    }
    None
}

/// Totals zone: the bordered table with exactly two header cells whose
/// first reads exactly "Total Line Items". Its two data cells supply the
/// line and quantity totals; any other shape leaves both empty.
fn extract_totals(block: ElementRef<'_>) -> Option<(String, String)> {
    for table in block.select(&BORDERED_TABLE) {
        let headers: Vec<ElementRef<'_>> = table.select(&TH).collect();
        if headers.len() != 2 || cell_text(headers[0]) != TOTALS_HEADER {
            continue;
        }

        let cells: Vec<ElementRef<'_>> = table.select(&TD).collect();
        if cells.len() != 2 {
            return None;
        }
        return Some((cell_text(cells[0]), cell_text(cells[1])));
    }
    None
}
