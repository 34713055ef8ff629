//! Row pairing engine for the line-items table.
//!
//! A line item spans two physical rows: a "primary" row carrying the
//! positional numeric/identifier columns, immediately followed by a
//! "detail" row carrying labeled auxiliary fields. This module walks the
//! table and groups each primary row with its detail row into one
//! `LineItem`.

use scraper::ElementRef;
use tracing::debug;

use crate::document::{cell_text, TD};
use crate::models::LineItem;

use super::rules::{extract_detail_field, extract_identifiers, DetailLabel};

/// Row classes that mark a primary line-item row. The two values are a
/// cosmetic zebra-striping distinction; both are treated identically.
const PRIMARY_ROW_CLASSES: [&str; 2] = ["lineItem", "AltlineItem"];

/// A primary row with fewer cells than this is malformed and dropped.
const MIN_PRIMARY_CELLS: usize = 11;

// Physical column layout of a primary row. All positional offsets live
// here; a layout shift in the source format is a one-line change.
const COL_IDENTIFIER: usize = 2;
const COL_QUANTITY: usize = 3;
const COL_ITEM_COST: usize = 6;
const COL_ITEM_RETAIL: usize = 7;
const COL_DISCOUNT: usize = 8;
const COL_ARRIVAL_DATE: usize = 10;

/// Pair primary and detail rows into line items.
///
/// `rows` is the full row sequence of a line-items table; row 0 is the
/// header. Rows that are neither a qualifying primary row nor consumed as
/// a detail row are skipped. A dangling primary row at the end of the
/// table still yields an item, with all detail fields empty.
pub fn pair_line_items(rows: &[ElementRef<'_>]) -> Vec<LineItem> {
    let mut items = Vec::new();

    let mut i = 1;
    while i < rows.len() {
        let row = rows[i];
        let class = row.value().attr("class").unwrap_or("");
        if !PRIMARY_ROW_CLASSES.contains(&class) {
            i += 1;
            continue;
        }

        let cells: Vec<ElementRef<'_>> = row.select(&TD).collect();
        if cells.len() < MIN_PRIMARY_CELLS {
            debug!(
                row = i,
                cells = cells.len(),
                "dropping malformed primary row"
            );
            i += 1;
            continue;
        }

        let ids = extract_identifiers(cells[COL_IDENTIFIER]);
        let mut item = LineItem {
            ean: ids.ean,
            isbn: ids.isbn,
            quantity: cell_text(cells[COL_QUANTITY]),
            item_cost: cell_text(cells[COL_ITEM_COST]),
            item_retail: cell_text(cells[COL_ITEM_RETAIL]),
            discount: cell_text(cells[COL_DISCOUNT]),
            arrival_date: cell_text(cells[COL_ARRIVAL_DATE]),
            ..LineItem::default()
        };

        // The next row, whatever its class, is this item's detail row.
        if let Some(detail_row) = rows.get(i + 1) {
            let detail_cells: Vec<String> = detail_row.select(&TD).map(cell_text).collect();
            item.title = extract_detail_field(&detail_cells, DetailLabel::Title);
            item.sku = extract_detail_field(&detail_cells, DetailLabel::VendorItemCode);
            item.case_pack = extract_detail_field(&detail_cells, DetailLabel::CasePackQty);
            item.ioq = extract_detail_field(&detail_cells, DetailLabel::Ioq);
        }

        items.push(item);
        i += 2;
    }

    items
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use scraper::Html;

    use super::*;
    use crate::document::TR;

    const PRIMARY_ROW: &str = r#"<tr class="lineItem">
        <td>1</td><td></td>
        <td><span>EAN: 9780000000001</span></td>
        <td>12</td><td></td><td></td>
        <td>5.99</td><td>11.99</td><td>50%</td>
        <td></td><td>03/01/2024</td>
    </tr>"#;

    const DETAIL_ROW: &str = r#"<tr>
        <td>Title: A Book</td>
        <td>Vendor Item Code: ABC-1</td>
        <td>Case Pack Qty: 24</td>
        <td>IOQ: 6</td>
    </tr>"#;

    fn items_from(table_body: &str) -> Vec<LineItem> {
        let html = Html::parse_document(&format!("<table>{table_body}</table>"));
        let rows: Vec<ElementRef<'_>> = html.select(&TR).collect();
        pair_line_items(&rows)
    }

    fn header() -> String {
        "<tr><th>h</th></tr>".to_string()
    }

    #[test]
    fn test_pairs_in_document_order() {
        let alt = PRIMARY_ROW.replace("lineItem", "AltlineItem").replace("0001", "0002");
        let body = format!("{}{PRIMARY_ROW}{DETAIL_ROW}{alt}{DETAIL_ROW}", header());
        let items = items_from(&body);

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].ean, "9780000000001");
        assert_eq!(items[1].ean, "9780000000002");
        assert_eq!(items[0].title, "A Book");
        assert_eq!(items[0].sku, "ABC-1");
        assert_eq!(items[0].case_pack, "24");
        assert_eq!(items[0].ioq, "6");
        assert_eq!(items[0].quantity, "12");
        assert_eq!(items[0].item_cost, "5.99");
        assert_eq!(items[0].item_retail, "11.99");
        assert_eq!(items[0].discount, "50%");
        assert_eq!(items[0].arrival_date, "03/01/2024");
    }

    #[test]
    fn test_short_primary_row_is_dropped_not_defaulted() {
        let body = format!(
            r#"{}<tr class="lineItem"><td>1</td><td>2</td><td>3</td></tr>"#,
            header()
        );
        assert!(items_from(&body).is_empty());
    }

    #[test]
    fn test_dangling_primary_row_yields_empty_detail_fields() {
        let body = format!("{}{PRIMARY_ROW}", header());
        let items = items_from(&body);

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].ean, "9780000000001");
        assert_eq!(items[0].title, "");
        assert_eq!(items[0].sku, "");
        assert_eq!(items[0].case_pack, "");
        assert_eq!(items[0].ioq, "");
    }

    #[test]
    fn test_stray_rows_are_skipped() {
        let body = format!(
            "{}<tr><td>spacer</td></tr>{PRIMARY_ROW}{DETAIL_ROW}<tr><td>trailer</td></tr>",
            header()
        );
        assert_eq!(items_from(&body).len(), 1);
    }

    #[test]
    fn test_detail_only_row_is_not_double_processed() {
        // A lone detail-style row with no preceding primary match is
        // skipped on its own iteration.
        let body = format!("{}{DETAIL_ROW}", header());
        assert!(items_from(&body).is_empty());
    }
}
