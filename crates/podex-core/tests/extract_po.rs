//! End-to-end extraction over a complete purchase-order document.

use podex_core::{extract_po, PoDocument};

const PO_DOCUMENT: &str = r#"<!DOCTYPE html>
<html>
<body>
<table id="PO_1234567">
  <tr><td>
    <table class="tbInfo">
      <tr>
        <td>Bill To:<br>Acme Books Inc<br>122 Fifth Avenue<br>New York, NY 10011</td>
        <td>&nbsp;</td>
        <td>Ship To:<br>Distribution Center 12<br>1 Warehouse Way<br>Monroe, NJ 08831</td>
      </tr>
    </table>
    <table class="tbborder">
      <tr><th>PO Number</th><th>PO Type</th><th>PO Date</th></tr>
      <tr><td> 1234567 </td><td>Initial Order</td><td> 01/15/2024 </td></tr>
    </table>
    <table class="tbborder">
      <tr><th>Ship Via</th><th>Cancel After</th><th>Back Order</th></tr>
      <tr><td>Ground</td><td>04/30/2024</td><td>No</td></tr>
    </table>
    <table class="tbborder">
      <tr>
        <th>Line</th><th>Type</th><th>Identifier</th><th>Qty</th><th>Unit</th>
        <th>UOM</th><th>Cost</th><th>Retail</th><th>Disc</th><th>Status</th><th>Arrival</th>
      </tr>
      <tr class="lineItem">
        <td>1</td><td>N</td>
        <td><span>EAN: 9780000000001</span></td>
        <td>12</td><td>EA</td><td>CS</td>
        <td>5.99</td><td>11.99</td><td>50%</td>
        <td>Open</td><td>03/01/2024</td>
      </tr>
      <tr>
        <td>Title: The Example Book</td>
        <td>Vendor Item Code: EXB-001</td>
        <td>Case Pack Qty: 24</td>
        <td>IOQ: 6</td>
      </tr>
    </table>
    <table class="tbborder">
      <tr><th>Total Line Items</th><th>Total Qty</th></tr>
      <tr><td>1</td><td>12</td></tr>
    </table>
  </td></tr>
</table>
</body>
</html>"#;

#[test]
fn full_block_populates_every_zone() {
    let doc = PoDocument::parse(PO_DOCUMENT);
    let blocks = doc.po_blocks();
    assert_eq!(blocks.len(), 1);

    let result = extract_po(blocks[0]);
    assert!(result.missing_zones.is_empty());

    let po = result.po;
    assert_eq!(po.number, "1234567");
    assert_eq!(po.date, "01/15/2024");
    assert_eq!(po.cancel_after, "04/30/2024");
    assert!(po.bill_to.contains("122 Fifth Avenue"));
    assert!(po.ship_to.contains("1 Warehouse Way"));
    assert_eq!(po.total_lines, "1");
    assert_eq!(po.total_qty, "12");

    assert_eq!(po.line_items.len(), 1);
    let item = &po.line_items[0];
    assert_eq!(item.ean, "9780000000001");
    assert_eq!(item.isbn, "");
    assert_eq!(item.title, "The Example Book");
    assert_eq!(item.sku, "EXB-001");
    assert_eq!(item.quantity, "12");
    assert_eq!(item.item_cost, "5.99");
    assert_eq!(item.item_retail, "11.99");
    assert_eq!(item.discount, "50%");
    assert_eq!(item.arrival_date, "03/01/2024");
    assert_eq!(item.case_pack, "24");
    assert_eq!(item.ioq, "6");

    assert!(po.validate().is_empty());
}

#[test]
fn extraction_is_idempotent_over_the_same_block() {
    let doc = PoDocument::parse(PO_DOCUMENT);
    let blocks = doc.po_blocks();

    let first = extract_po(blocks[0]);
    let second = extract_po(blocks[0]);
    assert_eq!(first, second);

    // The document itself is untouched: discovery still finds the block.
    assert_eq!(doc.po_blocks().len(), 1);
}

#[test]
fn rendered_report_recomputes_extended_cost() {
    let doc = PoDocument::parse(PO_DOCUMENT);
    let po = extract_po(doc.po_blocks()[0]).into_po();

    let html = podex_core::render_html(&po);
    // 12 x 5.99
    assert!(html.contains("$71.88"));
    assert!(html.contains("Acme Books Inc<br>122 Fifth Avenue"));
    assert!(!html.contains("Bill To:<br>"));
}
