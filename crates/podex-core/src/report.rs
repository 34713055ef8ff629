//! Self-contained HTML report rendering for extracted purchase orders.
//!
//! This is the presentation side of the pipeline: it owns the join
//! delimiter for address lines and recomputes the extended cost total
//! from per-line quantity and cost, defaulting unparseable values to
//! zero.

use std::fs;
use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use tracing::info;

use crate::error::{ReportError, Result};
use crate::models::{LineItem, PurchaseOrder};
use crate::po::rules::address_lines;

const REPORT_STYLE: &str = r#"body { font-family: Arial, sans-serif; background: #fff; }
.outer-box { border: 3px solid #000; width: 950px; margin: 24px auto; background: #fff; }
.header-table { width: 100%; border-collapse: collapse; }
.header-table td { vertical-align: top; }
.report-title { text-align: center; font-size: 2em; font-weight: bold; letter-spacing: 2px; padding-top: 12px; }
.po-info-box { border: 2px solid #000; padding: 10px 18px; margin: 12px 24px 0 0; float: right; min-width: 260px; }
.po-info-box table { width: 100%; }
.po-info-box td { padding: 2px 6px; }
.address-section { display: flex; justify-content: space-between; border: 3px solid #000; margin-top: 24px; background: #fafafa; padding: 30px 10px; }
.address-block { width: 48%; text-align: center; }
.address-label { font-size: 1.1em; font-weight: bold; }
.address-lines { line-height: 1.3em; margin-top: 8px; }
.line-items-table { width: 98%; border-collapse: collapse; margin: 18px auto 0 auto; }
.line-items-table th, .line-items-table td { border: 2px solid #000; padding: 6px 8px; }
.line-items-table th { background: #eee; }
.line-items-table td.num { text-align: right; font-family: monospace; }
.casepack-row td { border: none; font-size: 0.97em; padding: 0 0 0 24px; color: #222; }
.totals-table { width: 98%; border-collapse: collapse; margin: 18px auto 24px auto; }
.totals-table td { border: 2px solid #000; padding: 6px 8px; font-weight: bold; background: #eee; }"#;

/// Output file name for a purchase order, derived from its number.
pub fn file_name(po: &PurchaseOrder) -> String {
    format!("PO_{}.html", po.number)
}

/// Extended cost total over all line items: sum of quantity times unit
/// cost, with each multiplicand defaulting to zero when its text does not
/// parse.
pub fn total_ext_cost(items: &[LineItem]) -> Decimal {
    items
        .iter()
        .map(|item| parse_quantity(&item.quantity) * parse_money(&item.item_cost))
        .sum()
}

fn parse_quantity(s: &str) -> Decimal {
    s.trim()
        .parse::<i64>()
        .map(Decimal::from)
        .unwrap_or(Decimal::ZERO)
}

fn parse_money(s: &str) -> Decimal {
    s.trim()
        .trim_start_matches('$')
        .replace(',', "")
        .parse::<Decimal>()
        .unwrap_or(Decimal::ZERO)
}

/// Render a purchase order as a standalone HTML document.
pub fn render_html(po: &PurchaseOrder) -> String {
    let mut out = String::with_capacity(4096);

    out.push_str(&format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="UTF-8">
<title>Purchase Order {number}</title>
<style>
{REPORT_STYLE}
</style>
</head>
<body>
<div class="outer-box">
  <table class="header-table">
    <tr>
      <td style="width:60%;"><div class="report-title">PURCHASE ORDER</div></td>
      <td style="width:40%;">
        <div class="po-info-box">
          <table>
            <tr><td><b>NUMBER</b></td><td>{number}</td></tr>
            <tr><td><b>DATE</b></td><td>{date}</td></tr>
            <tr><td><b>CANCEL AFTER</b></td><td>{cancel_after}</td></tr>
          </table>
        </div>
      </td>
    </tr>
  </table>
  <div class="address-section">
    <div class="address-block">
      <div class="address-label">Bill To:</div>
      <div class="address-lines">{bill_to}</div>
    </div>
    <div class="address-block">
      <div class="address-label">Ship To:</div>
      <div class="address-lines">{ship_to}</div>
    </div>
  </div>
  <table class="line-items-table">
    <tr>
      <th>EAN</th><th>Title</th><th>SKU</th>
      <th>EXPECTED ARRIVAL DATE</th><th>QUANTITY</th>
      <th>ITEM COST</th><th>ITEM RETAIL</th><th>DISC%</th>
    </tr>
"#,
        number = po.number,
        date = po.date,
        cancel_after = po.cancel_after,
        bill_to = address_lines(&po.bill_to).join("<br>"),
        ship_to = address_lines(&po.ship_to).join("<br>"),
    ));

    for item in &po.line_items {
        out.push_str(&format!(
            r#"    <tr>
      <td>{ean}</td><td>{title}</td><td>{sku}</td>
      <td>{arrival_date}</td>
      <td class="num">{quantity}</td>
      <td class="num">{item_cost}</td>
      <td class="num">{item_retail}</td>
      <td class="num">{discount}</td>
    </tr>
    <tr class="casepack-row"><td colspan="8"><b>CASEPACK QTY:</b> {case_pack} &nbsp;&nbsp; <b>IOQ:</b> {ioq}</td></tr>
"#,
            ean = item.ean,
            title = item.title,
            sku = item.sku,
            arrival_date = item.arrival_date,
            quantity = item.quantity,
            item_cost = item.item_cost,
            item_retail = item.item_retail,
            discount = item.discount,
            case_pack = item.case_pack,
            ioq = item.ioq,
        ));
    }

    out.push_str(&format!(
        r#"  </table>
  <table class="totals-table">
    <tr>
      <td>TOTAL LINES</td><td>{total_lines}</td>
      <td>TOTAL QTY</td><td>{total_qty}</td>
      <td>TOTAL COST</td><td>${total_cost}</td>
    </tr>
  </table>
</div>
</body>
</html>
"#,
        total_lines = po.total_lines,
        total_qty = po.total_qty,
        total_cost = total_ext_cost(&po.line_items).round_dp(2),
    ));

    out
}

/// Render a purchase order and write it under `dir`.
///
/// The file name is derived from the PO number. Failure here is fatal to
/// this record only; callers processing a run of records log it and move
/// on to the next block.
pub fn write_report(po: &PurchaseOrder, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(file_name(po));
    fs::write(&path, render_html(po)).map_err(|source| ReportError::Write {
        path: path.clone(),
        source,
    })?;

    info!(number = %po.number, path = %path.display(), "wrote PO report");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn item(quantity: &str, cost: &str) -> LineItem {
        LineItem {
            quantity: quantity.to_string(),
            item_cost: cost.to_string(),
            ..LineItem::default()
        }
    }

    #[test]
    fn test_file_name_derived_from_number() {
        let po = PurchaseOrder {
            number: "1234567".to_string(),
            ..PurchaseOrder::default()
        };
        assert_eq!(file_name(&po), "PO_1234567.html");
    }

    #[test]
    fn test_total_ext_cost_sums_lines() {
        let items = vec![item("12", "5.99"), item("2", "$1,000.00")];
        assert_eq!(total_ext_cost(&items).to_string(), "2071.88");
    }

    #[test]
    fn test_total_ext_cost_defaults_unparseable_to_zero() {
        let items = vec![item("twelve", "5.99"), item("3", "n/a"), item("2", "1.50")];
        assert_eq!(total_ext_cost(&items).to_string(), "3.00");
    }

    #[test]
    fn test_render_joins_address_lines_with_br() {
        let po = PurchaseOrder {
            number: "99".to_string(),
            bill_to: "Bill To:\nAcme Books\n123 Main St".to_string(),
            ..PurchaseOrder::default()
        };
        let html = render_html(&po);
        assert!(html.contains("Acme Books<br>123 Main St"));
        assert!(html.contains("<title>Purchase Order 99</title>"));
    }

    #[test]
    fn test_write_report_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let po = PurchaseOrder {
            number: "42".to_string(),
            ..PurchaseOrder::default()
        };

        let path = write_report(&po, dir.path()).unwrap();
        assert_eq!(path.file_name().unwrap(), "PO_42.html");
        assert!(fs::read_to_string(path).unwrap().contains("PURCHASE ORDER"));
    }

    #[test]
    fn test_write_report_failure_names_path() {
        let po = PurchaseOrder {
            number: "42".to_string(),
            ..PurchaseOrder::default()
        };
        let err = write_report(&po, Path::new("/nonexistent-dir-for-test")).unwrap_err();
        assert!(matches!(
            err,
            crate::error::PodexError::Report(ReportError::Write { .. })
        ));
        assert!(err.to_string().contains("PO_42.html"));
    }
}
