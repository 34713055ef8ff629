//! Purchase-order data models.

use serde::{Deserialize, Serialize};

/// A single line item on a purchase order.
///
/// Every field is trimmed text taken directly from the source document.
/// Numeric-looking fields (quantity, costs, discount) are deliberately not
/// parsed at extraction time; consumers that need arithmetic parse them
/// themselves and default to zero on failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// EAN identifier. Empty when the source row carries none.
    pub ean: String,

    /// ISBN identifier. Empty when the source row carries none.
    ///
    /// EAN and ISBN are mutually optional; a row with neither is valid.
    pub isbn: String,

    /// Product title, from the detail row.
    pub title: String,

    /// Vendor item code, from the detail row.
    pub sku: String,

    /// Expected arrival date, as text.
    pub arrival_date: String,

    /// Ordered quantity, as text.
    pub quantity: String,

    /// Per-unit cost, as text.
    pub item_cost: String,

    /// Per-unit retail price, as text.
    pub item_retail: String,

    /// Discount percentage, as text.
    pub discount: String,

    /// Case pack quantity, from the detail row.
    pub case_pack: String,

    /// Initial order quantity, from the detail row.
    pub ioq: String,
}

/// One purchase order extracted from a PO block.
///
/// Populated in a single pass and immutable afterwards. Missing zones in
/// the source document leave the corresponding fields empty; an order with
/// zero line items is a valid (empty) order, not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseOrder {
    /// PO number. Identifies the record within a processing run.
    pub number: String,

    /// PO date, as text.
    pub date: String,

    /// Ship-to address as multi-line plain text.
    pub ship_to: String,

    /// Bill-to address as multi-line plain text.
    pub bill_to: String,

    /// Payment terms.
    pub terms: String,

    /// Cancel-after date, as text.
    pub cancel_after: String,

    /// Back-order policy.
    pub back_order: String,

    /// Free-form special instructions, when present in the source.
    pub special_info: String,

    /// Line items in document order.
    pub line_items: Vec<LineItem>,

    /// Total line count from the totals zone, as text.
    pub total_lines: String,

    /// Total quantity from the totals zone, as text.
    pub total_qty: String,

    /// Extended cost total. Not populated by extraction; computed by the
    /// report renderer from per-line quantity and cost.
    pub total_ext_cost: String,

    /// Extended retail total. Not populated by extraction.
    pub total_ext_retail: String,
}

impl PurchaseOrder {
    /// Check the record for quality issues.
    ///
    /// Advisory only: a degraded extraction is still a usable record, so
    /// none of these are errors.
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();

        if self.number.is_empty() {
            issues.push("Missing PO number".to_string());
        }

        if self.date.is_empty() {
            issues.push("Missing PO date".to_string());
        }

        if self.bill_to.is_empty() && self.ship_to.is_empty() {
            issues.push("Missing address information".to_string());
        }

        if self.line_items.is_empty() {
            issues.push("No line items".to_string());
        }

        for (i, item) in self.line_items.iter().enumerate() {
            if item.ean.is_empty() && item.isbn.is_empty() && item.sku.is_empty() {
                issues.push(format!("Line item {} has no identifier", i + 1));
            }
        }

        if self.total_lines.is_empty() || self.total_qty.is_empty() {
            issues.push("Missing totals".to_string());
        }

        issues
    }
}
