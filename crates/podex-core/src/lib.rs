//! Core library for purchase-order HTML extraction.
//!
//! This crate provides:
//! - Document access and PO block discovery over parsed HTML
//! - Heuristic zone location within a PO block (addresses, header,
//!   line items, totals)
//! - Row pairing and field extraction into a normalized record model
//! - Self-contained HTML report rendering per record
//!
//! Extraction is deliberately fail-soft: missing or malformed structure
//! degrades the affected fields to empty values and is reported through
//! zone diagnostics, never as an error.

pub mod document;
pub mod error;
pub mod models;
pub mod po;
pub mod report;

pub use document::{PoDocument, PO_BLOCK_ID_PREFIX};
pub use error::{PodexError, ReportError, Result};
pub use models::{LineItem, PurchaseOrder};
pub use po::{extract_po, PoExtraction, Zone};
pub use report::{render_html, write_report};
