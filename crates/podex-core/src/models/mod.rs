//! Data models for purchase-order extraction.

pub mod po;

pub use po::{LineItem, PurchaseOrder};
