//! Rule-based field extractors for purchase-order documents.

pub mod address;
pub mod details;
pub mod identifiers;
pub mod patterns;

pub use address::{address_lines, html_to_multiline};
pub use details::{extract_detail_field, DetailLabel};
pub use identifiers::{extract_identifiers, ItemIdentifiers};
