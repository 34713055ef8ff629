//! Purchase-order extraction module.

mod extractor;
mod rows;
pub mod rules;

pub use extractor::{extract_po, PoExtraction, Zone};
pub use rows::pair_line_items;
