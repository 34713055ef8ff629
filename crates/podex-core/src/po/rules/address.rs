//! Address-block normalization.
//!
//! Two stages, kept separate on purpose: `html_to_multiline` turns an
//! address cell's inner markup into plain multi-line text (structure), and
//! `address_lines` cleans the lines up for presentation. The join
//! delimiter is chosen by the rendering layer, never here.

use super::patterns::{BR_TAG, HTML_TAG};

/// Leading labels stripped from address lines.
const ADDRESS_LABELS: [&str; 2] = ["Bill To:", "Ship To:"];

/// Convert an HTML fragment to plain multi-line text.
///
/// Explicit `<br>` markers become newlines, all remaining markup is
/// stripped, and basic entities are decoded.
pub fn html_to_multiline(html: &str) -> String {
    let text = BR_TAG.replace_all(html, "\n");
    let text = HTML_TAG.replace_all(&text, "");
    unescape_entities(&text)
}

/// Clean up normalized address text for presentation.
///
/// Trims each line, drops blank lines, and strips known leading labels,
/// preserving line order.
pub fn address_lines(addr: &str) -> Vec<String> {
    addr.lines()
        .map(|line| {
            let mut line = line.trim();
            for label in ADDRESS_LABELS {
                line = line.strip_prefix(label).unwrap_or(line).trim_start();
            }
            line.to_string()
        })
        .filter(|line| !line.is_empty())
        .collect()
}

/// Decode the handful of entities address cells actually contain.
fn unescape_entities(s: &str) -> String {
    s.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}
