//! Listing renderer: [`ListingRecord`] → self-contained HTML fragment.
//!
//! [`render`] is pure and total. It performs no I/O, holds no state, and has
//! no error path: every optional field has a defined fallback, so calling it
//! on a half-edited record is always safe. The same record always yields
//! byte-identical output.
//!
//! ## Section order
//!
//! ```text
//! title ──▶ gallery ──▶ feature grid ──▶ comparison header ──▶ table ──▶ panels
//!           (main)      (4-up, opt.)     (desc + brand bar)             (details)
//! ```
//!
//! 1. `title_block`: centred heading, title verbatim
//! 2. [`gallery::main_gallery`]: one row per main image with click-through
//! 3. [`gallery::feature_grid`]: rows of exactly four cells, padded
//! 4. [`comparison::comparison_header`]: optional description and brand bar
//! 5. [`comparison::comparison_table`]: percentage column widths
//! 6. [`panels::detail_panels`]: five collapsible `<details>` blocks
//!
//! Free text is embedded without escaping: listing content is authored by the
//! operator and routinely carries inline markup (`<br>`, `<b>`).

pub mod comparison;
pub mod gallery;
pub mod panels;
pub mod styles;

use crate::model::ListingRecord;
use tracing::trace;

pub use comparison::{format_percent, ColumnWidths, LABEL_COLUMN_PERCENT};
pub use gallery::{feature_rows, FEATURE_COLUMNS};

/// Render a listing into one HTML fragment.
pub fn render(record: &ListingRecord) -> String {
    trace!(
        main_images = record.main_images.len(),
        feature_images = record.feature_images.len(),
        comparison_items = record.comparison_items.len(),
        "rendering listing"
    );

    let mut html = String::with_capacity(32 * 1024);

    html.push_str("\n<!-- Generated by listing2html -->\n");
    html.push_str(
        "<div style=\"font-family: 'Verdana', sans-serif; color: #333; max-width:100%; \
margin: 0 auto; padding: 0; margin-bottom: 0;\">\n",
    );

    html.push_str(&title_block(&record.title));

    html.push_str(
        "    <table width=\"100%\" cellspacing=\"0\" cellpadding=\"0\" border=\"0\" \
align=\"center\" style=\"margin:10px 0; padding:0;\">\n        <tbody>\n",
    );
    html.push_str(&gallery::main_gallery(record));
    html.push_str(&gallery::feature_grid(record));
    html.push_str("        </tbody>\n    </table>\n");

    html.push_str(&comparison::comparison_header(record));
    html.push_str(&comparison::comparison_table(record));
    html.push_str(&panels::detail_panels(record));

    html.push_str("</div>\n");
    html
}

/// Section 1: the centred listing headline.
fn title_block(title: &str) -> String {
    format!(
        r##"    <h2 style="padding: 0; margin: 0; text-align: center; max-width: 100%;">
        <span style="display: inline-block; padding: 10px 20px; text-align: center; background-color: transparent;">
        <font color="#212529" face="Verdana" size="6.8">{title}</font>
        </span>
    </h2>
"##
    )
}
