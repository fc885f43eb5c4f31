//! Comparison section: header texts and the comparison table.
//!
//! ## Column widths
//!
//! The label column takes a fixed [`LABEL_COLUMN_PERCENT`]; the remainder is
//! split evenly across the comparison items. With zero items the divisor is
//! clamped to 1 so the table still lays out. Widths are printed through
//! [`format_percent`] (at most four decimals), which keeps the output stable
//! across platforms instead of leaking `f64` shortest-repr noise.

use crate::model::ListingRecord;
use crate::render::styles::{COMPARISON_HEADER_CSS, COMPARISON_TABLE_CSS};

/// Width of the leftmost label column, in percent.
pub const LABEL_COLUMN_PERCENT: f64 = 5.0;

/// Percentage widths for the comparison table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnWidths {
    pub label: f64,
    pub item: f64,
    /// Number of item columns laid out (never 0).
    pub columns: usize,
}

impl ColumnWidths {
    pub fn for_items(count: usize) -> Self {
        let columns = count.max(1);
        Self {
            label: LABEL_COLUMN_PERCENT,
            item: (100.0 - LABEL_COLUMN_PERCENT) / columns as f64,
            columns,
        }
    }

    /// Sum of all column widths; 100 up to float error.
    pub fn total(&self) -> f64 {
        self.label + self.item * self.columns as f64
    }
}

/// Format a percentage with at most four decimals, trailing zeros trimmed.
///
/// `47.5` → `"47.5"`, `31.666…` → `"31.6667"`, `95.0` → `"95"`.
pub fn format_percent(value: f64) -> String {
    let s = format!("{value:.4}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s.is_empty() || s == "-" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

/// Styles plus the optional description paragraph and brand bar.
pub fn comparison_header(record: &ListingRecord) -> String {
    let mut html = format!("\n    {COMPARISON_HEADER_CSS}\n");

    if let Some(text) = non_empty(record.comparison_description.as_deref()) {
        html.push_str(&format!(
            r#"
    <div class="comparison-description" style="width:60%; margin:0 auto; text-align:center;">
        <p>{text}</p>
    </div>
"#
        ));
    }

    if let Some(text) = non_empty(record.comparison_brand_bar.as_deref()) {
        html.push_str(&format!(
            r#"
    <div class="comparison-brand-bar">
        <p>{text}</p>
    </div>
"#
        ));
    }

    html.push_str(
        r#"
    <h2 style="font-size:24px; font-weight:bold; margin:20px 0 20px 0; text-align:center; padding:0;">
        Compare with similar items
    </h2>
"#,
    );
    html
}

/// The comparison table: colgroup, header cards, one body row per
/// effective comparison row.
pub fn comparison_table(record: &ListingRecord) -> String {
    let widths = ColumnWidths::for_items(record.comparison_items.len());
    let label_w = format_percent(widths.label);
    let item_w = format_percent(widths.item);

    let mut cols = format!("<col style=\"width:{label_w}%;\" />");
    for _ in 0..widths.columns {
        cols.push_str(&format!("<col style=\"width:{item_w}%;\" />"));
    }

    let mut header_cells = String::new();
    for item in &record.comparison_items {
        let alt = if item.image_alt.is_empty() {
            &item.title
        } else {
            &item.image_alt
        };
        header_cells.push_str(&format!(
            r#"                    <td class="comparison-header-cell" style="width: {item_w}%">
                        <a href="{link}" target="_blank" style="text-decoration:none;">
                            <img src="{image}" alt="{alt}">
                            <p>{title}</p>
                            <button>Click here</button>
                        </a>
                    </td>
"#,
            link = item.link,
            image = item.image,
            title = item.title,
        ));
    }

    let mut body_rows = String::new();
    for row in record.effective_rows() {
        let cells: String = record
            .comparison_items
            .iter()
            .map(|item| {
                format!(
                    "<td class=\"comparison-row-cell\" style=\"width: {item_w}%;\">{}</td>",
                    item.value(&row.key)
                )
            })
            .collect();
        body_rows.push_str(&format!(
            r#"                <tr style="border-bottom: 1px solid #eee;">
                    <td class="comparison-row-label" style="width: {label_w}%;">{label}</td>
                    {cells}
                </tr>
"#,
            label = row.label,
        ));
    }

    format!(
        r#"
    <!-- Comparison Table -->
    {COMPARISON_TABLE_CSS}
    <div class="comparison-table-wrapper">
        <table class="comparison-table" cellspacing="0" cellpadding="0" border="0">
            <colgroup>{cols}</colgroup>
            <tbody>
                <tr>
                    <td style="padding:0; margin:0; width: {label_w}%;"></td>
{header_cells}                </tr>
{body_rows}            </tbody>
        </table>
    </div>
"#
    )
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|v| !v.trim().is_empty())
}
