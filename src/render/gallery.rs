//! Main image gallery and the 4-up feature grid.

use crate::model::{ImageEntry, ListingRecord};
use crate::render::styles::FEATURE_GRID_CSS;

/// Cells per feature-grid row.
pub const FEATURE_COLUMNS: usize = 4;

/// One row per main image: the linked image, then its optional caption,
/// details paragraph and bullets. Empty parts emit nothing.
pub fn main_gallery(record: &ListingRecord) -> String {
    let mut html = String::new();

    for (index, img) in record.main_images.iter().enumerate() {
        let link = img.link_target(&record.logo_url);
        let alt = if img.alt.is_empty() {
            format!("{} - Image {}", record.title, index + 1)
        } else {
            img.alt.clone()
        };

        html.push_str(&format!(
            r#"            <tr class="main-image-row">
                <td align="center" style="padding:0; margin:0; line-height:0;">
                    <a href="{link}" target="_blank" style="text-decoration:none;">
                        <img src="{src}" alt="{alt}" style="max-width:100%; height:auto; display:block; margin:0; padding:0;" />
                    </a>
                </td>
            </tr>
"#,
            src = img.url,
        ));

        let caption = image_caption(img);
        if !caption.is_empty() {
            html.push_str(&format!(
                "            <tr>\n                <td style=\"padding: 0; text-align:center;\">\n{caption}                </td>\n            </tr>\n"
            ));
        }
    }

    html
}

fn image_caption(img: &ImageEntry) -> String {
    let mut html = String::new();
    if let Some(title) = img.caption() {
        html.push_str(&format!(
            "                    <h3 style=\"margin:6px 0 4px; font-size:18px; color:#222;\">{title}</h3>\n"
        ));
    }
    if let Some(details) = img.details_text() {
        html.push_str(&format!(
            "                    <p style=\"margin:0 0 8px; color:#555;\">{details}</p>\n"
        ));
    }
    if let Some(bullets) = img.bullet_list() {
        let items: String = bullets.iter().map(|b| format!("<li>{b}</li>")).collect();
        html.push_str(&format!(
            "                    <ul style=\"list-style: disc; margin:8px auto 0; padding-left:20px; text-align:left; max-width:600px;\">{items}</ul>\n"
        ));
    }
    html
}

/// Partition images into rows of exactly [`FEATURE_COLUMNS`] slots; the last
/// row is padded with `None`.
pub fn feature_rows(images: &[ImageEntry]) -> Vec<[Option<&ImageEntry>; FEATURE_COLUMNS]> {
    images
        .chunks(FEATURE_COLUMNS)
        .map(|chunk| {
            let mut row = [None; FEATURE_COLUMNS];
            for (slot, img) in row.iter_mut().zip(chunk) {
                *slot = Some(img);
            }
            row
        })
        .collect()
}

/// The feature grid, or an empty string when there are no feature images.
///
/// Emitted as its own gallery row so the surrounding table stays well-formed.
pub fn feature_grid(record: &ListingRecord) -> String {
    if record.feature_images.is_empty() {
        return String::new();
    }

    let mut rows = String::new();
    for row in feature_rows(&record.feature_images) {
        rows.push_str("                            <tr class=\"feature-row\">\n");
        for slot in row {
            rows.push_str(&feature_cell(slot, record));
        }
        rows.push_str("                            </tr>\n");
    }

    let footer = match record.feature_images_footer.as_deref() {
        Some(text) if !text.trim().is_empty() => format!(
            "                    <div class=\"feature-images-footer\" style=\"margin-top:10px; color:#555;\">{text}</div>\n"
        ),
        _ => String::new(),
    };

    format!(
        r#"            <tr>
                <td style="padding:0;">
{FEATURE_GRID_CSS}
                <div class="feature-images-container">
                    <table class="feature-images-table" cellspacing="0" cellpadding="0" border="0" align="center">
{rows}                    </table>
{footer}                </div>
                </td>
            </tr>
"#
    )
}

const FEATURE_CELL_STYLE: &str = "width:25%; padding:10px; text-align:center; vertical-align:top;";

fn feature_cell(slot: Option<&ImageEntry>, record: &ListingRecord) -> String {
    let Some(img) = slot else {
        return format!(
            "                                <td class=\"feature-img-cell\" style=\"{FEATURE_CELL_STYLE}\"></td>\n"
        );
    };

    let link = img.link_target(&record.logo_url);
    let alt = if img.alt.is_empty() {
        record.title.as_str()
    } else {
        img.alt.as_str()
    };

    let mut cell = format!(
        r#"                                <td class="feature-img-cell" style="{FEATURE_CELL_STYLE}">
                                    <a href="{link}" target="_blank" style="text-decoration:none; display:block;">
                                        <img src="{src}" alt="{alt}" />
                                    </a>
"#,
        src = img.url,
    );
    if let Some(title) = img.caption() {
        cell.push_str(&format!(
            "                                    <div style=\"font-weight:bold; color:#222; margin-bottom:6px;\">{title}</div>\n"
        ));
    }
    if let Some(details) = img.details_text() {
        cell.push_str(&format!(
            "                                    <div style=\"color:#555; font-size:14px;\">{details}</div>\n"
        ));
    }
    cell.push_str("                                </td>\n");
    cell
}

#[cfg(test)]
mod tests {
    use super::*;

    fn images(n: usize) -> Vec<ImageEntry> {
        (0..n)
            .map(|i| ImageEntry::new(format!("f{i}.jpg"), format!("feature {i}")))
            .collect()
    }

    #[test]
    fn feature_rows_pad_last_row() {
        let imgs = images(5);
        let rows = feature_rows(&imgs);
        assert_eq!(rows.len(), 2);
        assert!(rows[0].iter().all(Option::is_some));
        assert!(rows[1][0].is_some());
        assert!(rows[1][1..].iter().all(Option::is_none));
    }

    #[test]
    fn feature_rows_exact_multiple() {
        assert_eq!(feature_rows(&images(8)).len(), 2);
        assert!(feature_rows(&images(0)).is_empty());
    }

    #[test]
    fn feature_grid_every_row_has_four_cells() {
        for n in 1..=9 {
            let rec = ListingRecord {
                feature_images: images(n),
                ..Default::default()
            };
            let html = feature_grid(&rec);
            let rows: Vec<&str> = html.split("<tr class=\"feature-row\">").skip(1).collect();
            assert_eq!(rows.len(), n.div_ceil(FEATURE_COLUMNS), "n = {n}");
            for row in &rows {
                let row = row.split("</tr>").next().unwrap_or("");
                assert_eq!(row.matches("class=\"feature-img-cell\"").count(), 4, "n = {n}");
            }
            let empty_cells = html.matches(&format!("style=\"{FEATURE_CELL_STYLE}\"></td>")).count();
            assert_eq!(empty_cells, (FEATURE_COLUMNS - n % FEATURE_COLUMNS) % FEATURE_COLUMNS);
        }
    }

    #[test]
    fn feature_grid_absent_when_empty() {
        assert!(feature_grid(&ListingRecord::default()).is_empty());
    }

    #[test]
    fn feature_footer_rendered_under_grid() {
        let rec = ListingRecord {
            feature_images: images(1),
            feature_images_footer: Some("Hall / Kitchen / Office / Cafe".into()),
            ..Default::default()
        };
        let html = feature_grid(&rec);
        assert!(html.contains("Hall / Kitchen / Office / Cafe"));
        assert!(html.find("</table>").unwrap() < html.find("feature-images-footer").unwrap());
    }

    #[test]
    fn main_image_without_link_uses_url() {
        let rec = ListingRecord {
            logo_url: "logo.gif".into(),
            main_images: vec![ImageEntry::new("a.jpg", "front")],
            ..Default::default()
        };
        assert!(main_gallery(&rec).contains(r#"<a href="a.jpg""#));
    }

    #[test]
    fn main_image_without_link_or_url_uses_logo() {
        let rec = ListingRecord {
            logo_url: "logo.gif".into(),
            main_images: vec![ImageEntry::default()],
            ..Default::default()
        };
        assert!(main_gallery(&rec).contains(r#"<a href="logo.gif""#));
    }

    #[test]
    fn main_image_alt_falls_back_to_title() {
        let rec = ListingRecord {
            title: "Lamp".into(),
            main_images: vec![ImageEntry::new("a.jpg", ""), ImageEntry::new("b.jpg", "")],
            ..Default::default()
        };
        let html = main_gallery(&rec);
        assert!(html.contains(r#"alt="Lamp - Image 1""#));
        assert!(html.contains(r#"alt="Lamp - Image 2""#));
    }

    #[test]
    fn caption_parts_are_conditional() {
        let mut img = ImageEntry::new("a.jpg", "a");
        let rec = ListingRecord {
            main_images: vec![img.clone()],
            ..Default::default()
        };
        let bare = main_gallery(&rec);
        assert!(!bare.contains("<h3"));
        assert!(!bare.contains("<ul"));
        assert!(!bare.contains("margin:0 0 8px"));

        img.title = Some("Front".into());
        img.bullets = Some(vec!["Metal".into(), "LED".into()]);
        let rec = ListingRecord {
            main_images: vec![img],
            ..Default::default()
        };
        let full = main_gallery(&rec);
        assert!(full.contains(">Front</h3>"));
        assert!(full.contains("<li>Metal</li><li>LED</li>"));
        assert!(!full.contains("margin:0 0 8px"));
    }
}
