//! Integration tests for the listing renderer, edits and session store.
//!
//! Everything here runs offline. The live-LLM tests at the bottom are gated
//! behind `E2E_ENABLED`.
//!
//! Run with:
//!   cargo test --test listing -- --nocapture

use listing2html::{
    apply,
    defaults::{default_comparison_rows, default_record},
    render, ColumnWidths, ComparisonItem, Copywriter, CopywriterConfig, Edit, ImageEntry,
    ImageList, ListingRecord, ListingStore, Session, StoreConfig, TextList,
};

// ── Test helpers ─────────────────────────────────────────────────────────────

fn item(id: &str, price: &str, material: &str) -> ComparisonItem {
    ComparisonItem {
        id: id.into(),
        image: format!("https://img/{id}.webp"),
        title: format!("Shade {id}"),
        link: format!("https://shop/itm/{id}"),
        ..Default::default()
    }
    .with_field("price", price)
    .with_field("material", material)
    .with_field("lightSource", "LED")
    .with_field("base", "E27")
}

fn count(html: &str, needle: &str) -> usize {
    html.matches(needle).count()
}

/// Comparison table markup, from its opening tag up to `</table>`.
fn comparison_table_html(html: &str) -> &str {
    let start = html
        .find("class=\"comparison-table\"")
        .expect("comparison table present");
    let rest = &html[start..];
    let end = rest.find("</table>").expect("table closed");
    &rest[..end]
}

// ── Rendering ────────────────────────────────────────────────────────────────

#[test]
fn end_to_end_example() {
    let rec = ListingRecord {
        title: "Lamp".into(),
        main_images: vec![ImageEntry::new("a.jpg", "front")],
        comparison_items: vec![item("1", "£7", "Metal"), item("2", "£8", "Glass")],
        comparison_rows: default_comparison_rows(),
        ..Default::default()
    };
    let html = render(&rec);

    assert_eq!(count(&html, "class=\"main-image-row\""), 1);
    assert!(html.contains(r#"<a href="a.jpg""#));
    assert_eq!(count(&html, "class=\"feature-images-container\""), 0);
    assert_eq!(count(&html, "class=\"feature-row\""), 0);

    let table = comparison_table_html(&html);
    assert_eq!(count(table, "class=\"comparison-header-cell\""), 2);
    assert_eq!(count(table, "class=\"comparison-row-label\""), 4);
    assert_eq!(count(table, "class=\"comparison-row-cell\""), 8);

    for row in table.split("class=\"comparison-row-label\"").skip(1) {
        let row = row.split("</tr>").next().unwrap_or("");
        assert_eq!(count(row, "class=\"comparison-row-cell\""), 2);
    }
}

#[test]
fn absent_optionals_emit_no_containers() {
    let rec = ListingRecord {
        main_images: vec![ImageEntry::new("a.jpg", "a")],
        ..Default::default()
    };
    let html = render(&rec);
    assert!(!html.contains("<h3 style=\"margin:6px"));
    assert!(!html.contains("<ul style=\"list-style: disc; margin:8px"));
    assert!(!html.contains("feature-images-container"));
    assert!(!html.contains("feature-images-footer"));
    assert!(!html.contains("class=\"comparison-description\""));
    assert!(!html.contains("class=\"comparison-brand-bar\""));
    assert!(!html.contains(">DESCRIPTION</strong>"));
}

#[test]
fn present_optionals_emit_containers() {
    let mut img = ImageEntry::new("a.jpg", "a");
    img.title = Some("Front".into());
    img.details = Some("Brushed finish".into());
    img.bullets = Some(vec!["Dimmable".into()]);
    let rec = ListingRecord {
        main_images: vec![img],
        feature_images: vec![ImageEntry::new("f.jpg", "f")],
        comparison_description: Some("FITS ANY ROOM".into()),
        comparison_brand_bar: Some("LEDSONE".into()),
        description: "Bright.".into(),
        ..Default::default()
    };
    let html = render(&rec);
    assert!(html.contains(">Front</h3>"));
    assert!(html.contains(">Brushed finish</p>"));
    assert!(html.contains("<li>Dimmable</li>"));
    assert!(html.contains("class=\"feature-images-container\""));
    assert!(html.contains("class=\"comparison-description\""));
    assert!(html.contains("class=\"comparison-brand-bar\""));
    assert!(html.contains(">DESCRIPTION</strong>"));
}

#[test]
fn column_widths_sum_to_hundred() {
    for n in 1..=40 {
        let w = ColumnWidths::for_items(n);
        assert!((w.total() - 100.0).abs() < 1e-9, "n = {n}");
    }
}

#[test]
fn link_fallback_chain() {
    let mut linked = ImageEntry::new("b.jpg", "");
    linked.link = "https://shop/b".into();
    let rec = ListingRecord {
        logo_url: "https://cdn/logo.gif".into(),
        main_images: vec![
            ImageEntry::new("a.jpg", ""),
            ImageEntry::default(),
            linked,
        ],
        ..Default::default()
    };
    let html = render(&rec);
    assert!(html.contains(r#"<a href="a.jpg""#));
    assert!(html.contains(r#"<a href="https://cdn/logo.gif""#));
    assert!(html.contains(r#"<a href="https://shop/b""#));
}

#[test]
fn feature_grid_rows_always_four_cells() {
    for n in 0usize..=13 {
        let rec = ListingRecord {
            feature_images: (0..n)
                .map(|i| ImageEntry::new(format!("f{i}.jpg"), ""))
                .collect(),
            ..Default::default()
        };
        let html = render(&rec);
        let rows: Vec<&str> = html.split("class=\"feature-row\"").skip(1).collect();
        assert_eq!(rows.len(), n.div_ceil(4), "n = {n}");
        for row in rows {
            let row = row.split("</tr>").next().unwrap_or("");
            assert_eq!(count(row, "class=\"feature-img-cell\""), 4, "n = {n}");
        }
        assert_eq!(count(&html, "<img src=\"f"), n);
    }
}

// ── Edits ────────────────────────────────────────────────────────────────────

#[test]
fn rename_material_to_build_material() {
    let rec = default_record();
    let index = rec
        .comparison_rows
        .iter()
        .position(|r| r.key == "material")
        .expect("material row");
    let next = apply(
        &rec,
        Edit::RenameRowKey {
            index,
            key: "build_material".into(),
        },
    );
    for (before, after) in rec.comparison_items.iter().zip(&next.comparison_items) {
        assert_eq!(after.value("build_material"), before.value("material"));
        assert!(!after.fields.contains_key("material"));
    }
    let html = render(&next);
    assert_eq!(count(comparison_table_html(&html), ">Metal</td>"), 5);
}

#[test]
fn remove_row_keeps_everything_else() {
    let rec = default_record();
    let next = apply(&rec, Edit::RemoveRow { key: "base".into() });
    assert_eq!(next.comparison_items.len(), rec.comparison_items.len());
    for (before, after) in rec.comparison_items.iter().zip(&next.comparison_items) {
        let mut expected = before.clone();
        expected.fields.remove("base");
        assert_eq!(after, &expected);
    }
    assert_eq!(
        count(comparison_table_html(&render(&next)), "class=\"comparison-row-label\""),
        3
    );
}

#[test]
fn edit_sequence_builds_a_listing() {
    let mut rec = ListingRecord::default();
    for edit in [
        Edit::SetTitle("Brass Pendant".into()),
        Edit::AddImage(ImageList::Main),
        Edit::UpdateImage {
            list: ImageList::Main,
            index: 0,
            field: listing2html::ImageField::Url,
            value: "a.jpg".into(),
        },
        Edit::AddText(TextList::AboutItems),
        Edit::SetText {
            list: TextList::AboutItems,
            index: 0,
            value: "FINISH: brushed brass".into(),
        },
        Edit::AddComparisonItem,
        Edit::SetComparisonField {
            index: 0,
            field: "price".into(),
            value: "£19".into(),
        },
    ] {
        rec = apply(&rec, edit);
    }

    let html = render(&rec);
    assert!(html.contains(">Brass Pendant</font>"));
    assert!(html.contains("<strong>FINISH:</strong> brushed brass"));
    assert!(html.contains(">£19</td>"));
    assert!(rec.comparison_rows.is_empty());
    assert_eq!(rec.effective_rows(), default_comparison_rows());
}

// ── Session + store ──────────────────────────────────────────────────────────

#[test]
fn session_persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let config = StoreConfig::builder().dir(dir.path()).build().unwrap();

    let mut session = Session::open(ListingStore::from_config(&config));
    session.apply(Edit::AddRow {
        label: "Wattage".into(),
    });
    session.apply(Edit::SetComparisonField {
        index: 0,
        field: "customRow1".into(),
        value: "40W".into(),
    });

    let reopened = Session::open(ListingStore::from_config(&config));
    assert_eq!(reopened.record().comparison_items[0].value("customRow1"), "40W");
    assert!(reopened.html().contains(">Wattage</td>"));
    assert!(reopened.html().contains(">40W</td>"));
}

#[test]
fn corrupt_durable_snapshot_falls_back_to_fast() {
    let dir = tempfile::tempdir().unwrap();
    let config = StoreConfig::builder().dir(dir.path()).build().unwrap();

    let mut rec = default_record();
    rec.title = "From fast tier".into();
    std::fs::create_dir_all(config.fast_dir()).unwrap();
    std::fs::create_dir_all(config.durable_dir()).unwrap();
    std::fs::write(
        config.fast_dir().join("listingData.json"),
        serde_json::to_string(&rec).unwrap(),
    )
    .unwrap();
    std::fs::write(config.durable_dir().join("listingData.json"), "{truncated").unwrap();

    let session = Session::open(ListingStore::from_config(&config));
    assert_eq!(session.record().title, "From fast tier");
}

// ── Live LLM (gated) ─────────────────────────────────────────────────────────

#[tokio::test]
async fn test_live_description() {
    if std::env::var("E2E_ENABLED").is_err() {
        println!("SKIP: set E2E_ENABLED=1 to run e2e tests");
        return;
    }
    let copywriter =
        Copywriter::from_config(CopywriterConfig::default()).expect("provider configured");
    let rec = copywriter.describe(&default_record()).await;
    println!("[live-description] {}", rec.description);
    assert!(!rec.description.trim().is_empty());
    assert!(!rec.description.contains("**"));
}

#[tokio::test]
async fn test_live_title() {
    if std::env::var("E2E_ENABLED").is_err() {
        println!("SKIP: set E2E_ENABLED=1 to run e2e tests");
        return;
    }
    let copywriter =
        Copywriter::from_config(CopywriterConfig::default()).expect("provider configured");
    let title = copywriter.optimize_title(&default_record().title).await;
    println!("[live-title] {title}");
    assert!(!title.is_empty());
    assert!(!title.contains('\n'));
}
