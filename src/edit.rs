//! Immutable edit operations on a [`ListingRecord`].
//!
//! Every edit takes the full prior record and returns a full new one; there
//! are no partial patches. A caller holding a record can never observe it
//! half-updated, and re-rendering after each edit is always consistent.
//!
//! Invalid edits (an index past the end, an over-long title) are no-ops: the
//! returned record equals the input.
//!
//! ## Comparison rows
//!
//! Row keys are unique and never collide with the fixed item fields (`id`,
//! `image`, `imageAlt`, `title`, `link`). [`Edit::RenameRowKey`] migrates every item's value
//! from the old key to the new one, and [`Edit::RemoveRow`] drops the key
//! from every item. When a record still relies on the built-in rows, row
//! edits first materialise those rows into the record.

use crate::model::{
    is_reserved_item_key, ComparisonItem, ComparisonRow, ImageEntry, ListingRecord, TITLE_MAX_CHARS,
};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Which image list an image edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageList {
    Main,
    Feature,
}

/// Editable attribute of an [`ImageEntry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageField {
    Url,
    Alt,
    Link,
    Title,
    Details,
}

/// Which bullet list a text edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextList {
    Specifications,
    PackageIncludes,
    AboutItems,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShippingField {
    FreeShipping,
    FirstClass,
    International,
}

/// One user edit.
#[derive(Debug, Clone, PartialEq)]
pub enum Edit {
    /// Rejected (no-op) when longer than [`TITLE_MAX_CHARS`] characters.
    SetTitle(String),
    SetAccount(String),
    SetDescription(String),
    SetAboutUs(String),
    SetLogoUrl(String),
    SetLogoAlt(String),
    SetStoreUrl(String),
    SetComparisonDescription(String),
    SetComparisonBrandBar(String),
    SetFeatureFooter(String),
    SetShipping { field: ShippingField, value: String },

    AddImage(ImageList),
    RemoveImage { list: ImageList, index: usize },
    UpdateImage {
        list: ImageList,
        index: usize,
        field: ImageField,
        value: String,
    },
    AddBullet { image: usize },
    SetBullet { image: usize, bullet: usize, value: String },
    RemoveBullet { image: usize, bullet: usize },

    AddText(TextList),
    SetText { list: TextList, index: usize, value: String },
    RemoveText { list: TextList, index: usize },

    AddComparisonItem,
    RemoveComparisonItem { index: usize },
    /// `field` is `image`, `imageAlt`, `title`, `link`, or any row key.
    SetComparisonField {
        index: usize,
        field: String,
        value: String,
    },
    AddRow { label: String },
    RenameRowKey { index: usize, key: String },
    SetRowLabel { index: usize, label: String },
    RemoveRow { key: String },
}

/// Apply `edit` to `record`, returning the new record.
pub fn apply(record: &ListingRecord, edit: Edit) -> ListingRecord {
    let mut next = record.clone();

    match edit {
        Edit::SetTitle(title) => {
            let len = title.chars().count();
            if len > TITLE_MAX_CHARS {
                debug!("title rejected: {} chars > {}", len, TITLE_MAX_CHARS);
            } else {
                next.title = title;
            }
        }
        Edit::SetAccount(id) => next.account_id = id,
        Edit::SetDescription(text) => next.description = text,
        Edit::SetAboutUs(text) => next.about_us = text,
        Edit::SetLogoUrl(url) => next.logo_url = url,
        Edit::SetLogoAlt(alt) => next.logo_alt = alt,
        Edit::SetStoreUrl(url) => next.ebay_store_url = url,
        Edit::SetComparisonDescription(text) => next.comparison_description = Some(text),
        Edit::SetComparisonBrandBar(text) => next.comparison_brand_bar = Some(text),
        Edit::SetFeatureFooter(text) => next.feature_images_footer = Some(text),
        Edit::SetShipping { field, value } => {
            let info = &mut next.shipping_info;
            match field {
                ShippingField::FreeShipping => info.free_shipping = value,
                ShippingField::FirstClass => info.first_class = value,
                ShippingField::International => info.international = value,
            }
        }

        Edit::AddImage(list) => images_mut(&mut next, list).push(ImageEntry::default()),
        Edit::RemoveImage { list, index } => {
            remove_at(images_mut(&mut next, list), index, "image");
        }
        Edit::UpdateImage {
            list,
            index,
            field,
            value,
        } => match images_mut(&mut next, list).get_mut(index) {
            Some(img) => match field {
                ImageField::Url => img.url = value,
                ImageField::Alt => img.alt = value,
                ImageField::Link => img.link = value,
                ImageField::Title => img.title = Some(value),
                ImageField::Details => img.details = Some(value),
            },
            None => debug!("image {} out of range", index),
        },
        Edit::AddBullet { image } => match next.main_images.get_mut(image) {
            Some(img) => img.bullets.get_or_insert_with(Vec::new).push(String::new()),
            None => debug!("image {} out of range", image),
        },
        Edit::SetBullet {
            image,
            bullet,
            value,
        } => {
            let slot = next
                .main_images
                .get_mut(image)
                .and_then(|img| img.bullets.as_mut())
                .and_then(|b| b.get_mut(bullet));
            match slot {
                Some(b) => *b = value,
                None => debug!("bullet {}/{} out of range", image, bullet),
            }
        }
        Edit::RemoveBullet { image, bullet } => {
            match next
                .main_images
                .get_mut(image)
                .and_then(|img| img.bullets.as_mut())
            {
                Some(bullets) => remove_at(bullets, bullet, "bullet"),
                None => debug!("image {} has no bullets", image),
            }
        }

        Edit::AddText(list) => texts_mut(&mut next, list).push(String::new()),
        Edit::SetText { list, index, value } => match texts_mut(&mut next, list).get_mut(index) {
            Some(slot) => *slot = value,
            None => debug!("text {} out of range", index),
        },
        Edit::RemoveText { list, index } => remove_at(texts_mut(&mut next, list), index, "text"),

        Edit::AddComparisonItem => {
            let id = next_item_id(&next.comparison_items);
            let mut item = ComparisonItem {
                id,
                ..Default::default()
            };
            for row in next.effective_rows() {
                if !is_reserved_item_key(&row.key) {
                    item.fields.insert(row.key, String::new());
                }
            }
            next.comparison_items.push(item);
        }
        Edit::RemoveComparisonItem { index } => {
            remove_at(&mut next.comparison_items, index, "comparison item");
        }
        Edit::SetComparisonField {
            index,
            field,
            value,
        } => match next.comparison_items.get_mut(index) {
            Some(item) => match field.as_str() {
                "image" => item.image = value,
                "imageAlt" => item.image_alt = value,
                "title" => item.title = value,
                "link" => item.link = value,
                "id" => debug!("comparison item id is immutable"),
                _ => {
                    item.fields.insert(field, value);
                }
            },
            None => debug!("comparison item {} out of range", index),
        },
        Edit::AddRow { label } => {
            materialise_rows(&mut next);
            let key = first_free_custom_key(&next.comparison_rows);
            for item in &mut next.comparison_items {
                item.fields.insert(key.clone(), String::new());
            }
            next.comparison_rows.push(ComparisonRow::new(label, key));
        }
        Edit::RenameRowKey { index, key } => {
            materialise_rows(&mut next);
            rename_row_key(&mut next, index, &key);
        }
        Edit::SetRowLabel { index, label } => {
            materialise_rows(&mut next);
            match next.comparison_rows.get_mut(index) {
                Some(row) => row.label = label,
                None => debug!("row {} out of range", index),
            }
        }
        Edit::RemoveRow { key } => {
            materialise_rows(&mut next);
            next.comparison_rows.retain(|r| r.key != key);
            for item in &mut next.comparison_items {
                item.fields.remove(&key);
            }
        }
    }

    next
}

/// Normalise a user-typed row key: whitespace runs become `_`, blank becomes
/// `custom`.
pub fn normalise_key(raw: &str) -> String {
    let key = WHITESPACE_RUN.replace_all(raw.trim(), "_");
    if key.is_empty() {
        "custom".to_string()
    } else {
        key.into_owned()
    }
}

fn rename_row_key(record: &mut ListingRecord, index: usize, raw: &str) {
    let Some(old_key) = record.comparison_rows.get(index).map(|r| r.key.clone()) else {
        debug!("row {} out of range", index);
        return;
    };

    let desired = normalise_key(raw);
    let taken = |candidate: &str| {
        is_reserved_item_key(candidate)
            || record
                .comparison_rows
                .iter()
                .enumerate()
                .any(|(i, r)| i != index && r.key == candidate)
    };
    let mut new_key = desired.clone();
    let mut suffix = 1;
    while taken(&new_key) {
        new_key = format!("{desired}{suffix}");
        suffix += 1;
    }

    if new_key == old_key {
        return;
    }

    record.comparison_rows[index].key = new_key.clone();
    for item in &mut record.comparison_items {
        if let Some(value) = item.fields.remove(&old_key) {
            item.fields.insert(new_key.clone(), value);
        }
    }
    debug!("renamed row key '{}' -> '{}'", old_key, new_key);
}

fn materialise_rows(record: &mut ListingRecord) {
    if record.comparison_rows.is_empty() {
        record.comparison_rows = crate::defaults::default_comparison_rows();
    }
}

fn first_free_custom_key(rows: &[ComparisonRow]) -> String {
    (1..)
        .map(|n| format!("customRow{n}"))
        .find(|k| !rows.iter().any(|r| &r.key == k))
        .unwrap_or_else(|| "customRow".to_string())
}

fn next_item_id(items: &[ComparisonItem]) -> String {
    let max = items
        .iter()
        .filter_map(|i| i.id.parse::<u64>().ok())
        .max()
        .unwrap_or(0);
    (max + 1..)
        .map(|n| n.to_string())
        .find(|id| !items.iter().any(|i| &i.id == id))
        .unwrap_or_default()
}

fn images_mut(record: &mut ListingRecord, list: ImageList) -> &mut Vec<ImageEntry> {
    match list {
        ImageList::Main => &mut record.main_images,
        ImageList::Feature => &mut record.feature_images,
    }
}

fn texts_mut(record: &mut ListingRecord, list: TextList) -> &mut Vec<String> {
    match list {
        TextList::Specifications => &mut record.specifications,
        TextList::PackageIncludes => &mut record.package_includes,
        TextList::AboutItems => &mut record.about_items,
    }
}

fn remove_at<T>(items: &mut Vec<T>, index: usize, what: &str) {
    if index < items.len() {
        items.remove(index);
    } else {
        debug!("{} {} out of range", what, index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::{default_comparison_rows, default_record};

    fn two_item_record() -> ListingRecord {
        let item = |id: &str, material: &str| {
            ComparisonItem {
                id: id.into(),
                title: format!("Shade {id}"),
                ..Default::default()
            }
            .with_field("price", "£9")
            .with_field("material", material)
        };
        ListingRecord {
            comparison_items: vec![item("1", "Metal"), item("2", "Glass")],
            comparison_rows: default_comparison_rows(),
            ..Default::default()
        }
    }

    #[test]
    fn rename_migrates_values() {
        let rec = two_item_record();
        let next = apply(
            &rec,
            Edit::RenameRowKey {
                index: 1,
                key: "build_material".into(),
            },
        );
        assert_eq!(next.comparison_rows[1].key, "build_material");
        assert_eq!(next.comparison_items[0].value("build_material"), "Metal");
        assert_eq!(next.comparison_items[1].value("build_material"), "Glass");
        for item in &next.comparison_items {
            assert!(!item.fields.contains_key("material"));
        }
        // prior record untouched
        assert_eq!(rec.comparison_rows[1].key, "material");
    }

    #[test]
    fn rename_normalises_and_dedups() {
        let rec = two_item_record();
        let next = apply(
            &rec,
            Edit::RenameRowKey {
                index: 3,
                key: "  light   source ".into(),
            },
        );
        assert_eq!(next.comparison_rows[3].key, "light_source");

        let next = apply(
            &rec,
            Edit::RenameRowKey {
                index: 3,
                key: "price".into(),
            },
        );
        assert_eq!(next.comparison_rows[3].key, "price1");

        let next = apply(
            &rec,
            Edit::RenameRowKey {
                index: 0,
                key: "   ".into(),
            },
        );
        assert_eq!(next.comparison_rows[0].key, "custom");
        assert_eq!(next.comparison_items[0].value("custom"), "£9");
    }

    #[test]
    fn rename_onto_fixed_field_gets_suffix() {
        let rec = two_item_record();
        let next = apply(
            &rec,
            Edit::RenameRowKey {
                index: 0,
                key: "title".into(),
            },
        );
        assert_eq!(next.comparison_rows[0].key, "title1");
        assert_eq!(next.comparison_items[0].title, "Shade 1");
        assert_eq!(next.comparison_items[0].value("title1"), "£9");

        let json = serde_json::to_string(&next).unwrap();
        let back: ListingRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, next);
    }

    #[test]
    fn remove_row_strips_key_only() {
        let rec = two_item_record();
        let next = apply(
            &rec,
            Edit::RemoveRow {
                key: "material".into(),
            },
        );
        assert_eq!(next.comparison_items.len(), 2);
        assert_eq!(next.comparison_rows.len(), 3);
        for (before, after) in rec.comparison_items.iter().zip(&next.comparison_items) {
            assert!(!after.fields.contains_key("material"));
            assert_eq!(after.value("price"), before.value("price"));
            assert_eq!(after.title, before.title);
            assert_eq!(after.fields.len(), before.fields.len() - 1);
        }
    }

    #[test]
    fn add_row_picks_first_free_key() {
        let rec = two_item_record();
        let next = apply(&rec, Edit::AddRow { label: "Wattage".into() });
        let next = apply(&next, Edit::AddRow { label: "Colour".into() });
        let keys: Vec<&str> = next.comparison_rows.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys[4..], ["customRow1", "customRow2"]);
        for item in &next.comparison_items {
            assert_eq!(item.fields.get("customRow2").map(String::as_str), Some(""));
        }

        let removed = apply(&next, Edit::RemoveRow { key: "customRow1".into() });
        let readded = apply(&removed, Edit::AddRow { label: "Again".into() });
        assert_eq!(readded.comparison_rows.last().unwrap().key, "customRow1");
    }

    #[test]
    fn row_edits_materialise_defaults() {
        let rec = ListingRecord {
            comparison_rows: vec![],
            ..two_item_record()
        };
        let next = apply(&rec, Edit::RemoveRow { key: "base".into() });
        let keys: Vec<&str> = next.comparison_rows.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, ["price", "material", "lightSource"]);
    }

    #[test]
    fn title_limit_enforced() {
        let rec = default_record();
        let long = "x".repeat(TITLE_MAX_CHARS + 1);
        assert_eq!(apply(&rec, Edit::SetTitle(long)), rec);
        let ok = "y".repeat(TITLE_MAX_CHARS);
        assert_eq!(apply(&rec, Edit::SetTitle(ok.clone())).title, ok);
    }

    #[test]
    fn out_of_range_is_noop() {
        let rec = default_record();
        let edits = [
            Edit::RemoveImage {
                list: ImageList::Feature,
                index: 3,
            },
            Edit::SetText {
                list: TextList::AboutItems,
                index: 99,
                value: "x".into(),
            },
            Edit::SetBullet {
                image: 0,
                bullet: 0,
                value: "x".into(),
            },
            Edit::RenameRowKey {
                index: 10,
                key: "k".into(),
            },
            Edit::RemoveComparisonItem { index: 42 },
        ];
        for edit in edits {
            assert_eq!(apply(&rec, edit.clone()), rec, "{edit:?}");
        }
    }

    #[test]
    fn bullets_lifecycle() {
        let rec = ListingRecord {
            main_images: vec![ImageEntry::new("a.jpg", "")],
            ..Default::default()
        };
        let rec = apply(&rec, Edit::AddBullet { image: 0 });
        let rec = apply(
            &rec,
            Edit::SetBullet {
                image: 0,
                bullet: 0,
                value: "Dimmable".into(),
            },
        );
        assert_eq!(rec.main_images[0].bullets, Some(vec!["Dimmable".to_string()]));
        let rec = apply(&rec, Edit::RemoveBullet { image: 0, bullet: 0 });
        assert_eq!(rec.main_images[0].bullets, Some(vec![]));
    }

    #[test]
    fn new_comparison_item_gets_every_row_key() {
        let rec = two_item_record();
        let next = apply(&rec, Edit::AddComparisonItem);
        let added = next.comparison_items.last().unwrap();
        assert_eq!(added.id, "3");
        for row in &next.comparison_rows {
            assert_eq!(added.fields.get(&row.key).map(String::as_str), Some(""));
        }
    }

    #[test]
    fn comparison_field_routes_fixed_and_dynamic() {
        let rec = two_item_record();
        let next = apply(
            &rec,
            Edit::SetComparisonField {
                index: 1,
                field: "title".into(),
                value: "Glass Dome".into(),
            },
        );
        let next = apply(
            &next,
            Edit::SetComparisonField {
                index: 1,
                field: "base".into(),
                value: "E14".into(),
            },
        );
        assert_eq!(next.comparison_items[1].title, "Glass Dome");
        assert_eq!(next.comparison_items[1].value("base"), "E14");
        assert!(!next.comparison_items[1].fields.contains_key("title"));
        assert_eq!(next.comparison_items[0], rec.comparison_items[0]);
    }
}
