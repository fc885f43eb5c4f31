//! Listing data types.
//!
//! A [`ListingRecord`] is the single root entity: everything the renderer
//! needs to produce a listing description lives here. Field names serialise
//! in camelCase so snapshots written by earlier versions of the editor load
//! without migration.
//!
//! Every field carries `#[serde(default)]`. A half-filled JSON document is a
//! perfectly valid record; the renderer has a fallback for every gap.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One product listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListingRecord {
    /// Listing headline. The edit API caps it at [`TITLE_MAX_CHARS`].
    pub title: String,

    /// Internal account identifier. Never emitted into markup.
    pub account_id: String,

    pub main_images: Vec<ImageEntry>,

    /// Optional 4-up image grid shown under the main gallery.
    pub feature_images: Vec<ImageEntry>,

    /// Free text rendered under the feature grid.
    pub feature_images_footer: Option<String>,

    pub comparison_items: Vec<ComparisonItem>,

    /// Rows of the comparison table. Empty means "use the built-in rows",
    /// see [`crate::defaults::default_comparison_rows`].
    pub comparison_rows: Vec<ComparisonRow>,

    pub comparison_description: Option<String>,
    pub comparison_brand_bar: Option<String>,

    pub description: String,
    pub specifications: Vec<String>,
    pub package_includes: Vec<String>,

    /// Feature bullets. A leading `"LABEL:"` segment is emphasised.
    pub about_items: Vec<String>,

    pub shipping_info: ShippingInfo,

    pub about_us: String,
    pub logo_url: String,
    pub logo_alt: String,
    pub ebay_store_url: String,
}

/// Maximum title length accepted by [`crate::edit::Edit::SetTitle`].
pub const TITLE_MAX_CHARS: usize = 79;

impl ListingRecord {
    /// Rows the comparison table actually renders: the record's own rows, or
    /// the built-in set when it has none.
    pub fn effective_rows(&self) -> Vec<ComparisonRow> {
        if self.comparison_rows.is_empty() {
            crate::defaults::default_comparison_rows()
        } else {
            self.comparison_rows.clone()
        }
    }
}

/// A single image plus its click-through link and optional caption.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageEntry {
    /// Absolute URL or `data:` URL.
    pub url: String,
    pub alt: String,
    /// Click-through target. Blank means "fall back", see
    /// [`ImageEntry::link_target`].
    pub link: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bullets: Option<Vec<String>>,
}

impl ImageEntry {
    pub fn new(url: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            alt: alt.into(),
            ..Default::default()
        }
    }

    /// Where a click on this image goes: own link, else own url, else
    /// `fallback` (the store logo URL).
    pub fn link_target<'a>(&'a self, fallback: &'a str) -> &'a str {
        if !self.link.trim().is_empty() {
            &self.link
        } else if !self.url.is_empty() {
            &self.url
        } else {
            fallback
        }
    }

    /// Caption title, `None` when absent or empty.
    pub fn caption(&self) -> Option<&str> {
        non_empty(self.title.as_deref())
    }

    pub fn details_text(&self) -> Option<&str> {
        non_empty(self.details.as_deref())
    }

    /// Bullets, `None` when absent or empty.
    pub fn bullet_list(&self) -> Option<&[String]> {
        self.bullets.as_deref().filter(|b| !b.is_empty())
    }
}

/// JSON names of the fixed [`ComparisonItem`] fields. A row key may never
/// take one of these, since row values share the item's JSON object.
pub const RESERVED_ITEM_KEYS: [&str; 5] = ["id", "image", "imageAlt", "title", "link"];

/// Whether `key` names a fixed [`ComparisonItem`] field.
pub fn is_reserved_item_key(key: &str) -> bool {
    RESERVED_ITEM_KEYS.contains(&key)
}

/// One comparable product in the comparison table.
///
/// The fixed identity fields are struct fields; every row value (including
/// the legacy `price`, `material`, `lightSource`, `base`) lives in
/// [`ComparisonItem::fields`], which flattens into the same JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ComparisonItem {
    pub id: String,
    pub image: String,
    pub image_alt: String,
    pub title: String,
    pub link: String,
    #[serde(flatten)]
    pub fields: BTreeMap<String, String>,
}

impl ComparisonItem {
    /// Value stored under `key`, or `""` when the item has none.
    pub fn value(&self, key: &str) -> &str {
        self.fields.get(key).map(String::as_str).unwrap_or("")
    }

    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }
}

/// A `(label, key)` pair: one attribute line of the comparison table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub label: String,
    pub key: String,
}

impl ComparisonRow {
    pub fn new(label: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            key: key.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShippingInfo {
    pub free_shipping: String,
    pub first_class: String,
    pub international: String,
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|v| !v.is_empty())
}
