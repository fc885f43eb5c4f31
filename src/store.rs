//! Two-tier persistence of the listing record.
//!
//! ```text
//! save ──▶ serialise once ──┬─▶ fast tier     (size-limited, failure ignored)
//!                           └─▶ durable tier  (failure logged + reported)
//!
//! load ──▶ durable? ──no──▶ fast? ──no──▶ default record
//!             │ yes            │ yes
//!             └──────┬─────────┘
//!                    ▼
//!          merge with defaults
//! ```
//!
//! A failed save never stops editing: [`ListingStore::save`] reports per-tier
//! failures in a [`SaveReport`] instead of returning an error.
//!
//! ## Merge rules
//!
//! A loaded snapshot is merged field by field against
//! [`crate::defaults::default_record`]. Absent or `null` fields take the
//! default. `mainImages`, `comparisonItems`, `comparisonDescription` and
//! `comparisonBrandBar` also take the default when present but empty.
//! `featureImages` falls back to an empty list, never to the defaults.
//! Every other field keeps a present-but-empty value as saved, so a cleared
//! `description` or `specifications` list stays cleared across a reload.

use crate::config::StoreConfig;
use crate::defaults::default_record;
use crate::error::StoreError;
use crate::model::{ComparisonItem, ComparisonRow, ImageEntry, ListingRecord, ShippingInfo};
use serde::Deserialize;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Key under which the record is stored in both tiers.
pub const DEFAULT_KEY: &str = "listingData";

/// A string key-value backend.
pub trait KvStore: Send + Sync {
    /// `Ok(None)` when nothing is stored under `key`.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn put(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// One directory, one `<key>.json` file per key.
#[derive(Debug, Clone)]
pub struct FileStore {
    tier: &'static str,
    dir: PathBuf,
    limit: Option<usize>,
}

impl FileStore {
    pub fn new(tier: &'static str, dir: impl Into<PathBuf>) -> Self {
        Self {
            tier,
            dir: dir.into(),
            limit: None,
        }
    }

    /// Reject values larger than `limit` bytes.
    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    fn io_err(&self, path: &Path, source: std::io::Error) -> StoreError {
        StoreError::Io {
            tier: self.tier,
            path: path.to_path_buf(),
            source,
        }
    }
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.path_for(key);
        match std::fs::read_to_string(&path) {
            Ok(s) => Ok(Some(s)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(self.io_err(&path, e)),
        }
    }

    /// Atomic: written to a temp file in the same directory, then renamed.
    fn put(&self, key: &str, value: &str) -> Result<(), StoreError> {
        if let Some(limit) = self.limit {
            if value.len() > limit {
                return Err(StoreError::QuotaExceeded {
                    tier: self.tier,
                    size: value.len(),
                    limit,
                });
            }
        }

        std::fs::create_dir_all(&self.dir).map_err(|e| self.io_err(&self.dir, e))?;
        let path = self.path_for(key);

        let mut tmp =
            tempfile::NamedTempFile::new_in(&self.dir).map_err(|e| self.io_err(&self.dir, e))?;
        tmp.write_all(value.as_bytes())
            .map_err(|e| self.io_err(tmp.path(), e))?;
        tmp.persist(&path).map_err(|e| self.io_err(&path, e.error))?;
        Ok(())
    }
}

/// Per-tier outcome of one [`ListingStore::save`].
#[derive(Debug, Default)]
pub struct SaveReport {
    pub fast: Option<StoreError>,
    pub durable: Option<StoreError>,
}

impl SaveReport {
    /// True when the durable tier accepted the snapshot.
    pub fn is_durable(&self) -> bool {
        self.durable.is_none()
    }
}

/// The fast and durable tiers behind one key.
#[derive(Clone)]
pub struct ListingStore {
    fast: Arc<dyn KvStore>,
    durable: Arc<dyn KvStore>,
    key: String,
}

impl ListingStore {
    pub fn new(fast: Arc<dyn KvStore>, durable: Arc<dyn KvStore>) -> Self {
        Self {
            fast,
            durable,
            key: DEFAULT_KEY.to_string(),
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// File-backed tiers under `config.dir`.
    pub fn from_config(config: &StoreConfig) -> Self {
        let fast = FileStore::new("fast", config.fast_dir()).with_limit(config.fast_limit);
        let durable = FileStore::new("durable", config.durable_dir());
        Self::new(Arc::new(fast), Arc::new(durable)).with_key(config.key.clone())
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Persist `record` to both tiers.
    pub fn save(&self, record: &ListingRecord) -> SaveReport {
        let json = match serde_json::to_string(record) {
            Ok(json) => json,
            Err(e) => {
                warn!("Could not serialise listing: {}", e);
                return SaveReport {
                    fast: None,
                    durable: Some(StoreError::Serialize(e)),
                };
            }
        };

        let mut report = SaveReport::default();

        if let Err(e) = self.fast.put(&self.key, &json) {
            debug!("fast tier save skipped: {}", e);
            report.fast = Some(e);
        }

        if let Err(e) = self.durable.put(&self.key, &json) {
            warn!("Failed to save listing to durable store: {}", e);
            report.durable = Some(e);
        } else {
            debug!("Saved listing ({} bytes)", json.len());
        }

        report
    }

    /// Fire-and-forget [`save`](Self::save) on the blocking pool. Must be
    /// called from within a tokio runtime.
    pub fn save_in_background(&self, record: ListingRecord) -> tokio::task::JoinHandle<SaveReport> {
        let store = self.clone();
        tokio::task::spawn_blocking(move || store.save(&record))
    }

    /// Load the most durable snapshot available, merged with the defaults.
    pub fn load(&self) -> ListingRecord {
        if let Some(rec) = self.load_tier("durable", self.durable.as_ref()) {
            info!("Loaded listing from durable store");
            return rec;
        }
        if let Some(rec) = self.load_tier("fast", self.fast.as_ref()) {
            info!("Loaded listing from fast store");
            return rec;
        }
        info!("No saved listing found, using defaults");
        default_record()
    }

    fn load_tier(&self, tier: &str, store: &dyn KvStore) -> Option<ListingRecord> {
        let raw = match store.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!("Failed to read {} store: {}", tier, e);
                return None;
            }
        };
        match serde_json::from_str::<StoredListing>(&raw) {
            Ok(stored) => Some(stored.merge_with(default_record())),
            Err(e) => {
                warn!("Ignoring unparseable {} snapshot: {}", tier, e);
                None
            }
        }
    }
}

/// A snapshot as found on disk: every field may be missing or `null`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct StoredListing {
    title: Option<String>,
    account_id: Option<String>,
    main_images: Option<Vec<ImageEntry>>,
    feature_images: Option<Vec<ImageEntry>>,
    feature_images_footer: Option<String>,
    comparison_items: Option<Vec<ComparisonItem>>,
    comparison_rows: Option<Vec<ComparisonRow>>,
    comparison_description: Option<String>,
    comparison_brand_bar: Option<String>,
    description: Option<String>,
    specifications: Option<Vec<String>>,
    package_includes: Option<Vec<String>>,
    about_items: Option<Vec<String>>,
    shipping_info: Option<ShippingInfo>,
    about_us: Option<String>,
    logo_url: Option<String>,
    logo_alt: Option<String>,
    ebay_store_url: Option<String>,
}

impl StoredListing {
    fn merge_with(self, d: ListingRecord) -> ListingRecord {
        ListingRecord {
            title: self.title.unwrap_or(d.title),
            account_id: self.account_id.unwrap_or(d.account_id),
            main_images: non_empty_vec(self.main_images).unwrap_or(d.main_images),
            feature_images: self.feature_images.unwrap_or_default(),
            feature_images_footer: self.feature_images_footer.or(d.feature_images_footer),
            comparison_items: non_empty_vec(self.comparison_items).unwrap_or(d.comparison_items),
            comparison_rows: self.comparison_rows.unwrap_or(d.comparison_rows),
            comparison_description: non_empty_str(self.comparison_description)
                .or(d.comparison_description),
            comparison_brand_bar: non_empty_str(self.comparison_brand_bar)
                .or(d.comparison_brand_bar),
            description: self.description.unwrap_or(d.description),
            specifications: self.specifications.unwrap_or(d.specifications),
            package_includes: self.package_includes.unwrap_or(d.package_includes),
            about_items: self.about_items.unwrap_or(d.about_items),
            shipping_info: self.shipping_info.unwrap_or(d.shipping_info),
            about_us: self.about_us.unwrap_or(d.about_us),
            logo_url: self.logo_url.unwrap_or(d.logo_url),
            logo_alt: self.logo_alt.unwrap_or(d.logo_alt),
            ebay_store_url: self.ebay_store_url.unwrap_or(d.ebay_store_url),
        }
    }
}

fn non_empty_vec<T>(v: Option<Vec<T>>) -> Option<Vec<T>> {
    v.filter(|v| !v.is_empty())
}

fn non_empty_str(s: Option<String>) -> Option<String> {
    s.filter(|s| !s.is_empty())
}
