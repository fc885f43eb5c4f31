//! # listing2html
//!
//! Assemble a marketplace product listing and render it into one
//! self-contained HTML fragment, ready to paste into a listing description
//! field.
//!
//! ## Overview
//!
//! ```text
//! store ──▶ Session ──▶ Edit ──▶ new ListingRecord ──▶ render ──▶ HTML
//!   ▲                                   │
//!   └──────────── save (two tiers) ◀────┘
//!
//! Copywriter (LLM) ──▶ description / title ──▶ Session::replace
//! ```
//!
//! - [`model`]: the [`ListingRecord`] data model (camelCase JSON)
//! - [`render`](mod@render): pure, total, deterministic HTML generation
//! - [`edit`]: immutable edit operations
//! - [`session`]: live record + re-render + persist
//! - [`store`]: fast and durable persistence tiers with default merging
//! - [`copywriter`]: LLM-drafted descriptions and optimized titles
//! - [`input`] / [`embed`]: loading records from paths or URLs, images as
//!   `data:` URLs
//!
//! ## Quick Start
//!
//! ```rust
//! use listing2html::{apply, defaults::default_record, render, Edit};
//!
//! let record = apply(&default_record(), Edit::AddRow { label: "Wattage".into() });
//! let html = render(&record);
//! assert!(html.contains(">Wattage</td>"));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `listing2html` binary (clap + anyhow + tracing-subscriber + indicatif) |

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod copywriter;
pub mod defaults;
pub mod edit;
pub mod embed;
pub mod error;
pub mod input;
pub mod model;
pub mod postprocess;
pub mod prompts;
pub mod render;
pub mod session;
pub mod store;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{CopywriterConfig, CopywriterConfigBuilder, StoreConfig, StoreConfigBuilder};
pub use copywriter::{Copywriter, LlmGenerator, TextGenerator};
pub use edit::{apply, Edit, ImageField, ImageList, ShippingField, TextList};
pub use error::{GenerationError, ListingError, StoreError};
pub use model::{ComparisonItem, ComparisonRow, ImageEntry, ListingRecord, ShippingInfo};
pub use render::{render, ColumnWidths};
pub use session::Session;
pub use store::{FileStore, KvStore, ListingStore, SaveReport};
