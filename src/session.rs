//! The live editing session: one record, its rendered markup, its store.
//!
//! Every change goes through [`Session::apply`] or [`Session::replace`]. Both
//! swap the record wholesale, re-render the full document and persist the
//! new snapshot. There is no incremental diffing: the renderer is cheap and
//! a full re-render can never drift out of sync with the record.

use crate::edit::{self, Edit};
use crate::model::ListingRecord;
use crate::render::render;
use crate::store::{ListingStore, SaveReport};
use tracing::debug;

pub struct Session {
    record: ListingRecord,
    html: String,
    store: ListingStore,
}

impl Session {
    /// Hydrate from `store` (durable, then fast, then defaults).
    pub fn open(store: ListingStore) -> Self {
        let record = store.load();
        let html = render(&record);
        Self {
            record,
            html,
            store,
        }
    }

    pub fn record(&self) -> &ListingRecord {
        &self.record
    }

    /// Markup of the current record.
    pub fn html(&self) -> &str {
        &self.html
    }

    /// Apply one edit, re-render and persist. An edit that leaves the record
    /// unchanged is not persisted again.
    pub fn apply(&mut self, edit: Edit) -> Option<SaveReport> {
        let next = edit::apply(&self.record, edit);
        if next == self.record {
            debug!("edit was a no-op");
            return None;
        }
        Some(self.replace(next))
    }

    /// Apply a batch of edits as one change: the intermediate records are
    /// never rendered or persisted.
    pub fn apply_all(&mut self, edits: impl IntoIterator<Item = Edit>) -> Option<SaveReport> {
        let next = edits
            .into_iter()
            .fold(self.record.clone(), |rec, edit| edit::apply(&rec, edit));
        if next == self.record {
            debug!("edit batch was a no-op");
            return None;
        }
        Some(self.replace(next))
    }

    /// Swap in a whole new record (e.g. one returned by the copywriter).
    pub fn replace(&mut self, record: ListingRecord) -> SaveReport {
        self.record = record;
        self.html = render(&self.record);
        self.store.save(&self.record)
    }

    pub fn into_record(self) -> ListingRecord {
        self.record
    }
}
