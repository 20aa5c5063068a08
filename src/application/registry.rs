//! Head tag registry - the caller-owned entry point
//!
//! One registry per document. It owns the tag store and the render cache
//! and keeps the two consistent: every mutation invalidates the cache.
//!
//! # Examples
//!
//! ```
//! use headtags::application::HeadRegistry;
//! use headtags::domain::Attributes;
//!
//! let mut head = HeadRegistry::new();
//! head.upsert("title", Attributes::new().with("text", "Home"), None);
//! head.upsert("meta", Attributes::new().with("charset", "UTF-8"), None);
//!
//! assert_eq!(
//!     head.render_all(true),
//!     "<meta charset=\"UTF-8\" />\n<title>Home</title>\n"
//! );
//! ```

use super::bulk::{BulkOutcome, TagSpec};
use super::snapshot;
use crate::domain::{Attributes, IdentityKey, RenderCache, TagRecord, TagRenderer, TagStore};
use crate::error::Result;
use std::borrow::Cow;
use std::io::Write;
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct HeadRegistry {
    store: TagStore,
    cache: RenderCache,
}

impl HeadRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a tag, reporting why it was rejected
    pub fn try_upsert(
        &mut self,
        tag_name: &str,
        attributes: Attributes,
        priority: Option<i32>,
    ) -> Result<IdentityKey> {
        let key = self.store.upsert(tag_name, attributes, priority)?;
        self.cache.invalidate();
        debug!(tag = tag_name, key = %key, "Stored tag");
        Ok(key)
    }

    /// Insert or replace a tag; invalid input returns `false` and changes nothing
    pub fn upsert(&mut self, tag_name: &str, attributes: Attributes, priority: Option<i32>) -> bool {
        match self.try_upsert(tag_name, attributes, priority) {
            Ok(_) => true,
            Err(e) => {
                debug!(tag = tag_name, error = %e, "Rejected tag");
                false
            }
        }
    }

    /// Insert each entry in order, skipping the ones that fail
    pub fn upsert_bulk<I>(&mut self, entries: I) -> BulkOutcome
    where
        I: IntoIterator<Item = TagSpec>,
    {
        let mut outcome = BulkOutcome::default();
        for (index, spec) in entries.into_iter().enumerate() {
            match self.try_upsert(&spec.name, spec.attributes, spec.priority) {
                Ok(_) => outcome.accepted += 1,
                Err(e) => {
                    debug!(index, tag = %spec.name, error = %e, "Skipped bulk entry");
                    outcome.reject(index, spec.name, e);
                }
            }
        }
        outcome
    }

    /// Replace the attributes of an existing record
    pub fn try_update(&mut self, key: &str, attributes: Attributes) -> Result<bool> {
        let updated = self.store.update(key, attributes)?;
        if updated {
            self.cache.invalidate();
            debug!(key, "Updated tag");
        }
        Ok(updated)
    }

    /// Replace the attributes of an existing record; `false` if missing or invalid
    pub fn update(&mut self, key: &str, attributes: Attributes) -> bool {
        self.try_update(key, attributes).unwrap_or_else(|e| {
            debug!(key, error = %e, "Rejected update");
            false
        })
    }

    pub fn remove(&mut self, key: &str) -> bool {
        let removed = self.store.remove(key).is_some();
        if removed {
            self.cache.invalidate();
            debug!(key, "Removed tag");
        }
        removed
    }

    pub fn clear(&mut self) {
        self.store.clear();
        self.cache.invalidate();
    }

    pub fn count(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&TagRecord> {
        self.store.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.store.contains(key)
    }

    /// All records with their keys, in insertion order
    pub fn entries(&self) -> impl Iterator<Item = (&IdentityKey, &TagRecord)> {
        self.store.iter()
    }

    /// Records with the given tag name, in insertion order; never cached
    pub fn by_tag_name<'a>(
        &'a self,
        tag_name: &str,
    ) -> impl Iterator<Item = (&'a IdentityKey, &'a TagRecord)> {
        self.store.by_tag_name(tag_name)
    }

    /// Markup for every stored tag
    ///
    /// The sorted render is served from the cache; the unsorted one is
    /// rendered fresh each time.
    pub fn render_all(&mut self, sorted: bool) -> Cow<'_, str> {
        if sorted {
            Cow::Borrowed(self.cache.get(&self.store, true))
        } else {
            Cow::Owned(TagRenderer::render_all(self.store.entries()))
        }
    }

    /// Write the markup straight to `out`
    pub fn emit<W: Write>(&mut self, out: &mut W, sorted: bool) -> Result<()> {
        let html = self.render_all(sorted);
        out.write_all(html.as_bytes())?;
        Ok(())
    }

    /// Number of full sorted renders performed by the cache
    pub fn render_count(&self) -> usize {
        self.cache.render_count()
    }

    /// Serialize every record to the JSON snapshot format
    pub fn export_snapshot(&self) -> Result<String> {
        snapshot::export(&self.store)
    }

    /// Merge a snapshot, reporting why it was rejected
    ///
    /// Either every record is merged or the registry is left untouched.
    pub fn try_import_snapshot(&mut self, text: &str) -> Result<usize> {
        let entries = snapshot::parse(text)?;
        let merged = entries.len();
        for (key, record) in entries {
            self.store.insert_record(key, record);
        }
        self.cache.invalidate();
        debug!(merged, "Imported snapshot");
        Ok(merged)
    }

    /// Merge a snapshot; malformed input returns `false` and changes nothing
    pub fn import_snapshot(&mut self, text: &str) -> bool {
        match self.try_import_snapshot(text) {
            Ok(_) => true,
            Err(e) => {
                debug!(error = %e, "Rejected snapshot");
                false
            }
        }
    }
}
