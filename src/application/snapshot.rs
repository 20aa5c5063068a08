//! JSON snapshot format for exporting and merging registries
//!
//! A snapshot is an array of records in store order:
//!
//! ```json
//! [
//!   {
//!     "key": "meta_charset",
//!     "tag": "meta",
//!     "attributes": { "charset": "UTF-8" },
//!     "priority": 1,
//!     "created_at": "2025-01-17T10:00:00Z"
//!   }
//! ]
//! ```
//!
//! `priority` and `created_at` may be omitted on import.

use crate::domain::kind::normalize_tag_name;
use crate::domain::{IdentityKey, TagRecord, TagStore};
use crate::error::{HeadTagsError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
struct SnapshotEntry {
    key: IdentityKey,
    #[serde(flatten)]
    record: TagRecord,
}

/// Serialize the store, records in insertion order
pub fn export(store: &TagStore) -> Result<String> {
    let entries: Vec<SnapshotEntry> = store
        .iter()
        .map(|(key, record)| SnapshotEntry {
            key: key.clone(),
            record: record.clone(),
        })
        .collect();
    Ok(serde_json::to_string_pretty(&entries)?)
}

/// Parse and validate a snapshot without touching any store
pub fn parse(text: &str) -> Result<Vec<(IdentityKey, TagRecord)>> {
    let entries: Vec<SnapshotEntry> = serde_json::from_str(text)
        .map_err(|e| HeadTagsError::MalformedSnapshot(e.to_string()))?;

    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| validate_entry(index, entry))
        .collect()
}

fn validate_entry(index: usize, entry: SnapshotEntry) -> Result<(IdentityKey, TagRecord)> {
    let SnapshotEntry { key, mut record } = entry;

    if key.as_str().trim().is_empty() {
        return Err(HeadTagsError::MalformedSnapshot(format!(
            "record {} has an empty key",
            index
        )));
    }

    record.tag_name = normalize_tag_name(&record.tag_name).map_err(|e| {
        HeadTagsError::MalformedSnapshot(format!("record {} ({}): {}", index, key, e))
    })?;
    record.attributes.validate().map_err(|e| {
        HeadTagsError::MalformedSnapshot(format!("record {} ({}): {}", index, key, e))
    })?;

    Ok((key, record))
}
