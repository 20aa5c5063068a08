//! Keyed storage of tag records
//!
//! Records live in insertion order. Overwriting an existing key keeps the
//! record's position; removing and re-adding moves it to the end.

use super::attributes::Attributes;
use super::key::{derive_key, IdentityKey};
use super::kind::normalize_tag_name;
use super::record::TagRecord;
use crate::error::Result;

#[derive(Debug, Clone, Default)]
pub struct TagStore {
    entries: Vec<(IdentityKey, TagRecord)>,
}

impl TagStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a tag, replacing any record with the same identity key
    ///
    /// The well-known priority table takes precedence over `priority`.
    pub fn upsert(
        &mut self,
        tag_name: &str,
        attributes: Attributes,
        priority: Option<i32>,
    ) -> Result<IdentityKey> {
        let tag_name = normalize_tag_name(tag_name)?;
        attributes.validate()?;

        let key = derive_key(&tag_name, &attributes)?;
        let priority = key.resolve_priority(priority);
        self.insert_record(key.clone(), TagRecord::new(tag_name, attributes, priority));
        Ok(key)
    }

    /// Store a record under an already known key
    pub fn insert_record(&mut self, key: IdentityKey, record: TagRecord) {
        match self.position(key.as_str()) {
            Some(index) => self.entries[index].1 = record,
            None => self.entries.push((key, record)),
        }
    }

    /// Replace the attributes of an existing record; key and priority stay
    ///
    /// Returns `Ok(false)` when no record has this key.
    pub fn update(&mut self, key: &str, attributes: Attributes) -> Result<bool> {
        attributes.validate()?;
        match self.position(key) {
            Some(index) => {
                self.entries[index].1.attributes = attributes;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn remove(&mut self, key: &str) -> Option<TagRecord> {
        let index = self.position(key)?;
        Some(self.entries.remove(index).1)
    }

    pub fn get(&self, key: &str) -> Option<&TagRecord> {
        self.position(key).map(|index| &self.entries[index].1)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    /// All records with their keys, in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&IdentityKey, &TagRecord)> {
        self.entries.iter().map(|(key, record)| (key, record))
    }

    /// All records, in insertion order
    pub fn entries(&self) -> impl Iterator<Item = &TagRecord> {
        self.entries.iter().map(|(_, record)| record)
    }

    /// Records whose tag name matches (case-insensitive), in insertion order
    pub fn by_tag_name<'a>(
        &'a self,
        tag_name: &str,
    ) -> impl Iterator<Item = (&'a IdentityKey, &'a TagRecord)> {
        let wanted = tag_name.trim().to_lowercase();
        self.iter()
            .filter(move |(_, record)| record.tag_name == wanted)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|(existing, _)| existing.as_str() == key)
    }
}
