//! Identity keys: the deduplication scheme for head tags
//!
//! Two tags with the same identity key are the same logical tag, and the
//! later one replaces the earlier. Structural rules exist for `meta`,
//! `link`, `title` and `script`; everything else falls back to a hash of
//! the tag's attributes.
//!
//! The fallback hash is order-sensitive: the same attributes inserted in a
//! different order produce a different key, so such tags are kept as
//! separate entries.
//!
//! # Examples
//!
//! ```
//! use headtags::domain::{derive_key, Attributes};
//!
//! let attrs = Attributes::new().with("name", "Description").with("content", "x");
//! assert_eq!(derive_key("meta", &attrs).unwrap().as_str(), "meta_name_description");
//! ```

use super::attributes::Attributes;
use super::kind::{normalize_tag_name, TagKind};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::borrow::Borrow;
use std::fmt;

/// Priority used when neither the caller nor the well-known table gives one
pub const DEFAULT_PRIORITY: i32 = 10;

/// Priorities that always apply to these keys, regardless of the caller's value
const WELL_KNOWN_PRIORITIES: &[(&str, i32)] = &[
    ("meta_charset", 1),
    ("title_tag", 2),
    ("meta_name_viewport", 3),
    ("meta_name_description", 4),
    ("meta_name_keywords", 5),
];

/// Stable identity of a stored tag
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IdentityKey(String);

impl IdentityKey {
    pub fn new(key: impl Into<String>) -> Self {
        IdentityKey(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Priority pinned by the well-known table, if any
    pub fn well_known_priority(&self) -> Option<i32> {
        WELL_KNOWN_PRIORITIES
            .iter()
            .find(|(key, _)| *key == self.0)
            .map(|(_, priority)| *priority)
    }

    /// Effective priority for a tag stored under this key
    ///
    /// The well-known table wins over an explicit request.
    pub fn resolve_priority(&self, requested: Option<i32>) -> i32 {
        self.well_known_priority()
            .or(requested)
            .unwrap_or(DEFAULT_PRIORITY)
    }
}

impl fmt::Display for IdentityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for IdentityKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for IdentityKey {
    fn from(key: &str) -> Self {
        IdentityKey::new(key)
    }
}

/// Derive the identity key for a tag
///
/// Fails with `InvalidTag` if the name is empty or not emittable.
pub fn derive_key(tag_name: &str, attributes: &Attributes) -> Result<IdentityKey> {
    let tag_name = normalize_tag_name(tag_name)?;

    let structural = match TagKind::of(&tag_name) {
        TagKind::Meta => meta_key(attributes),
        TagKind::Link => link_key(attributes),
        TagKind::Title => Some("title_tag".to_string()),
        TagKind::Script => attributes
            .present("src")
            .map(|src| format!("script_src_{}", content_hash(&src))),
        TagKind::Void | TagKind::Element => None,
    };

    let key = match structural {
        Some(key) => key,
        None => {
            let canonical = serde_json::to_string(attributes)?;
            format!("{}_{}", tag_name, content_hash(&canonical))
        }
    };

    Ok(IdentityKey(key))
}

fn meta_key(attributes: &Attributes) -> Option<String> {
    if let Some(name) = attributes.present("name") {
        Some(format!("meta_name_{}", name.to_lowercase()))
    } else if let Some(property) = attributes.present("property") {
        Some(format!("meta_property_{}", property.to_lowercase()))
    } else if attributes.present("charset").is_some() {
        Some("meta_charset".to_string())
    } else {
        attributes
            .present("http-equiv")
            .map(|value| format!("meta_http_equiv_{}", value.to_lowercase()))
    }
}

fn link_key(attributes: &Attributes) -> Option<String> {
    let rel = attributes.present("rel")?;
    let mut key = format!("link_rel_{}", rel.to_lowercase());
    if let Some(sizes) = attributes.present("sizes") {
        key.push('_');
        key.push_str(&sizes);
    }
    if let Some(media) = attributes.present("media") {
        key.push('_');
        key.push_str(&media);
    }
    Some(key)
}

fn content_hash(source: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(source.as_bytes());
    hex::encode(hasher.finalize())
}
