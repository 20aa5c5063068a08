//! Stored representation of one logical head tag

use super::attributes::Attributes;
use super::key::DEFAULT_PRIORITY;
use super::kind::TagKind;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A head tag as held by the store
///
/// Attribute values are kept exactly as the caller supplied them;
/// escaping happens only when rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagRecord {
    #[serde(rename = "tag")]
    pub tag_name: String,
    pub attributes: Attributes,
    #[serde(default = "default_priority")]
    pub priority: i32,
    /// Wall-clock creation time, kept for diagnostics only; ordering never reads it
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

fn default_priority() -> i32 {
    DEFAULT_PRIORITY
}

impl TagRecord {
    pub fn new(tag_name: String, attributes: Attributes, priority: i32) -> Self {
        TagRecord {
            tag_name,
            attributes,
            priority,
            created_at: Utc::now(),
        }
    }

    pub fn kind(&self) -> TagKind {
        TagKind::of(&self.tag_name)
    }
}
