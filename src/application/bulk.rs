//! Batch insertion input and outcome

use crate::domain::Attributes;
use crate::error::HeadTagsError;
use serde::Deserialize;

/// One entry of a batch insertion
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TagSpec {
    pub name: String,
    #[serde(default)]
    pub attributes: Attributes,
    #[serde(default)]
    pub priority: Option<i32>,
}

impl TagSpec {
    pub fn new(name: impl Into<String>, attributes: Attributes) -> Self {
        TagSpec {
            name: name.into(),
            attributes,
            priority: None,
        }
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }
}

/// An entry that was skipped
#[derive(Debug)]
pub struct BulkRejection {
    /// Position of the entry in the batch
    pub index: usize,
    pub tag: String,
    pub error: HeadTagsError,
}

/// Result of a batch insertion
#[derive(Debug, Default)]
pub struct BulkOutcome {
    pub accepted: usize,
    pub rejected: Vec<BulkRejection>,
}

impl BulkOutcome {
    pub(crate) fn reject(&mut self, index: usize, tag: String, error: HeadTagsError) {
        self.rejected.push(BulkRejection { index, tag, error });
    }

    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}
