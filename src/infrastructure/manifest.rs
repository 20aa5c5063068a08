//! TOML tag manifests read by the command-line front end

use crate::application::{BulkOutcome, HeadRegistry, TagSpec};
use crate::error::{HeadTagsError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// A list of tags plus render options
///
/// ```toml
/// [options]
/// sorted = true
///
/// [[tag]]
/// name = "meta"
/// [tag.attributes]
/// charset = "UTF-8"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub options: ManifestOptions,
    #[serde(default, rename = "tag")]
    pub tags: Vec<TagSpec>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ManifestOptions {
    #[serde(default = "default_sorted")]
    pub sorted: bool,
}

fn default_sorted() -> bool {
    true
}

impl Default for ManifestOptions {
    fn default() -> Self {
        ManifestOptions {
            sorted: default_sorted(),
        }
    }
}

impl Manifest {
    /// Load a manifest file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                HeadTagsError::Manifest(format!("Manifest not found: {}", path.display()))
            } else {
                HeadTagsError::Io(e)
            }
        })?;

        Self::parse(&contents).map_err(|e| match e {
            HeadTagsError::Manifest(msg) => {
                HeadTagsError::Manifest(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })
    }

    /// Parse manifest text
    pub fn parse(contents: &str) -> Result<Self> {
        toml::from_str(contents)
            .map_err(|e| HeadTagsError::Manifest(format!("Failed to parse manifest: {}", e)))
    }

    /// Build a registry from the manifest's tags, skipping invalid entries
    pub fn into_registry(self) -> (HeadRegistry, BulkOutcome) {
        let mut registry = HeadRegistry::new();
        let outcome = registry.upsert_bulk(self.tags);
        (registry, outcome)
    }
}
