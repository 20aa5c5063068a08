//! Infrastructure layer - Manifest files and logging

pub mod logging;
pub mod manifest;

pub use manifest::{Manifest, ManifestOptions};
