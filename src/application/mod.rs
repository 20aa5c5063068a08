//! Application layer - The registry and its import/export surfaces

pub mod bulk;
pub mod registry;
pub mod snapshot;

pub use bulk::{BulkOutcome, BulkRejection, TagSpec};
pub use registry::HeadRegistry;
