//! Domain layer - Tag identity, storage, ordering and rendering

pub mod attributes;
pub mod cache;
pub mod key;
pub mod kind;
pub mod order;
pub mod record;
pub mod render;
pub mod store;

pub use attributes::{AttrValue, Attributes};
pub use cache::RenderCache;
pub use key::{derive_key, IdentityKey, DEFAULT_PRIORITY};
pub use kind::TagKind;
pub use order::PriorityOrderer;
pub use record::TagRecord;
pub use render::{escape_html, TagRenderer};
pub use store::TagStore;
