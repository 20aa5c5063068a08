//! headtags - HTML head tag registry
//!
//! Collects meta, link, title and script tags for one document, keeps a
//! single tag per logical identity, orders them by priority and renders
//! cached, deterministic markup.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use application::HeadRegistry;
pub use error::HeadTagsError;
