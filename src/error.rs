//! Error types for headtags

use thiserror::Error;

/// Main error type for headtags
#[derive(Debug, Error)]
pub enum HeadTagsError {
    #[error("Invalid tag: {0}")]
    InvalidTag(String),

    #[error("Invalid attributes: {0}")]
    InvalidAttributes(String),

    #[error("Malformed snapshot: {0}")]
    MalformedSnapshot(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Manifest error: {0}")]
    Manifest(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Logging error: {0}")]
    Logging(String),
}

impl HeadTagsError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            HeadTagsError::InvalidTag(_) => 2,
            HeadTagsError::MalformedSnapshot(_) | HeadTagsError::Manifest(_) => 3,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            HeadTagsError::InvalidTag(name) => {
                format!(
                    "Invalid tag: '{}'\n\n\
                    Suggestions:\n\
                    • Tag names must not be empty\n\
                    • Use lowercase letters, digits and hyphens (e.g., meta, link)\n\
                    • Tag names are trimmed and lowercased before use",
                    name
                )
            }
            HeadTagsError::InvalidAttributes(msg) => {
                format!(
                    "Invalid attributes: {}\n\n\
                    Suggestions:\n\
                    • Attribute names must not be empty\n\
                    • Attribute names cannot contain spaces, quotes, '<', '>', '/' or '='",
                    msg
                )
            }
            HeadTagsError::MalformedSnapshot(msg) => {
                format!(
                    "Malformed snapshot: {}\n\n\
                    Expected a JSON array of records, e.g.:\n\
                    [{{\"key\": \"title_tag\", \"tag\": \"title\", \"attributes\": {{\"text\": \"Home\"}}, \"priority\": 2}}]\n\n\
                    Generate a valid snapshot with: headtags export <manifest>",
                    msg
                )
            }
            HeadTagsError::Manifest(msg) => {
                format!(
                    "{}\n\n\
                    Each manifest entry needs a tag name:\n\
                    [[tag]]\n\
                    name = \"meta\"\n\
                    [tag.attributes]\n\
                    charset = \"UTF-8\"",
                    msg
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using HeadTagsError
pub type Result<T> = std::result::Result<T, HeadTagsError>;
