//! Tag kinds with special keying or rendering behavior

use crate::error::{HeadTagsError, Result};
use regex::Regex;
use std::sync::OnceLock;

fn tag_name_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^[a-z][a-z0-9-]*$").unwrap())
}

/// Trim and lowercase a tag name, rejecting names that cannot be emitted
///
/// # Examples
///
/// ```
/// use headtags::domain::kind::normalize_tag_name;
///
/// assert_eq!(normalize_tag_name("  META ").unwrap(), "meta");
/// assert!(normalize_tag_name("   ").is_err());
/// ```
pub fn normalize_tag_name(raw: &str) -> Result<String> {
    let name = raw.trim().to_lowercase();
    if name.is_empty() || !tag_name_regex().is_match(&name) {
        return Err(HeadTagsError::InvalidTag(raw.to_string()));
    }
    Ok(name)
}

/// Closed set of tag kinds the key deriver and renderer distinguish
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    Meta,
    Link,
    Title,
    Script,
    /// Other void elements: base, img, input, br, hr
    Void,
    /// Any other element, rendered with an explicit closing tag
    Element,
}

impl TagKind {
    /// Classify a normalized tag name
    pub fn of(tag_name: &str) -> Self {
        match tag_name {
            "meta" => TagKind::Meta,
            "link" => TagKind::Link,
            "title" => TagKind::Title,
            "script" => TagKind::Script,
            "base" | "img" | "input" | "br" | "hr" => TagKind::Void,
            _ => TagKind::Element,
        }
    }

    /// Whether the element renders as `<tag ... />`
    pub fn is_self_closing(self) -> bool {
        matches!(self, TagKind::Meta | TagKind::Link | TagKind::Void)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_trims_and_lowercases() {
        assert_eq!(normalize_tag_name("Link").unwrap(), "link");
        assert_eq!(normalize_tag_name("\tSCRIPT\n").unwrap(), "script");
        assert_eq!(normalize_tag_name("my-widget").unwrap(), "my-widget");
    }

    #[test]
    fn test_normalize_rejects_empty_and_unsafe() {
        for bad in ["", "   ", "me ta", "a>b", "1meta", "<meta"] {
            match normalize_tag_name(bad) {
                Err(HeadTagsError::InvalidTag(raw)) => assert_eq!(raw, bad),
                other => panic!("Expected InvalidTag for {:?}, got {:?}", bad, other),
            }
        }
    }

    #[test]
    fn test_kind_classification() {
        assert_eq!(TagKind::of("meta"), TagKind::Meta);
        assert_eq!(TagKind::of("link"), TagKind::Link);
        assert_eq!(TagKind::of("title"), TagKind::Title);
        assert_eq!(TagKind::of("script"), TagKind::Script);
        assert_eq!(TagKind::of("base"), TagKind::Void);
        assert_eq!(TagKind::of("hr"), TagKind::Void);
        assert_eq!(TagKind::of("div"), TagKind::Element);
        assert_eq!(TagKind::of("style"), TagKind::Element);
    }

    #[test]
    fn test_self_closing_set() {
        for name in ["meta", "link", "base", "img", "input", "br", "hr"] {
            assert!(TagKind::of(name).is_self_closing(), "{}", name);
        }
        for name in ["title", "script", "div", "noscript"] {
            assert!(!TagKind::of(name).is_self_closing(), "{}", name);
        }
    }
}
