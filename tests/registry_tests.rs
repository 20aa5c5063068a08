//! Integration tests for the head tag registry

use headtags::domain::{AttrValue, Attributes};
use headtags::HeadRegistry;

fn meta_name(name: &str, content: &str) -> Attributes {
    Attributes::new().with("name", name).with("content", content)
}

#[test]
fn test_same_identity_overwrites() {
    let mut head = HeadRegistry::new();
    assert!(head.upsert("meta", meta_name("description", "A"), None));
    assert!(head.upsert("meta", meta_name("description", "B"), None));

    assert_eq!(head.count(), 1);
    let record = head.get("meta_name_description").unwrap();
    assert_eq!(record.attributes.text("content"), Some("B"));
}

#[test]
fn test_well_known_priorities_order_output() {
    let mut head = HeadRegistry::new();
    head.upsert("meta", meta_name("viewport", "width=device-width"), None);
    head.upsert("title", Attributes::new().with("text", "T"), None);
    head.upsert("meta", Attributes::new().with("charset", "UTF-8"), None);

    let html = head.render_all(true).into_owned();
    let lines: Vec<&str> = html.lines().collect();
    assert_eq!(
        lines,
        vec![
            "<meta charset=\"UTF-8\" />",
            "<title>T</title>",
            "<meta name=\"viewport\" content=\"width=device-width\" />",
        ]
    );
}

#[test]
fn test_table_priority_beats_explicit_priority() {
    let mut head = HeadRegistry::new();
    head.upsert("meta", meta_name("author", "A"), Some(0));
    head.upsert("meta", meta_name("description", "D"), Some(-5));

    assert_eq!(head.get("meta_name_description").unwrap().priority, 4);
    let html = head.render_all(true).into_owned();
    assert!(html.starts_with("<meta name=\"author\""));
}

#[test]
fn test_equal_priorities_render_in_insertion_order() {
    let mut head = HeadRegistry::new();
    head.upsert("meta", meta_name("a", "first"), Some(7));
    head.upsert("meta", meta_name("b", "second"), Some(7));

    let html = head.render_all(true).into_owned();
    let a = html.find("name=\"a\"").unwrap();
    let b = html.find("name=\"b\"").unwrap();
    assert!(a < b);
}

#[test]
fn test_content_is_escaped() {
    let mut head = HeadRegistry::new();
    head.upsert("meta", meta_name("x", "<script>"), None);
    assert_eq!(
        head.render_all(true),
        "<meta name=\"x\" content=\"&lt;script&gt;\" />\n"
    );
    // Stored value stays as supplied
    assert_eq!(
        head.get("meta_name_x").unwrap().attributes.text("content"),
        Some("<script>")
    );
}

#[test]
fn test_self_closing_and_paired_elements() {
    let mut head = HeadRegistry::new();
    head.upsert("img", Attributes::new().with("src", "a.png"), None);
    head.upsert("div", Attributes::new().with("id", "x"), None);

    assert_eq!(
        head.render_all(false),
        "<img src=\"a.png\" />\n<div id=\"x\"></div>\n"
    );
}

#[test]
fn test_boolean_attribute() {
    let mut head = HeadRegistry::new();
    head.upsert(
        "script",
        Attributes::new().with("src", "a.js").with("async", true),
        None,
    );
    assert_eq!(head.render_all(true), "<script src=\"a.js\" async></script>\n");
}

#[test]
fn test_script_dedup_by_source() {
    let mut head = HeadRegistry::new();
    head.upsert("script", Attributes::new().with("src", "a.js"), None);
    head.upsert(
        "script",
        Attributes::new().with("src", "a.js").with("defer", true),
        None,
    );
    head.upsert("script", Attributes::new().with("src", "b.js"), None);
    assert_eq!(head.count(), 2);
}

#[test]
fn test_icons_with_different_sizes_coexist() {
    let mut head = HeadRegistry::new();
    let icon = |sizes: &str, href: &str| {
        Attributes::new()
            .with("rel", "icon")
            .with("href", href)
            .with("sizes", sizes)
    };

    head.upsert("link", icon("16x16", "/16.png"), None);
    head.upsert("link", icon("32x32", "/32.png"), None);
    assert_eq!(head.count(), 2);

    head.upsert("link", icon("32x32", "/32-v2.png"), None);
    assert_eq!(head.count(), 2);
    assert_eq!(
        head.get("link_rel_icon_32x32").unwrap().attributes.text("href"),
        Some("/32-v2.png")
    );
}

#[test]
fn test_single_title_and_charset() {
    let mut head = HeadRegistry::new();
    head.upsert("title", Attributes::new().with("text", "One"), None);
    head.upsert("TITLE", Attributes::new().with("text", "Two"), None);
    head.upsert("meta", Attributes::new().with("charset", "UTF-8"), None);
    head.upsert("meta", Attributes::new().with("charset", "latin1"), None);

    assert_eq!(head.count(), 2);
    assert_eq!(
        head.render_all(true),
        "<meta charset=\"latin1\" />\n<title>Two</title>\n"
    );
}

#[test]
fn test_render_is_cached_until_mutation() {
    let mut head = HeadRegistry::new();
    head.upsert("meta", meta_name("description", "A"), None);

    let first = head.render_all(true).into_owned();
    let second = head.render_all(true).into_owned();
    assert_eq!(first, second);
    assert_eq!(head.render_count(), 1);

    head.upsert("meta", meta_name("description", "B"), None);
    let third = head.render_all(true).into_owned();
    assert_ne!(first, third);
    assert_eq!(head.render_count(), 2);
}

#[test]
fn test_every_mutation_changes_output() {
    let mut head = HeadRegistry::new();
    head.upsert("meta", meta_name("author", "A"), None);
    let mut previous = head.render_all(true).into_owned();

    head.upsert("meta", meta_name("robots", "index"), None);
    let current = head.render_all(true).into_owned();
    assert_ne!(previous, current);
    previous = current;

    head.update("meta_name_robots", meta_name("robots", "noindex"));
    let current = head.render_all(true).into_owned();
    assert_ne!(previous, current);
    previous = current;

    head.remove("meta_name_author");
    let current = head.render_all(true).into_owned();
    assert_ne!(previous, current);

    head.clear();
    assert_eq!(head.render_all(true), "");
    assert_eq!(head.count(), 0);
}

#[test]
fn test_remove_and_update_report_missing_keys() {
    let mut head = HeadRegistry::new();
    assert!(!head.remove("title_tag"));
    assert!(!head.update("title_tag", Attributes::new().with("text", "x")));
}

#[test]
fn test_update_keeps_priority() {
    let mut head = HeadRegistry::new();
    head.upsert("title", Attributes::new().with("text", "Old"), Some(99));
    head.update("title_tag", Attributes::new().with("text", "New"));

    let record = head.get("title_tag").unwrap();
    assert_eq!(record.priority, 2);
    assert_eq!(record.attributes.get("text"), Some(&AttrValue::from("New")));
}

#[test]
fn test_by_tag_name_view() {
    let mut head = HeadRegistry::new();
    head.upsert("link", Attributes::new().with("rel", "canonical").with("href", "/"), None);
    head.upsert("meta", meta_name("author", "A"), None);
    head.upsert("link", Attributes::new().with("rel", "manifest").with("href", "/m.json"), None);

    let links: Vec<&str> = head.by_tag_name("link").map(|(k, _)| k.as_str()).collect();
    assert_eq!(links, vec!["link_rel_canonical", "link_rel_manifest"]);

    // Filtered views never touch the cache
    assert_eq!(head.render_count(), 0);
}

#[test]
fn test_fallback_keys_are_order_sensitive() {
    let mut head = HeadRegistry::new();
    head.upsert("base", Attributes::new().with("href", "/").with("target", "_blank"), None);
    head.upsert("base", Attributes::new().with("target", "_blank").with("href", "/"), None);
    head.upsert("base", Attributes::new().with("href", "/").with("target", "_blank"), None);
    assert_eq!(head.count(), 2);
}

#[test]
fn test_inline_structured_data() {
    let mut head = HeadRegistry::new();
    head.upsert(
        "script",
        Attributes::new()
            .with("type", "application/ld+json")
            .with("content", r#"{"@type":"WebSite","name":"A & B"}"#),
        None,
    );
    assert_eq!(
        head.render_all(true),
        "<script type=\"application/ld+json\">{\"@type\":\"WebSite\",\"name\":\"A & B\"}</script>\n"
    );
}

#[test]
fn test_flag_sizes_icon_is_kept_apart_from_plain_icon() {
    let mut head = HeadRegistry::new();
    head.upsert(
        "link",
        Attributes::new()
            .with("rel", "icon")
            .with("sizes", true)
            .with("href", "/a"),
        None,
    );
    head.upsert(
        "link",
        Attributes::new().with("rel", "icon").with("href", "/b"),
        None,
    );

    assert_eq!(head.count(), 2);
    assert!(head.contains("link_rel_icon_1"));
    assert!(head.contains("link_rel_icon"));
    assert_eq!(
        head.render_all(false),
        "<link rel=\"icon\" sizes href=\"/a\" />\n<link rel=\"icon\" href=\"/b\" />\n"
    );
}
