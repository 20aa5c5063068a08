//! Markup serialization for tag records

use super::attributes::AttrValue;
use super::kind::TagKind;
use super::record::TagRecord;

/// Serializes records to one line of markup each
pub struct TagRenderer;

impl TagRenderer {
    /// Render a single record, newline-terminated
    ///
    /// # Examples
    ///
    /// ```
    /// use headtags::domain::{Attributes, TagRecord, TagRenderer};
    ///
    /// let record = TagRecord::new(
    ///     "meta".to_string(),
    ///     Attributes::new().with("name", "x").with("content", "a & b"),
    ///     10,
    /// );
    /// assert_eq!(
    ///     TagRenderer::render(&record),
    ///     "<meta name=\"x\" content=\"a &amp; b\" />\n"
    /// );
    /// ```
    pub fn render(record: &TagRecord) -> String {
        let mut html = String::new();
        Self::render_into(&mut html, record);
        html
    }

    /// Concatenate the markup of all records, in the given order
    pub fn render_all<'a, I>(records: I) -> String
    where
        I: IntoIterator<Item = &'a TagRecord>,
    {
        let mut html = String::new();
        for record in records {
            Self::render_into(&mut html, record);
        }
        html
    }

    fn render_into(html: &mut String, record: &TagRecord) {
        let kind = record.kind();
        let attributes = &record.attributes;

        if kind == TagKind::Title {
            if let Some(text) = attributes.present("text") {
                html.push_str("<title>");
                push_escaped(html, &text);
                html.push_str("</title>\n");
                return;
            }
        }

        html.push('<');
        html.push_str(&record.tag_name);

        if kind == TagKind::Script {
            if let Some(content) = attributes.present("content") {
                push_attributes(
                    html,
                    attributes.iter().filter(|(name, _)| *name != "content"),
                );
                // Script bodies are literal text, never escaped
                html.push('>');
                html.push_str(&content);
                html.push_str("</script>\n");
                return;
            }
        }

        push_attributes(html, attributes.iter());

        if kind.is_self_closing() {
            html.push_str(" />");
        } else {
            html.push_str("></");
            html.push_str(&record.tag_name);
            html.push('>');
        }
        html.push('\n');
    }
}

fn push_attributes<'a>(html: &mut String, attributes: impl Iterator<Item = (&'a str, &'a AttrValue)>) {
    for (name, value) in attributes {
        match value {
            AttrValue::Flag(true) => {
                html.push(' ');
                html.push_str(name);
            }
            AttrValue::Text(text) if !text.is_empty() => {
                html.push(' ');
                html.push_str(name);
                html.push_str("=\"");
                push_escaped(html, text);
                html.push('"');
            }
            AttrValue::Text(_) | AttrValue::Flag(false) | AttrValue::Absent => {}
        }
    }
}

fn push_escaped(html: &mut String, value: &str) {
    for ch in value.chars() {
        match ch {
            '&' => html.push_str("&amp;"),
            '<' => html.push_str("&lt;"),
            '>' => html.push_str("&gt;"),
            '"' => html.push_str("&quot;"),
            '\'' => html.push_str("&#039;"),
            _ => html.push(ch),
        }
    }
}

/// Escape text for use in HTML content or attribute values
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    push_escaped(&mut escaped, value);
    escaped
}
