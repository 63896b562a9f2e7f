//! `head` entries: tags injected into every generated page's `<head>`.
//!
//! Serialized in the generator's tuple form:
//!
//! ```toml
//! head = [
//!     ["link", { rel = "icon", href = "/favicon.ico" }],
//!     ["script", { src = "/analytics.js" }, ""],
//! ]
//! ```

use crate::utils::html::{escape_attr, is_void_element};
use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{self, Write as _};

// ============================================================================
// HeadTag
// ============================================================================

/// One tag-injection directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadTag {
    pub tag: String,
    pub attrs: HeadAttrs,
    /// Inner content for non-void elements (`<script>`, `<style>`).
    pub content: Option<String>,
}

impl HeadTag {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: HeadAttrs::default(),
            content: None,
        }
    }

    /// Append an attribute (builder style).
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name, value);
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Shorthand for `self.attrs.get(name)`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.attrs.get(name)
    }

    /// Render as an HTML fragment, attributes in insertion order.
    pub fn to_html(&self) -> String {
        let mut html = format!("<{}", self.tag);
        for (name, value) in self.attrs.iter() {
            // String writes are infallible
            let _ = write!(html, " {}=\"{}\"", name, escape_attr(value));
        }
        html.push('>');

        if !is_void_element(&self.tag) {
            html.push_str(self.content.as_deref().unwrap_or_default());
            let _ = write!(html, "</{}>", self.tag);
        }
        html
    }
}

impl Serialize for HeadTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = if self.content.is_some() { 3 } else { 2 };
        let mut seq = serializer.serialize_seq(Some(len))?;
        seq.serialize_element(&self.tag)?;
        seq.serialize_element(&self.attrs)?;
        if let Some(content) = &self.content {
            seq.serialize_element(content)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for HeadTag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct HeadTagVisitor;

        impl<'de> Visitor<'de> for HeadTagVisitor {
            type Value = HeadTag;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("[tag, { attrs }] or [tag, { attrs }, content]")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<HeadTag, A::Error> {
                let tag: String = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                let attrs: HeadAttrs = seq.next_element()?.unwrap_or_default();
                let content: Option<String> = seq.next_element()?;
                if seq.next_element::<de::IgnoredAny>()?.is_some() {
                    return Err(de::Error::invalid_length(4, &self));
                }
                Ok(HeadTag {
                    tag,
                    attrs,
                    content,
                })
            }
        }

        deserializer.deserialize_seq(HeadTagVisitor)
    }
}

// ============================================================================
// HeadAttrs
// ============================================================================

/// Attribute list that keeps insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadAttrs(Vec<(String, String)>);

impl HeadAttrs {
    /// Insert or overwrite an attribute, keeping its original position.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == name) {
            Some((_, slot)) => *slot = value,
            None => self.0.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for HeadAttrs {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, value) in &self.0 {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for HeadAttrs {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct AttrsVisitor;

        impl<'de> Visitor<'de> for AttrsVisitor {
            type Value = HeadAttrs;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a table of attribute names to string values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<HeadAttrs, A::Error> {
                let mut attrs = HeadAttrs::default();
                while let Some((name, value)) = map.next_entry::<String, String>()? {
                    attrs.insert(name, value);
                }
                Ok(attrs)
            }
        }

        deserializer.deserialize_map(AttrsVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn favicon() -> HeadTag {
        HeadTag::new("link")
            .attr("rel", "icon")
            .attr("href", "/favicon.ico")
    }

    #[test]
    fn test_to_html_void_element() {
        assert_eq!(
            favicon().to_html(),
            r#"<link rel="icon" href="/favicon.ico">"#
        );
    }

    #[test]
    fn test_to_html_with_content_and_escaping() {
        let tag = HeadTag::new("script")
            .attr("data-x", "a\"b")
            .with_content("console.log(1)");
        assert_eq!(
            tag.to_html(),
            r#"<script data-x="a&quot;b">console.log(1)</script>"#
        );
    }

    #[test]
    fn test_insert_overwrites_in_place() {
        let tag = favicon().attr("rel", "shortcut icon");
        let names: Vec<_> = tag.attrs.iter().map(|(k, _)| k).collect();
        assert_eq!(names, ["rel", "href"]);
        assert_eq!(tag.get("rel"), Some("shortcut icon"));
    }

    #[test]
    fn test_json_tuple_form() {
        let json = serde_json::to_string(&favicon()).unwrap();
        assert_eq!(json, r#"["link",{"rel":"icon","href":"/favicon.ico"}]"#);

        let parsed: HeadTag = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, favicon());
    }

    #[test]
    fn test_parse_with_content() {
        let parsed: HeadTag =
            serde_json::from_str(r#"["style", {}, "body { margin: 0 }"]"#).unwrap();
        assert_eq!(parsed.tag, "style");
        assert!(parsed.attrs.is_empty());
        assert_eq!(parsed.content.as_deref(), Some("body { margin: 0 }"));
    }

    #[test]
    fn test_parse_rejects_extra_elements() {
        let result: Result<HeadTag, _> = serde_json::from_str(r#"["meta", {}, "", "extra"]"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_attribute_order_preserved() {
        let parsed: HeadTag =
            serde_json::from_str(r##"["meta", {"name": "theme-color", "content": "#fff"}]"##)
                .unwrap();
        assert_eq!(
            parsed.to_html(),
            r##"<meta name="theme-color" content="#fff">"##
        );
    }
}
