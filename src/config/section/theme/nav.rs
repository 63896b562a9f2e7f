//! `themeConfig.nav`: top navigation bar entries, in display order.

use crate::config::util::{is_http_url, is_root_relative};
use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavItem {
    pub text: String,
    /// Absolute URL or site-relative path.
    pub link: String,
    /// Pattern the generator matches against the current route to
    /// highlight this item; defaults to `link`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_match: Option<String>,
}

impl NavItem {
    pub const FIELD: FieldPath = FieldPath::new("themeConfig.nav");

    pub fn new(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: link.into(),
            active_match: None,
        }
    }

    /// True when `link` points off-site.
    pub fn is_external(&self) -> bool {
        url::Url::parse(&self.link).is_ok()
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.text.trim().is_empty() {
            diag.error(Self::FIELD, format!("entry for '{}' has empty text", self.link));
        }

        let ok = if self.is_external() {
            is_http_url(&self.link)
        } else {
            is_root_relative(&self.link)
        };
        if !ok {
            diag.error_with_hint(
                Self::FIELD,
                format!("link '{}' of '{}' is neither site-relative nor http(s)", self.link, self.text),
                "use \"/path\" for pages or \"https://...\" for external links",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_external() {
        assert!(!NavItem::new("Home", "/").is_external());
        assert!(NavItem::new("GitHub", "https://github.com").is_external());
    }

    #[test]
    fn test_validate() {
        let mut diag = ConfigDiagnostics::new();
        NavItem::new("Home", "/").validate(&mut diag);
        NavItem::new("GitHub", "https://github.com/x").validate(&mut diag);
        assert!(diag.is_empty());

        NavItem::new("Bad", "guide/intro").validate(&mut diag);
        NavItem::new("Mail", "mailto:a@b.c").validate(&mut diag);
        NavItem::new("", "/").validate(&mut diag);
        NavItem::new("Evil", "//evil.example").validate(&mut diag);
        assert_eq!(diag.len(), 4);
        assert!(diag.errors()[3].message.contains("//evil.example"));
    }

    #[test]
    fn test_active_match_skipped_when_unset() {
        let json = serde_json::to_string(&NavItem::new("Home", "/")).unwrap();
        assert_eq!(json, r#"{"text":"Home","link":"/"}"#);
    }

    #[test]
    fn test_active_match_from_toml() {
        let patch = crate::config::test_parse_patch(
            r#"
            [themeConfig]
            nav = [{ text = "Guide", link = "/guide/", activeMatch = "^/guide/" }]
            "#,
        );
        let nav = patch.theme_config.and_then(|t| t.nav).unwrap();
        assert_eq!(nav[0].active_match.as_deref(), Some("^/guide/"));
        assert_eq!(nav[0].link, "/guide/");
    }
}
