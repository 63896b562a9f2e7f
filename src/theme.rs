//! Base themes a site config can extend.
//!
//! A theme contributes the starting values of every field; the site's own
//! overrides are merged on top (see [`crate::config::merge`]).

use crate::config::SiteConfig;
use crate::config::section::{Outline, ThemeConfig};
use serde::{Deserialize, Serialize};

/// Reference to a base theme, serialized as its name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeRef {
    #[default]
    Default,
}

impl ThemeRef {
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Default => "default",
        }
    }

    /// The theme's own configuration, before any site override.
    pub fn base_config(&self) -> SiteConfig {
        match self {
            Self::Default => DefaultTheme::config(),
        }
    }
}

/// The generator's stock theme.
pub struct DefaultTheme;

impl DefaultTheme {
    pub fn config() -> SiteConfig {
        SiteConfig {
            extends: ThemeRef::Default,
            language: "en-US".into(),
            title: "Site".into(),
            description: "A documentation site".into(),
            last_updated: false,
            head: Vec::new(),
            theme_config: ThemeConfig {
                last_updated_text: Some("Last updated".into()),
                logo: None,
                edit_link: None,
                nav: Vec::new(),
                social_links: Vec::new(),
                outline: Outline::default(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::section::OutlineLevel;

    #[test]
    fn test_default_theme_values() {
        let config = ThemeRef::Default.base_config();
        assert_eq!(config.extends, ThemeRef::Default);
        assert_eq!(config.language, "en-US");
        assert!(!config.last_updated);
        assert!(config.head.is_empty());
        assert!(config.theme_config.nav.is_empty());
        assert_eq!(config.theme_config.outline.level, OutlineLevel::Single(2));
        assert_eq!(config.theme_config.outline.label, "On this page");
    }

    #[test]
    fn test_theme_ref_wire_name() {
        assert_eq!(ThemeRef::Default.name(), "default");
        assert_eq!(serde_json::to_string(&ThemeRef::Default).unwrap(), "\"default\"");
        assert!(serde_json::from_str::<ThemeRef>("\"fancy\"").is_err());
    }
}
