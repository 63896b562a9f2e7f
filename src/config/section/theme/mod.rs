//! `themeConfig`: settings consumed by the default theme's layout.
//!
//! # Example
//!
//! ```toml
//! [themeConfig]
//! lastUpdatedText = "Last updated"
//! logo = "/logo.svg"
//! nav = [{ text = "Home", link = "/" }]
//! socialLinks = [{ icon = "github", link = "https://github.com/user" }]
//!
//! [themeConfig.editLink]
//! pattern = "https://github.com/user/repo/edit/main/docs/:path"
//!
//! [themeConfig.outline]
//! level = [2, 3]
//! ```

mod edit_link;
mod nav;
mod outline;
mod social;

pub use edit_link::{EditLink, EditLinkPatch, PATH_PLACEHOLDER};
pub use nav::NavItem;
pub use outline::{Outline, OutlineLevel, OutlinePatch};
pub use social::{KNOWN_ICONS, SocialLink};

use crate::config::merge::{Merge, merge_nested, replace};
use crate::config::util::is_root_relative;
use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThemeConfig {
    /// Label shown before the last-updated timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated_text: Option<String>,

    /// Logo path, relative to the site root.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub edit_link: Option<EditLink>,

    pub nav: Vec<NavItem>,

    pub social_links: Vec<SocialLink>,

    pub outline: Outline,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThemeConfigPatch {
    pub last_updated_text: Option<String>,
    pub logo: Option<String>,
    pub edit_link: Option<EditLinkPatch>,
    pub nav: Option<Vec<NavItem>>,
    pub social_links: Option<Vec<SocialLink>>,
    pub outline: Option<OutlinePatch>,
}

impl Merge for ThemeConfig {
    type Patch = ThemeConfigPatch;

    fn merge(mut self, patch: ThemeConfigPatch) -> Self {
        if patch.last_updated_text.is_some() {
            self.last_updated_text = patch.last_updated_text;
        }
        if patch.logo.is_some() {
            self.logo = patch.logo;
        }
        self.edit_link = merge_nested(self.edit_link, patch.edit_link);
        replace(&mut self.nav, patch.nav);
        replace(&mut self.social_links, patch.social_links);
        self.outline = merge_nested(self.outline, patch.outline);
        self
    }
}

impl ThemeConfig {
    pub const LOGO: FieldPath = FieldPath::new("themeConfig.logo");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if let Some(logo) = &self.logo
            && !is_root_relative(logo)
        {
            diag.error_with_hint(
                Self::LOGO,
                format!("logo '{logo}' must be relative to the site root"),
                format!("use \"/{}\"", logo.trim_start_matches('/')),
            );
        }

        if let Some(edit_link) = &self.edit_link {
            edit_link.validate(diag);
        }
        for item in &self.nav {
            item.validate(diag);
        }
        for link in &self.social_links {
            link.validate(diag);
        }
        self.outline.validate(diag);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logo_must_be_root_relative() {
        let mut diag = ConfigDiagnostics::new();
        let theme = ThemeConfig {
            logo: Some("logo.svg".into()),
            ..Default::default()
        };
        theme.validate(&mut diag);
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].hint.as_deref(), Some("use \"/logo.svg\""));
    }

    #[test]
    fn test_patch_from_toml() {
        let patch: ThemeConfigPatch = toml::from_str(
            r#"
logo = "/logo.svg"
nav = [{ text = "Home", link = "/" }]

[outline]
label = "Contents"
"#,
        )
        .unwrap();
        let theme = ThemeConfig::default().merge(patch);
        assert_eq!(theme.logo.as_deref(), Some("/logo.svg"));
        assert_eq!(theme.nav, vec![NavItem::new("Home", "/")]);
        assert_eq!(theme.outline.label, "Contents");
        assert_eq!(theme.outline.level, OutlineLevel::default());
        assert!(theme.edit_link.is_none());
    }

    #[test]
    fn test_empty_sequence_clears() {
        let theme = ThemeConfig {
            nav: vec![NavItem::new("Home", "/")],
            ..Default::default()
        };
        let theme = theme.merge(ThemeConfigPatch {
            nav: Some(Vec::new()),
            ..Default::default()
        });
        assert!(theme.nav.is_empty());
    }
}
