//! The blog's configuration: default theme plus the site's own overrides.

use crate::config::section::{
    EditLinkPatch, HeadTag, NavItem, OutlineLevel, OutlinePatch, SocialLink, ThemeConfigPatch,
};
use crate::config::{SiteConfig, SiteConfigPatch};
use crate::theme::ThemeRef;

const GITHUB_PROFILE: &str = "https://github.com/jasirvoriya";
const TWITTER_PROFILE: &str = "https://twitter.com/jasirvoriya";
const EDIT_PATTERN: &str = "https://github.com/JasirVoriya/JasirVoriya.github.io/tree/master/docs/:path";

/// Assemble the site configuration.
///
/// Pure: every call returns an equal value.
pub fn build_config() -> SiteConfig {
    overrides().resolve()
}

/// Site-specific layer applied over the base theme.
pub fn overrides() -> SiteConfigPatch {
    SiteConfigPatch {
        extends: Some(ThemeRef::Default),
        language: Some("zh-cn".into()),
        title: Some("JasirVoriya".into()),
        description: Some("JasirVoriya 的个人博客".into()),
        last_updated: Some(true),
        head: Some(vec![
            HeadTag::new("link")
                .attr("rel", "icon")
                .attr("href", "/favicon.ico"),
        ]),
        theme_config: Some(ThemeConfigPatch {
            last_updated_text: Some("最后更新于".into()),
            logo: Some("/logo.png".into()),
            edit_link: Some(EditLinkPatch {
                pattern: Some(EDIT_PATTERN.into()),
                text: Some("在 GitHub 上编辑此页".into()),
            }),
            nav: Some(vec![
                NavItem::new("首页", "/"),
                NavItem::new("关于作者", GITHUB_PROFILE),
            ]),
            social_links: Some(vec![
                SocialLink::new("github", GITHUB_PROFILE),
                SocialLink::new("x", TWITTER_PROFILE),
            ]),
            outline: Some(OutlinePatch {
                level: Some(OutlineLevel::Range(1, 4)),
                label: Some("目录".into()),
            }),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::section::PATH_PLACEHOLDER;

    #[test]
    fn test_build_is_deterministic() {
        assert_eq!(build_config(), build_config());
    }

    #[test]
    fn test_site_metadata() {
        let config = build_config();
        assert_eq!(config.extends, ThemeRef::Default);
        assert_eq!(config.language, "zh-cn");
        assert!(config.last_updated);
        assert_eq!(config.theme_config.logo.as_deref(), Some("/logo.png"));
    }

    #[test]
    fn test_nav_order() {
        let nav = build_config().theme_config.nav;
        assert_eq!(
            nav,
            vec![
                NavItem::new("首页", "/"),
                NavItem::new("关于作者", "https://github.com/jasirvoriya"),
            ]
        );
    }

    #[test]
    fn test_social_links_order() {
        let links = build_config().theme_config.social_links;
        assert_eq!(
            links,
            vec![
                SocialLink::new("github", "https://github.com/jasirvoriya"),
                SocialLink::new("x", "https://twitter.com/jasirvoriya"),
            ]
        );
    }

    #[test]
    fn test_outline_levels_one_to_four() {
        let outline = build_config().theme_config.outline;
        assert_eq!(outline.level.depths().collect::<Vec<_>>(), [1, 2, 3, 4]);
        assert_eq!(outline.label, "目录");
    }

    #[test]
    fn test_edit_link() {
        let edit_link = build_config().theme_config.edit_link.unwrap();
        assert_eq!(edit_link.pattern.matches(PATH_PLACEHOLDER).count(), 1);

        let url = edit_link.url_for("index.md").unwrap();
        assert!(
            url.as_str()
                .starts_with("https://github.com/JasirVoriya/JasirVoriya.github.io/tree/master/docs/")
        );
        assert!(url.as_str().ends_with("/docs/index.md"));
    }

    #[test]
    fn test_single_favicon_head_tag() {
        let head = build_config().head;
        assert_eq!(head.len(), 1);
        assert_eq!(head[0].tag, "link");
        assert_eq!(
            head[0].attrs.iter().collect::<Vec<_>>(),
            [("rel", "icon"), ("href", "/favicon.ico")]
        );
    }

    #[test]
    fn test_built_config_validates() {
        assert!(build_config().validate().is_ok());
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(build_config()).unwrap();
        assert_eq!(json["language"], "zh-cn");
        assert_eq!(json["head"][0][0], "link");
        assert_eq!(json["head"][0][1]["href"], "/favicon.ico");
        assert_eq!(json["themeConfig"]["outline"]["level"], serde_json::json!([1, 4]));
        assert_eq!(json["themeConfig"]["socialLinks"][1]["icon"], "x");
        assert_eq!(json["themeConfig"]["editLink"]["text"], "在 GitHub 上编辑此页");
    }

    #[test]
    fn test_serializes_to_toml() {
        let toml = toml::to_string_pretty(&build_config()).unwrap();
        assert!(toml.contains("language = \"zh-cn\""));
        assert!(toml.contains("目录"));
    }
}
