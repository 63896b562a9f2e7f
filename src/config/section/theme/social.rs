//! `themeConfig.socialLinks`: icon links shown in the nav bar.

use crate::config::util::is_http_url;
use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

/// Icon identifiers the generator ships with.
pub const KNOWN_ICONS: &[&str] = &[
    "discord",
    "facebook",
    "github",
    "instagram",
    "linkedin",
    "mastodon",
    "npm",
    "slack",
    "twitter",
    "x",
    "youtube",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLink {
    pub icon: String,
    pub link: String,
}

impl SocialLink {
    pub const FIELD: FieldPath = FieldPath::new("themeConfig.socialLinks");

    pub fn new(icon: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            icon: icon.into(),
            link: link.into(),
        }
    }

    pub fn is_known_icon(&self) -> bool {
        KNOWN_ICONS.contains(&self.icon.as_str())
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if !self.is_known_icon() {
            diag.error_with_hint(
                Self::FIELD,
                format!("unknown icon '{}'", self.icon),
                format!("known icons: {}", KNOWN_ICONS.join(", ")),
            );
        }
        if !is_http_url(&self.link) {
            diag.error(
                Self::FIELD,
                format!("link '{}' for '{}' must be an http(s) URL", self.link, self.icon),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_icons() {
        assert!(SocialLink::new("github", "https://github.com/a").is_known_icon());
        assert!(SocialLink::new("x", "https://x.com/a").is_known_icon());
        assert!(!SocialLink::new("myspace", "https://myspace.com/a").is_known_icon());
    }

    #[test]
    fn test_validate_reports_icon_and_link() {
        let mut diag = ConfigDiagnostics::new();
        SocialLink::new("github", "https://github.com/a").validate(&mut diag);
        assert!(diag.is_empty());

        SocialLink::new("myspace", "/relative").validate(&mut diag);
        assert_eq!(diag.len(), 2);
        assert!(diag.errors()[0].hint.as_deref().unwrap().contains("github"));
    }
}
