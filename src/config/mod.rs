//! Site configuration: data model, override layers and validation.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── merge          # Merge trait, merge(), merge_all()
//! ├── section/       # Configuration section definitions
//! │   ├── head       # head tags
//! │   └── theme/     # themeConfig (edit link, nav, social, outline)
//! ├── types/         # ConfigError, ConfigDiagnostics, FieldPath
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! # Layers
//!
//! | Layer              | Source                                   |
//! |--------------------|------------------------------------------|
//! | theme defaults     | [`ThemeRef::base_config`]                |
//! | site overrides     | compiled in, see [`crate::site`]         |
//! | override file      | optional `site.toml`, [`SiteConfigPatch`] |

pub mod merge;
pub mod section;
pub mod types;
mod util;

pub use merge::{Merge, merge, merge_all};
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath};

use crate::theme::ThemeRef;
use crate::{debug, log};
use anyhow::Result;
use merge::{merge_nested, replace};
use section::{HeadTag, ThemeConfig, ThemeConfigPatch};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};
use util::find_config_file;

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration handed to the site generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    /// Base theme this config was built on.
    pub extends: ThemeRef,

    /// Locale tag, e.g. `zh-cn`.
    pub language: String,

    pub title: String,

    pub description: String,

    /// Show each page's last git commit time.
    pub last_updated: bool,

    /// Tags injected into every page's `<head>`, in document order.
    pub head: Vec<HeadTag>,

    pub theme_config: ThemeConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        ThemeRef::default().base_config()
    }
}

/// One override layer over [`SiteConfig`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfigPatch {
    pub extends: Option<ThemeRef>,
    pub language: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub last_updated: Option<bool>,
    pub head: Option<Vec<HeadTag>>,
    pub theme_config: Option<ThemeConfigPatch>,
}

impl Merge for SiteConfig {
    type Patch = SiteConfigPatch;

    fn merge(mut self, patch: SiteConfigPatch) -> Self {
        replace(&mut self.extends, patch.extends);
        replace(&mut self.language, patch.language);
        replace(&mut self.title, patch.title);
        replace(&mut self.description, patch.description);
        replace(&mut self.last_updated, patch.last_updated);
        replace(&mut self.head, patch.head);
        self.theme_config = merge_nested(self.theme_config, patch.theme_config);
        self
    }
}

impl SiteConfigPatch {
    /// Merge onto the theme named by `extends` (or the default theme).
    pub fn resolve(self) -> SiteConfig {
        let base = self.extends.unwrap_or_default().base_config();
        merge(base, self)
    }

    /// Parse an override layer from TOML.
    pub fn from_str(content: &str) -> Result<Self> {
        let patch: Self = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(patch)
    }

    /// Load an override layer from a file, warning about unknown fields.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (patch, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }
        Ok(patch)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let patch = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((patch, ignored))
    }

    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }
}

impl SiteConfig {
    pub const LANGUAGE: FieldPath = FieldPath::new("language");
    pub const TITLE: FieldPath = FieldPath::new("title");
    pub const HEAD: FieldPath = FieldPath::new("head");

    /// Apply the override file named `config_name` on top of `base`.
    ///
    /// The file is searched upward from the current directory. A missing
    /// file is not an error: `base` is returned unchanged.
    pub fn load(base: SiteConfig, config_name: &Path) -> Result<Self> {
        let Some(path) = find_config_file(config_name) else {
            debug!("config"; "no {} found, using built-in config", config_name.display());
            return Ok(base);
        };

        debug!("config"; "applying overrides from {}", path.display());
        let patch = SiteConfigPatch::from_path(&path)?;
        Ok(merge(base, patch))
    }

    /// Validate configuration.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut diag = ConfigDiagnostics::new();

        if self.language.trim().is_empty() {
            diag.error_with_hint(Self::LANGUAGE, "language is empty", "e.g.: \"en-US\"");
        }
        if self.title.trim().is_empty() {
            diag.warn(Self::TITLE, "site title is empty");
        }
        for tag in &self.head {
            if tag.tag.is_empty() || !tag.tag.chars().all(|c| c.is_ascii_alphanumeric()) {
                diag.error(Self::HEAD, format!("invalid tag name '{}'", tag.tag));
            }
        }
        self.theme_config.validate(&mut diag);

        diag.print_warnings();
        diag.into_result().map_err(ConfigError::Diagnostics)
    }
}

// ============================================================================
// Test Helpers
// ============================================================================

/// Parse an override layer, panicking on unknown fields (to catch typos in tests).
#[cfg(test)]
pub fn test_parse_patch(content: &str) -> SiteConfigPatch {
    let (parsed, ignored) = SiteConfigPatch::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
