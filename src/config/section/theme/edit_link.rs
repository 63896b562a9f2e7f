//! `themeConfig.editLink`: per-page "edit this page" URL.
//!
//! # Example
//!
//! ```toml
//! [themeConfig.editLink]
//! pattern = "https://github.com/user/repo/edit/main/docs/:path"
//! text = "Edit this page"
//! ```

use crate::config::merge::{Merge, replace};
use crate::config::{ConfigDiagnostics, ConfigError, FieldPath};
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use serde::{Deserialize, Serialize};
use url::Url;

/// Placeholder replaced with the page's source path.
pub const PATH_PLACEHOLDER: &str = ":path";

/// Bytes escaped inside one page path segment.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Sample page used to check that a pattern expands to a valid URL.
const SAMPLE_PAGE: &str = "index.md";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EditLink {
    /// URL template containing `:path`.
    pub pattern: String,
    /// Link label.
    pub text: String,
}

impl Default for EditLink {
    fn default() -> Self {
        Self {
            pattern: String::new(),
            text: "Edit this page".into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EditLinkPatch {
    pub pattern: Option<String>,
    pub text: Option<String>,
}

impl Merge for EditLink {
    type Patch = EditLinkPatch;

    fn merge(mut self, patch: EditLinkPatch) -> Self {
        replace(&mut self.pattern, patch.pattern);
        replace(&mut self.text, patch.text);
        self
    }
}

impl EditLink {
    pub const PATTERN: FieldPath = FieldPath::new("themeConfig.editLink.pattern");
    pub const TEXT: FieldPath = FieldPath::new("themeConfig.editLink.text");

    pub fn new(pattern: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            text: text.into(),
        }
    }

    /// Number of `:path` occurrences in the pattern.
    pub fn placeholder_count(&self) -> usize {
        self.pattern.matches(PATH_PLACEHOLDER).count()
    }

    /// Expand the pattern for one page.
    ///
    /// `page` is the page's source path relative to the content root;
    /// a leading `/` is ignored. Each segment is percent-encoded, and `.` or
    /// `..` segments are rejected so the URL stays under the pattern's prefix.
    ///
    /// # Example
    /// ```ignore
    /// let link = EditLink::new("https://github.com/u/r/edit/main/docs/:path", "Edit");
    /// let url = link.url_for("guide/intro.md")?;
    /// assert_eq!(url.as_str(), "https://github.com/u/r/edit/main/docs/guide/intro.md");
    /// ```
    pub fn url_for(&self, page: &str) -> Result<Url, ConfigError> {
        if self.placeholder_count() == 0 {
            return Err(self.expand_error(format!("missing `{PATH_PLACEHOLDER}` placeholder")));
        }

        let mut encoded = Vec::new();
        for segment in page.trim_start_matches('/').split('/') {
            if matches!(segment, "." | "..") {
                return Err(self.expand_error(format!("page '{page}' leaves the docs root")));
            }
            encoded.push(utf8_percent_encode(segment, SEGMENT).to_string());
        }

        let expanded = self.pattern.replace(PATH_PLACEHOLDER, &encoded.join("/"));
        Url::parse(&expanded).map_err(|e| self.expand_error(e.to_string()))
    }

    fn expand_error(&self, reason: String) -> ConfigError {
        ConfigError::EditLink {
            pattern: self.pattern.clone(),
            reason,
        }
    }

    /// Validate the pattern.
    ///
    /// # Checks
    /// - `:path` appears exactly once
    /// - expanding a sample page yields an http(s) URL with a host
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        match self.placeholder_count() {
            1 => {}
            0 => {
                diag.error_with_hint(
                    Self::PATTERN,
                    format!("pattern has no `{PATH_PLACEHOLDER}` placeholder"),
                    "e.g.: \"https://github.com/user/repo/edit/main/docs/:path\"",
                );
                return;
            }
            n => {
                diag.error(
                    Self::PATTERN,
                    format!("`{PATH_PLACEHOLDER}` appears {n} times, expected once"),
                );
                return;
            }
        }

        match self.url_for(SAMPLE_PAGE) {
            Ok(url) if !matches!(url.scheme(), "http" | "https") => diag.error_with_hint(
                Self::PATTERN,
                format!("scheme '{}' not supported, must be http or https", url.scheme()),
                "use format like https://github.com/user/repo/edit/main/:path",
            ),
            Ok(url) if url.host_str().is_none() => {
                diag.error(Self::PATTERN, "URL must have a valid host");
            }
            Ok(_) => {}
            Err(e) => diag.error(Self::PATTERN, e.to_string()),
        }

        if self.text.trim().is_empty() {
            diag.warn(Self::TEXT, "edit link label is empty");
        }
    }
}
