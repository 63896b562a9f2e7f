//! Type-safe config field path.

use owo_colors::OwoColorize;
use std::fmt;

/// A dotted path to a config field, as it appears in the serialized output.
///
/// Each section declares its paths as associated constants so diagnostics
/// never carry ad-hoc strings.
///
/// # Example
///
/// ```ignore
/// impl EditLink {
///     pub const PATTERN: FieldPath = FieldPath::new("themeConfig.editLink.pattern");
/// }
///
/// diag.error(EditLink::PATTERN, "missing `:path` placeholder");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(pub &'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        self.0
    }
}
