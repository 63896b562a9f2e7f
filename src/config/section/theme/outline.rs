//! `themeConfig.outline`: the on-page table of contents.
//!
//! # Example
//!
//! ```toml
//! [themeConfig.outline]
//! level = [1, 4]   # or 2, or "deep" (= [2, 6])
//! label = "On this page"
//! ```

use crate::config::merge::{Merge, replace};
use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize, Serializer};
use std::ops::RangeInclusive;

/// Deepest HTML heading level.
const MAX_DEPTH: u8 = 6;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Outline {
    pub level: OutlineLevel,
    pub label: String,
}

impl Default for Outline {
    fn default() -> Self {
        Self {
            level: OutlineLevel::default(),
            label: "On this page".into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OutlinePatch {
    pub level: Option<OutlineLevel>,
    pub label: Option<String>,
}

impl Merge for Outline {
    type Patch = OutlinePatch;

    fn merge(mut self, patch: OutlinePatch) -> Self {
        replace(&mut self.level, patch.level);
        replace(&mut self.label, patch.label);
        self
    }
}

impl Outline {
    pub const LEVEL: FieldPath = FieldPath::new("themeConfig.outline.level");
    pub const LABEL: FieldPath = FieldPath::new("themeConfig.outline.label");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let (lo, hi) = self.level.bounds();
        if lo == 0 || hi > MAX_DEPTH {
            diag.error_with_hint(
                Self::LEVEL,
                format!("heading depths must be within 1..={MAX_DEPTH}, got [{lo}, {hi}]"),
                "e.g.: level = [2, 3]",
            );
        } else if lo > hi {
            diag.error(Self::LEVEL, format!("empty range [{lo}, {hi}]"));
        }
        if self.label.trim().is_empty() {
            diag.warn(Self::LABEL, "outline label is empty");
        }
    }
}

// ============================================================================
// OutlineLevel
// ============================================================================

/// Heading depths included in the outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "LevelRepr")]
pub enum OutlineLevel {
    /// Only headings of this depth.
    Single(u8),
    /// Inclusive depth range.
    Range(u8, u8),
    /// Shorthand for `[2, 6]`.
    Deep,
}

impl Default for OutlineLevel {
    fn default() -> Self {
        Self::Single(2)
    }
}

impl OutlineLevel {
    /// Inclusive `(lo, hi)` bounds.
    pub const fn bounds(&self) -> (u8, u8) {
        match *self {
            Self::Single(depth) => (depth, depth),
            Self::Range(lo, hi) => (lo, hi),
            Self::Deep => (2, MAX_DEPTH),
        }
    }

    pub fn depths(&self) -> RangeInclusive<u8> {
        let (lo, hi) = self.bounds();
        lo..=hi
    }

    pub fn contains(&self, depth: u8) -> bool {
        self.depths().contains(&depth)
    }
}

/// Wire forms: `2`, `[1, 4]`, `"deep"`.
#[derive(Deserialize)]
#[serde(untagged)]
enum LevelRepr {
    Single(u8),
    Range([u8; 2]),
    Keyword(String),
}

impl TryFrom<LevelRepr> for OutlineLevel {
    type Error = String;

    fn try_from(repr: LevelRepr) -> Result<Self, Self::Error> {
        match repr {
            LevelRepr::Single(depth) => Ok(Self::Single(depth)),
            LevelRepr::Range([lo, hi]) => Ok(Self::Range(lo, hi)),
            LevelRepr::Keyword(k) if k == "deep" => Ok(Self::Deep),
            LevelRepr::Keyword(k) => Err(format!(
                "invalid outline level '{k}', expected a depth, [lo, hi] or \"deep\""
            )),
        }
    }
}

impl Serialize for OutlineLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match *self {
            Self::Single(depth) => serializer.serialize_u8(depth),
            Self::Range(lo, hi) => [lo, hi].serialize(serializer),
            Self::Deep => serializer.serialize_str("deep"),
        }
    }
}
