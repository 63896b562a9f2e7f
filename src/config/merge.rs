//! Field-level override composition.
//!
//! A base config is combined with a *patch*: a mirror of the config struct
//! whose fields are all optional. Merge rules:
//!
//! | Field kind      | Rule                                   |
//! |-----------------|----------------------------------------|
//! | scalar / string | replaced when the patch sets it        |
//! | nested struct   | merged recursively                     |
//! | `Option<T>`     | merged onto `T::default()` when absent |
//! | sequence        | replaced wholesale, never concatenated |

use super::{SiteConfig, SiteConfigPatch};

/// A value that can absorb an override layer.
pub trait Merge: Sized {
    /// Partial form of `Self`; `None` fields keep the base value.
    type Patch;

    fn merge(self, patch: Self::Patch) -> Self;
}

impl<T: Merge + Default> Merge for Option<T> {
    type Patch = T::Patch;

    fn merge(self, patch: Self::Patch) -> Self {
        Some(self.unwrap_or_default().merge(patch))
    }
}

/// Merge `overrides` onto `base`.
pub fn merge(base: SiteConfig, overrides: SiteConfigPatch) -> SiteConfig {
    base.merge(overrides)
}

/// Fold override layers onto `base` in order; later layers win.
pub fn merge_all(base: SiteConfig, layers: impl IntoIterator<Item = SiteConfigPatch>) -> SiteConfig {
    layers.into_iter().fold(base, merge)
}

/// Replace `slot` if the override is set.
#[inline]
pub(crate) fn replace<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}

/// Merge a nested value if the override is set.
#[inline]
pub(crate) fn merge_nested<T: Merge>(slot: T, patch: Option<T::Patch>) -> T {
    match patch {
        Some(patch) => slot.merge(patch),
        None => slot,
    }
}
