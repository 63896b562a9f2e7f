//! Configuration section definitions.
//!
//! | Module  | Key           | Purpose                                   |
//! |---------|---------------|-------------------------------------------|
//! | `head`  | `head`        | Tags injected into every page's `<head>`  |
//! | `theme` | `themeConfig` | Logo, nav, social links, edit link, outline |

pub mod head;
pub mod theme;

pub use head::{HeadAttrs, HeadTag};
pub use theme::{
    EditLink, EditLinkPatch, KNOWN_ICONS, NavItem, Outline, OutlineLevel, OutlinePatch,
    PATH_PLACEHOLDER, SocialLink, ThemeConfig, ThemeConfigPatch,
};
