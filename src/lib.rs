//! Site configuration for a documentation/blog generator's default theme.
//!
//! [`site::build_config`] merges the site's overrides onto the base theme and
//! returns the value the generator consumes. Everything else in the crate
//! supports inspecting, layering and checking that value.

pub mod cli;
pub mod config;
pub mod logger;
pub mod site;
pub mod theme;
pub mod utils;

pub use config::{Merge, SiteConfig, SiteConfigPatch, merge, merge_all};
pub use site::build_config;
