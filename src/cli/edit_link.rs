//! `edit-link`: expand the edit URL pattern for one page.

use crate::config::{ConfigError, SiteConfig};
use anyhow::Result;
use std::io::Write;

pub fn edit_link(config: &SiteConfig, page: &str, out: &mut impl Write) -> Result<()> {
    let Some(edit_link) = &config.theme_config.edit_link else {
        let reason = "themeConfig.editLink is not configured".to_string();
        return Err(ConfigError::Validation(reason).into());
    };

    let url = edit_link.url_for(page)?;
    writeln!(out, "{url}")?;
    Ok(())
}
