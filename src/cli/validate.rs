//! `validate`: report every problem in the merged configuration.

use crate::config::SiteConfig;
use crate::log;
use anyhow::Result;

pub fn validate_config(config: &SiteConfig) -> Result<()> {
    config.validate()?;
    log!(
        "ok";
        "config is valid ({} nav, {} social links, {} head tags)",
        config.theme_config.nav.len(),
        config.theme_config.social_links.len(),
        config.head.len()
    );
    Ok(())
}
