//! `show` and `head`: print the merged configuration.

use super::Format;
use crate::config::SiteConfig;
use anyhow::{Context, Result};
use std::io::Write;

/// Serialize the config in the requested format.
pub fn render(config: &SiteConfig, format: Format) -> Result<String> {
    match format {
        Format::Json => {
            serde_json::to_string_pretty(config).context("failed to serialize config as JSON")
        }
        Format::Toml => {
            toml::to_string_pretty(config).context("failed to serialize config as TOML")
        }
    }
}

pub fn show(config: &SiteConfig, format: Format, out: &mut impl Write) -> Result<()> {
    let rendered = render(config, format)?;
    writeln!(out, "{}", rendered.trim_end())?;
    Ok(())
}

/// One rendered `<head>` tag per line.
pub fn head(config: &SiteConfig, out: &mut impl Write) -> Result<()> {
    for tag in &config.head {
        writeln!(out, "{}", tag.to_html())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::build_config;

    #[test]
    fn test_show_json_parses_back() {
        let config = build_config();
        let mut out = Vec::new();
        show(&config, Format::Json, &mut out).unwrap();

        let parsed: SiteConfig = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_show_json_key_order() {
        let rendered = render(&build_config(), Format::Json).unwrap();
        let extends = rendered.find("\"extends\"").unwrap();
        let theme = rendered.find("\"themeConfig\"").unwrap();
        assert!(extends < theme);
    }

    #[test]
    fn test_head_lines() {
        let mut out = Vec::new();
        head(&build_config(), &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "<link rel=\"icon\" href=\"/favicon.ico\">\n"
        );
    }
}
