//! sitecfg - print and check the site configuration.

use anyhow::Result;
use clap::{ColorChoice, Parser};
use sitecfg::cli::{self, Cli, Commands};
use sitecfg::{SiteConfig, build_config, debug};
use std::io::stdout;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    sitecfg::logger::set_verbose(cli.verbose);

    let config = SiteConfig::load(build_config(), &cli.config)?;
    debug!("config"; "extends theme '{}'", config.extends.name());

    let mut out = stdout().lock();
    match &cli.command {
        Commands::Show { format } => cli::show::show(&config, *format, &mut out),
        Commands::EditLink { page } => cli::edit_link::edit_link(&config, page, &mut out),
        Commands::Head => cli::show::head(&config, &mut out),
        Commands::Validate => cli::validate::validate_config(&config),
    }
}
