//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Print, inspect and check the site configuration
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Override file merged over the built-in config (default: site.toml)
    #[arg(short = 'C', long, global = true, default_value = "site.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Print the merged configuration
    #[command(visible_alias = "s")]
    Show {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },

    /// Print the edit URL for a page
    #[command(visible_alias = "e")]
    EditLink {
        /// Page source path relative to the docs root (e.g. `guide/index.md`)
        page: String,
    },

    /// Print the tags injected into each page's <head>
    Head,

    /// Check the merged configuration for mistakes
    #[command(visible_alias = "v")]
    Validate,
}

/// Serialization format for `show`
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Toml,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_show_format() {
        let cli = Cli::parse_from(["sitecfg", "show", "--format", "toml"]);
        assert!(matches!(cli.command, Commands::Show { format: Format::Toml }));
        assert_eq!(cli.config, PathBuf::from("site.toml"));
    }

    #[test]
    fn test_parse_edit_link_with_global_flags() {
        let cli = Cli::parse_from(["sitecfg", "edit-link", "posts/a.md", "-C", "alt.toml", "-v"]);
        assert!(cli.verbose);
        assert_eq!(cli.config, PathBuf::from("alt.toml"));
        match cli.command {
            Commands::EditLink { page } => assert_eq!(page, "posts/a.md"),
            other => panic!("unexpected command {other:?}"),
        }
    }
}
