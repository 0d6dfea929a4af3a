//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Prerender localized HTML entry documents for a multi-locale app build
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Project root directory
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Config file name (default: locale-html.toml)
    #[arg(short = 'C', long, default_value = crate::config::CONFIG_FILE)]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Build arguments overriding `[build]` and `[locales]`
#[derive(clap::Args, Debug, Clone)]
pub struct BuildArgs {
    /// Output directory path (relative to project root)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Target locales: tv, signage, used, all, a .json file or a comma-separated list
    #[arg(short, long)]
    pub locales: Option<String>,

    /// Minify the html documents
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub minify: Option<bool>,

    /// Compiled chunk handed to the renderer (e.g. main.js)
    #[arg(long)]
    pub chunk: Option<String>,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Prerender every target locale and write the localized documents
    Build {
        #[command(flatten)]
        build_args: BuildArgs,
    },

    /// Print the resolved target locales
    Locales {
        /// Target spec overriding `[locales.target]`
        #[arg(short, long)]
        target: Option<String>,
    },
}

impl Cli {
    pub const fn is_build(&self) -> bool {
        matches!(self.command, Commands::Build { .. })
    }
}
