//! locale-html - prerendered, localized HTML entry documents for app builds.

mod appinfo;
mod build;
mod cli;
mod config;
mod emit;
mod locale;
mod logger;
mod render;
mod startup;
mod template;
mod utils;

use anyhow::{Result, bail};
use build::build_locales;
use clap::Parser;
use cli::{Cli, Commands};
use config::ProjectConfig;
use locale::{ResolveContext, resolve};
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    match &cli.command {
        Commands::Build { .. } => {
            let report = build_locales(&config)?;
            crate::log!(
                "build";
                "{} of {} locales prerendered",
                report.status.content.len(),
                report.locales.len()
            );
            if report.has_blocking() {
                bail!("localized documents were not generated");
            }
            if !report.diagnostics.is_empty() {
                bail!("build finished with {} error(s)", report.diagnostics.len());
            }
            Ok(())
        }
        Commands::Locales { .. } => {
            print_locales(&config);
            Ok(())
        }
    }
}

/// Load and validate configuration from CLI arguments
fn load_config(cli: &Cli) -> Result<ProjectConfig> {
    let root = cli.root.as_deref().unwrap_or(Path::new("./"));
    let config_path = root.join(&cli.config);

    let mut config = if config_path.exists() {
        ProjectConfig::from_path(&config_path)?
    } else {
        ProjectConfig::default()
    };
    config.update_with_cli(cli);
    config.validate(cli)?;

    Ok(config)
}

/// Print the resolved target locales, one per line.
fn print_locales(config: &ProjectConfig) {
    let locales = resolve(&ResolveContext::from_config(config), &config.locales.target);
    crate::log!("locales"; "{} locales", locales.len());
    for locale in &locales {
        println!("{locale}");
    }
}
