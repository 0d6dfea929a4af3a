//! Project configuration management for `locale-html.toml`.
//!
//! # Sections
//!
//! | Section      | Purpose                                          |
//! |--------------|--------------------------------------------------|
//! | `[build]`    | Template, chunk, output directory, minification  |
//! | `[locales]`  | Target locales and the manifests they come from  |
//! | `[render]`   | Prerender command                                |
//! | `[startup]`  | Startup script screen types and overrides        |
//! | `[appinfo]`  | Localized `appinfo.json` updates                 |
//!
//! # Example
//!
//! ```toml
//! [build]
//! output = "dist"
//! template = "index.html"
//! minify = true
//!
//! [locales]
//! target = "tv"
//!
//! [render]
//! command = ["node", "prerender.js"]
//!
//! [appinfo]
//! enable = true
//! ```

mod appinfo;
mod build;
pub mod defaults;
mod error;
mod locales;
mod render;
mod startup;

pub use build::OutputFs;
pub use startup::StartupConfig;

use appinfo::AppInfoConfig;
use build::BuildConfig;
use error::ConfigError;
use locales::LocalesConfig;
use render::RenderConfig;

use crate::cli::{Cli, Commands};
use crate::locale::TargetSpec;
use anyhow::{Result, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Default config file name.
pub const CONFIG_FILE: &str = "locale-html.toml";

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing locale-html.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    #[serde(default)]
    pub build: BuildConfig,

    #[serde(default)]
    pub locales: LocalesConfig,

    #[serde(default)]
    pub render: RenderConfig,

    #[serde(default)]
    pub startup: StartupConfig,

    #[serde(default)]
    pub appinfo: AppInfoConfig,
}

impl ProjectConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: ProjectConfig = toml::from_str(content).map_err(ConfigError::from)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        self.build.root.as_deref().unwrap_or(Path::new("./"))
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.build.root = Some(path.to_path_buf())
    }

    /// Update configuration with CLI arguments
    pub fn update_with_cli(&mut self, cli: &Cli) {
        let root = cli
            .root
            .as_ref()
            .cloned()
            .unwrap_or_else(|| self.get_root().to_owned());

        match &cli.command {
            Commands::Build { build_args } => {
                Self::update_option(&mut self.build.output, build_args.output.as_ref());
                Self::update_option(&mut self.build.minify, build_args.minify.as_ref());
                Self::update_option(&mut self.build.chunk, build_args.chunk.as_ref());
                if let Some(spec) = &build_args.locales {
                    self.locales.target = TargetSpec::parse(spec);
                }
            }
            Commands::Locales { target } => {
                if let Some(spec) = target {
                    self.locales.target = TargetSpec::parse(spec);
                }
            }
        }

        self.update_path_with_root(&root, &cli.config);
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Resolve paths against the root directory and normalize to absolute paths
    fn update_path_with_root(&mut self, root: &Path, config: &Path) {
        let root = Self::normalize_path(root);
        self.set_root(&root);

        self.config_path = Self::normalize_path(&root.join(config));
        self.build.output = Self::normalize_path(&root.join(&self.build.output));
        self.build.template = Self::normalize_path(&root.join(&self.build.template));

        for script in [&mut self.startup.isomorphic, &mut self.startup.standard] {
            if let Some(path) = script.as_mut() {
                *path = Self::normalize_path(&root.join(&*path));
            }
        }
    }

    /// Normalize a path to absolute, using canonicalize if the path exists
    fn normalize_path(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| {
            // For non-existent paths, manually make them absolute
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                std::env::current_dir()
                    .map(|cwd| cwd.join(path))
                    .unwrap_or_else(|_| path.to_path_buf())
            }
        })
    }

    /// Validate configuration for the current command
    pub fn validate(&self, cli: &Cli) -> Result<()> {
        if self.render.command.is_empty() {
            bail!(ConfigError::Validation(
                "[render.command] must have at least one element".into()
            ));
        }

        if !self.build.chunk.ends_with(".js") {
            bail!(ConfigError::Validation(
                "[build.chunk] must be a .js file".into()
            ));
        }

        if cli.is_build() {
            match &self.build.template {
                path if !path.exists() => bail!(ConfigError::Validation(format!(
                    "[build.template] not found: {}",
                    path.display()
                ))),
                path if !path.is_file() => bail!(ConfigError::Validation(
                    "[build.template] is not a file".into()
                )),
                _ => {}
            }
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
