//! `[build]` section configuration.
//!
//! Paths of the template, the compiled chunk and the output directory.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where emitted documents go.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFs {
    /// Real filesystem: prerender and write documents (default).
    #[default]
    Disk,
    /// In-memory output: prerendering is skipped and nothing is written.
    Memory,
}

impl OutputFs {
    pub const fn is_disk(self) -> bool {
        matches!(self, Self::Disk)
    }
}

/// `[build]` section in locale-html.toml.
///
/// # Example
/// ```toml
/// [build]
/// output = "dist"          # Bundle output, also receives the documents
/// template = "index.html"  # HTML template with a `<div id="root">`
/// chunk = "main.js"        # Compiled chunk handed to the renderer
/// js = ["main.js"]         # Script assets of the page
/// minify = true
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// Project root directory (usually set via CLI `--root`).
    #[serde(default = "defaults::build::root")]
    #[educe(Default = defaults::build::root())]
    pub root: Option<PathBuf>,

    /// Build output directory.
    #[serde(default = "defaults::build::output")]
    #[educe(Default = defaults::build::output())]
    pub output: PathBuf,

    /// HTML template.
    #[serde(default = "defaults::build::template")]
    #[educe(Default = defaults::build::template())]
    pub template: PathBuf,

    /// Chunk filename inside the output directory.
    #[serde(default = "defaults::build::chunk")]
    #[educe(Default = defaults::build::chunk())]
    pub chunk: String,

    /// Script assets; loaded by the startup script instead of `<script src>`.
    #[serde(default = "defaults::build::js")]
    #[educe(Default = defaults::build::js())]
    pub js: Vec<String>,

    /// Stylesheets linked in `<head>`.
    #[serde(default)]
    pub css: Vec<String>,

    /// Minify emitted documents.
    #[serde(default = "defaults::r#false")]
    #[educe(Default = false)]
    pub minify: bool,

    #[serde(default = "defaults::build::output_fs")]
    #[educe(Default = defaults::build::output_fs())]
    pub output_fs: OutputFs,
}

impl BuildConfig {
    /// Path of the compiled chunk.
    pub fn chunk_path(&self) -> PathBuf {
        self.output.join(&self.chunk)
    }
}

#[cfg(test)]
mod tests {
    use super::super::ProjectConfig;
    use super::*;

    #[test]
    fn test_build_config_defaults() {
        let config: ProjectConfig = toml::from_str("").unwrap();

        assert_eq!(config.build.output, PathBuf::from("dist"));
        assert_eq!(config.build.template, PathBuf::from("index.html"));
        assert_eq!(config.build.chunk, "main.js");
        assert_eq!(config.build.js, vec!["main.js".to_owned()]);
        assert!(config.build.css.is_empty());
        assert!(!config.build.minify);
        assert_eq!(config.build.output_fs, OutputFs::Disk);
    }

    #[test]
    fn test_build_config_custom() {
        let config = r#"
            [build]
            output = "out"
            template = "public/index.html"
            chunk = "app.js"
            js = ["vendor.js", "app.js"]
            css = ["app.css"]
            minify = true
            output_fs = "memory"
        "#;
        let config: ProjectConfig = toml::from_str(config).unwrap();

        assert_eq!(config.build.output, PathBuf::from("out"));
        assert_eq!(config.build.chunk_path(), PathBuf::from("out/app.js"));
        assert_eq!(config.build.js.len(), 2);
        assert_eq!(config.build.css, vec!["app.css".to_owned()]);
        assert!(config.build.minify);
        assert!(!config.build.output_fs.is_disk());
    }

    #[test]
    fn test_output_fs_parsing() {
        let config: ProjectConfig = toml::from_str("[build]\noutput_fs = \"disk\"").unwrap();
        assert!(config.build.output_fs.is_disk());

        let result: Result<ProjectConfig, _> = toml::from_str("[build]\noutput_fs = \"s3\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_field_rejection() {
        let result: Result<ProjectConfig, _> = toml::from_str("[build]\nunknown = true");
        assert!(result.is_err());
    }
}
