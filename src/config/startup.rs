//! `[startup]` section configuration.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::PathBuf;

/// `[startup]` section in locale-html.toml - startup script settings.
///
/// # Example
/// ```toml
/// [startup]
/// screen_types = [
///     { name = "fhd", pxPerRem = 24, width = 1920, height = 1080, aspectRatioName = "hdtv" },
///     { name = "uhd", pxPerRem = 48, width = 3840, height = 2160, aspectRatioName = "hdtv" },
/// ]
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StartupConfig {
    /// Screen types embedded in the prerendered startup script.
    #[serde(default)]
    pub screen_types: Option<Value>,

    /// Custom prerendered startup script.
    #[serde(default)]
    pub isomorphic: Option<PathBuf>,

    /// Custom fallback startup script.
    #[serde(default)]
    pub standard: Option<PathBuf>,
}
