//! `[appinfo]` section configuration.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[appinfo]` section in locale-html.toml - localized `appinfo.json` updates.
///
/// # Example
/// ```toml
/// [appinfo]
/// enable = true
/// resources = "resources"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct AppInfoConfig {
    #[serde(default = "defaults::r#false")]
    #[educe(Default = false)]
    pub enable: bool,

    /// Resource directory holding `<locale>/appinfo.json`, relative to the
    /// root and mirrored into the output.
    #[serde(default = "defaults::appinfo::resources")]
    #[educe(Default = defaults::appinfo::resources())]
    pub resources: PathBuf,
}
