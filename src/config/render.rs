//! `[render]` section configuration.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[render]` section in locale-html.toml - the prerender command.
///
/// # Example
/// ```toml
/// [render]
/// command = ["node", "scripts/prerender.js"]
/// server = true
/// externals = ["@enact/core"]
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct RenderConfig {
    /// Render command and arguments
    #[serde(default = "defaults::render::command")]
    #[educe(Default = defaults::render::command())]
    pub command: Vec<String>,

    /// Render in server mode.
    #[serde(default = "defaults::r#false")]
    #[educe(Default = false)]
    pub server: bool,

    /// Modules the renderer loads from outside the chunk.
    #[serde(default)]
    pub externals: Vec<String>,
}
