//! Render collaborator backed by an external command.
//!
//! The command is spawned once per locale from the project root:
//!
//! ```text
//! <command...> --source <chunk> --locale <en-US> --file <main.en-US.js> [--server] [--externals a,b]
//! ```
//!
//! Stdout is the rendered markup.

use super::{RenderRequest, Renderer};
use crate::{config::ProjectConfig, exec, utils::exec::FilterRule};
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Node runtime warnings written to stderr.
const RENDER_FILTER: FilterRule = FilterRule::new(&["(node:", "(Use `node --trace"]);

#[derive(Debug, Clone)]
pub struct CommandRenderer {
    command: Vec<String>,
    root: PathBuf,
}

impl CommandRenderer {
    pub fn new(command: Vec<String>, root: impl Into<PathBuf>) -> Self {
        Self {
            command,
            root: root.into(),
        }
    }

    pub fn from_config(config: &ProjectConfig) -> Self {
        Self::new(config.render.command.clone(), config.get_root())
    }
}

impl Renderer for CommandRenderer {
    fn render(&self, request: &RenderRequest<'_>) -> Result<String> {
        let externals = request.externals.join(",");
        let output = exec!(
            filter=&RENDER_FILTER;
            self.root.as_path();
            &self.command;
            "--source", request.source,
            "--locale", &request.locale,
            "--file", &request.file,
            if request.server { "--server" } else { "" },
            if externals.is_empty() { "" } else { "--externals" },
            &externals,
        )?;

        let markup = String::from_utf8(output.stdout)
            .with_context(|| format!("Renderer output for `{}` is not valid UTF-8", request.locale))?;
        Ok(markup.trim_end_matches(['\n', '\r']).to_owned())
    }
}
