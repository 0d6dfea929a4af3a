//! Startup scripts embedded in generated documents.
//!
//! Two variants share one template contract:
//!
//! | Variant      | Used by                  | Placeholders                   |
//! |--------------|--------------------------|--------------------------------|
//! | isomorphic   | `index.<locale>.html`    | `%SCREENTYPES%`, `%JSASSETS%`  |
//! | standard     | fallback `index.html`    | `%JSASSETS%`                   |
//!
//! After substitution the script is re-indented to sit nested under its
//! `<script>` tag.

use crate::config::StartupConfig;
use anyhow::{Context, Result};
use regex::Regex;
use serde_json::Value;
use std::{borrow::Cow, fs, path::Path, sync::OnceLock};

const ISOMORPHIC_TEMPLATE: &str = include_str!("prerendered-startup.js");
const STANDARD_TEMPLATE: &str = include_str!("standard-startup.js");

/// Indentation of script lines inside `<head>`.
const INDENT: &str = "\t\t";
/// Indentation of the closing `</script>`.
const CLOSING_INDENT: &str = "\t";

/// The recognized template placeholders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    ScreenTypes,
    JsAssets,
}

impl Placeholder {
    pub const ALL: [Self; 2] = [Self::ScreenTypes, Self::JsAssets];

    pub const fn token(self) -> &'static str {
        match self {
            Self::ScreenTypes => "%SCREENTYPES%",
            Self::JsAssets => "%JSASSETS%",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum StartupVariant<'a> {
    /// Boots a prerendered document.
    Isomorphic { screen_types: Option<&'a Value> },
    /// Boots a document rendered entirely at runtime.
    Standard,
}

impl StartupVariant<'_> {
    pub const fn placeholders(&self) -> &'static [Placeholder] {
        match self {
            Self::Isomorphic { .. } => &Placeholder::ALL,
            Self::Standard => &[Placeholder::JsAssets],
        }
    }

    const fn builtin_template(&self) -> &'static str {
        match self {
            Self::Isomorphic { .. } => ISOMORPHIC_TEMPLATE,
            Self::Standard => STANDARD_TEMPLATE,
        }
    }
}

/// Substitute every placeholder of `variant` in `template`, then re-indent.
pub fn compose(template: &str, variant: StartupVariant<'_>, js_assets: &[String]) -> Result<String> {
    let mut script = template.to_owned();
    for placeholder in variant.placeholders() {
        let value = match (placeholder, variant) {
            (Placeholder::ScreenTypes, StartupVariant::Isomorphic { screen_types }) => {
                serde_json::to_string(&screen_types)?
            }
            (Placeholder::ScreenTypes, StartupVariant::Standard) => continue,
            (Placeholder::JsAssets, _) => serde_json::to_string(js_assets)?,
        };
        script = script.replace(placeholder.token(), &value);
    }
    Ok(indent(&script))
}

fn line_break_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[\n\r]+([^\n\r])").unwrap())
}

fn trailing_break_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[\n\r]+$").unwrap())
}

/// Indent every line by `INDENT`; a trailing line break gets `CLOSING_INDENT`.
fn indent(script: &str) -> String {
    let lines = line_break_re().replace_all(script, format!("\n{INDENT}${{1}}"));
    let closed = trailing_break_re().replace(&lines, format!("\n{CLOSING_INDENT}"));
    format!("\n{INDENT}{closed}")
}

/// Both composed startup scripts for one build.
#[derive(Debug, Clone)]
pub struct StartupScripts {
    pub isomorphic: String,
    pub standard: String,
}

impl StartupScripts {
    pub fn compose(config: &StartupConfig, js_assets: &[String]) -> Result<Self> {
        let isomorphic = StartupVariant::Isomorphic {
            screen_types: config.screen_types.as_ref(),
        };
        let standard = StartupVariant::Standard;

        Ok(Self {
            isomorphic: compose(
                &load_template(config.isomorphic.as_deref(), isomorphic)?,
                isomorphic,
                js_assets,
            )?,
            standard: compose(
                &load_template(config.standard.as_deref(), standard)?,
                standard,
                js_assets,
            )?,
        })
    }
}

/// Read a template override, or fall back to the bundled one.
fn load_template(custom: Option<&Path>, variant: StartupVariant<'_>) -> Result<Cow<'static, str>> {
    match custom {
        Some(path) => fs::read_to_string(path)
            .map(Cow::Owned)
            .with_context(|| format!("Failed to read startup script: {}", path.display())),
        None => Ok(Cow::Borrowed(variant.builtin_template())),
    }
}
