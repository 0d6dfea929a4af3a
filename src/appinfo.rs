//! Per-locale app metadata (`appinfo.json`).
//!
//! Every prerendered locale gets an `appinfo.json` under
//! `<resources>/<locale>/` whose `main` points at the locale's document and
//! whose `usePrerendering` is set. Locales without existing metadata get a
//! freshly generated entry.
//!
//! ```text
//! resources/en/US/appinfo.json   { "main": "../../../index.en-US.html", "usePrerendering": true }
//! ```

use crate::{config::ProjectConfig, locale::LocaleId, log};
use anyhow::{Context, Result, bail};
use serde_json::{Map, Value};
use std::{
    fs,
    path::{Component, Path, PathBuf},
};
use walkdir::WalkDir;

pub const APPINFO_FILE: &str = "appinfo.json";

pub type Metadata = Map<String, Value>;

/// Storage for localized metadata.
pub trait MetadataGenerator {
    /// Locales that already have metadata.
    fn list_localized(&self) -> Result<Vec<LocaleId>>;

    /// Existing metadata of `locale`.
    fn load(&self, locale: &LocaleId) -> Result<Metadata>;

    fn store(&self, locale: &LocaleId, metadata: &Metadata) -> Result<()>;
}

/// Metadata read from the project's resources directory and written to the
/// matching directory in the output.
#[derive(Debug, Clone)]
pub struct AppInfoDir {
    source: PathBuf,
    output: PathBuf,
}

impl AppInfoDir {
    pub fn new(source: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            output: output.into(),
        }
    }

    pub fn from_config(config: &ProjectConfig) -> Self {
        let resources = &config.appinfo.resources;
        Self::new(
            config.get_root().join(resources),
            config.build.output.join(resources),
        )
    }
}

impl MetadataGenerator for AppInfoDir {
    fn list_localized(&self) -> Result<Vec<LocaleId>> {
        if !self.source.is_dir() {
            return Ok(Vec::new());
        }

        let mut locales = Vec::new();
        for entry in WalkDir::new(&self.source).min_depth(2) {
            let entry = entry
                .with_context(|| format!("Failed to scan resources: {}", self.source.display()))?;
            if !entry.file_type().is_file() || entry.file_name() != APPINFO_FILE {
                continue;
            }
            let Some(dir) = entry.path().parent().and_then(|p| p.strip_prefix(&self.source).ok())
            else {
                continue;
            };
            let locale = dir
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/");
            if LocaleId::is_locale_path(&locale) {
                locales.push(LocaleId::from(locale));
            }
        }
        Ok(locales)
    }

    fn load(&self, locale: &LocaleId) -> Result<Metadata> {
        let path = self.source.join(locale.as_str()).join(APPINFO_FILE);
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read appinfo: {}", path.display()))?;
        match serde_json::from_str::<Value>(&content)
            .with_context(|| format!("Failed to parse appinfo: {}", path.display()))?
        {
            Value::Object(metadata) => Ok(metadata),
            _ => bail!("appinfo is not a json object: {}", path.display()),
        }
    }

    fn store(&self, locale: &LocaleId, metadata: &Metadata) -> Result<()> {
        let dir = self.output.join(locale.as_str());
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
        let path = dir.join(APPINFO_FILE);
        let content = serde_json::to_string_pretty(metadata)?;
        fs::write(&path, content)
            .with_context(|| format!("Failed to write appinfo: {}", path.display()))
    }
}

/// Relative path from `<resources>/<locale>` back to the locale's document.
pub fn prerendered_main(resources: &Path, locale: &LocaleId) -> String {
    let depth = resources
        .components()
        .filter(|c| matches!(c, Component::Normal(_)))
        .count()
        + locale.segments();
    format!("{}{}", "../".repeat(depth), locale.document_name())
}

/// Outcome of one metadata pass.
#[derive(Debug, Default)]
pub struct MetadataSync {
    pub updated: usize,
    /// Locales whose metadata could not be read or written, in input order.
    pub failed: Vec<(LocaleId, anyhow::Error)>,
}

/// Point the metadata of every prerendered locale at its document.
///
/// A broken entry is recorded in [`MetadataSync::failed`] and never stops
/// the remaining locales. Only failing to list existing metadata is fatal.
pub fn sync_metadata<G>(generator: &G, resources: &Path, prerendered: &[LocaleId]) -> Result<MetadataSync>
where
    G: MetadataGenerator + ?Sized,
{
    let existing = generator.list_localized()?;
    let mut sync = MetadataSync::default();

    for locale in prerendered {
        let result = update_locale(generator, resources, locale, existing.contains(locale))
            .with_context(|| format!("locale `{}`", locale.dashed()));
        match result {
            Ok(()) => sync.updated += 1,
            Err(err) => {
                log!("appinfo"; "{:#}", err);
                sync.failed.push((locale.clone(), err));
            }
        }
    }

    Ok(sync)
}

fn update_locale<G>(generator: &G, resources: &Path, locale: &LocaleId, exists: bool) -> Result<()>
where
    G: MetadataGenerator + ?Sized,
{
    let mut metadata = if exists {
        generator.load(locale)?
    } else {
        let path = resources.join(locale.as_str()).join(APPINFO_FILE);
        log!("appinfo"; "generating {}", path.display());
        Metadata::new()
    };
    metadata.insert("main".to_owned(), Value::String(prerendered_main(resources, locale)));
    metadata.insert("usePrerendering".to_owned(), Value::Bool(true));
    generator.store(locale, &metadata)
}
