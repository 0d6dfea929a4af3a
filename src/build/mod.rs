//! Localized build orchestration.
//!
//! # Architecture
//!
//! ```text
//! build_locales()
//!     │
//!     ├── resolve()              ──► target locales
//!     │
//!     ├── FileTemplate::before_processing()
//!     │       └── StartupScripts::compose()   (js assets move into the scripts)
//!     │
//!     ├── render_locales()       ──► RenderStatus   (parallel, per-locale failures)
//!     │
//!     ├── find_root(isomorphic template)
//!     │       └── emit_localized()  ──► index.<locale>.html
//!     │
//!     ├── standard template      ──► index.html
//!     │
//!     ├── sync_metadata()        ──► <resources>/<locale>/appinfo.json
//!     │
//!     └── write_documents()
//! ```
//!
//! Problems along the way become [`BuildError`] diagnostics in the returned
//! [`BuildReport`]; only I/O and setup failures abort the build.

mod error;

pub use error::BuildError;

use crate::{
    appinfo::{AppInfoDir, MetadataGenerator, sync_metadata},
    config::ProjectConfig,
    emit::{EmittedDocument, emit_localized, write_documents},
    locale::{LocaleId, ResolveContext, dedup_documents, resolve},
    log,
    logger::ProgressBars,
    render::{CommandRenderer, RenderOptions, RenderStatus, Renderer, render_locales},
    startup::StartupScripts,
    template::{FileTemplate, HtmlTag, TemplateEngine, find_root},
};
use anyhow::Result;

/// Everything one build produced.
#[derive(Debug, Default)]
pub struct BuildReport {
    pub locales: Vec<LocaleId>,
    pub status: RenderStatus,
    /// Localized documents in locale order, fallback last.
    pub documents: Vec<EmittedDocument>,
    pub diagnostics: Vec<BuildError>,
}

impl BuildReport {
    pub fn has_blocking(&self) -> bool {
        self.diagnostics.iter().any(BuildError::is_blocking)
    }
}

/// Build with the configured render command.
pub fn build_locales(config: &ProjectConfig) -> Result<BuildReport> {
    let renderer = CommandRenderer::from_config(config);
    let metadata = AppInfoDir::from_config(config);
    build_with(config, &renderer, &metadata)
}

/// Build with explicit collaborators.
pub fn build_with<R, G>(config: &ProjectConfig, renderer: &R, metadata: &G) -> Result<BuildReport>
where
    R: Renderer + ?Sized,
    G: MetadataGenerator + ?Sized,
{
    let locales = dedup_documents(resolve(
        &ResolveContext::from_config(config),
        &config.locales.target,
    ));
    log!("locales"; "targeting {} locales", locales.len());

    let mut template = FileTemplate::load(
        &config.build.template,
        config.build.js.clone(),
        config.build.css.clone(),
    )?;

    if !config.build.output_fs.is_disk() {
        log!("build"; "in-memory output, prerendering skipped");
        return Ok(BuildReport {
            documents: vec![EmittedDocument::fallback(template.render(&[])?)],
            locales,
            ..BuildReport::default()
        });
    }

    let js_assets = template.before_processing();
    let scripts = StartupScripts::compose(&config.startup, &js_assets)?;

    let status = prerender(config, renderer, &locales);
    let mut diagnostics: Vec<BuildError> = status.failure().into_iter().collect();

    let isomorphic = template.render(&[HtmlTag::inline_script(scripts.isomorphic.as_str())])?;
    let mut documents = match emit_localized(find_root(&isomorphic).as_ref(), &status, &locales) {
        Ok(documents) => {
            log!("html"; "generated {} localized documents", documents.len());
            documents
        }
        Err(err) => {
            diagnostics.push(err);
            Vec::new()
        }
    };

    if config.appinfo.enable {
        let prerendered: Vec<LocaleId> = documents.iter().filter_map(|d| d.locale.clone()).collect();
        match sync_metadata(metadata, &config.appinfo.resources, &prerendered) {
            Ok(sync) => {
                log!("appinfo"; "updated {} localized entries", sync.updated);
                diagnostics.extend(sync.failed.into_iter().map(|(_, err)| BuildError::Metadata(err)));
            }
            Err(err) => diagnostics.push(BuildError::Metadata(err)),
        }
    }

    let standard = template.render(&[HtmlTag::inline_script(scripts.standard.as_str())])?;
    documents.push(EmittedDocument::fallback(standard));

    write_documents(&config.build.output, &documents, config.build.minify)?;
    log!("html"; "wrote {} documents to {}", documents.len(), config.build.output.display());

    for diagnostic in &diagnostics {
        log!("error"; "{}", diagnostic);
    }

    Ok(BuildReport {
        locales,
        status,
        documents,
        diagnostics,
    })
}

/// Render every locale of the configured chunk with a progress bar.
fn prerender<R>(config: &ProjectConfig, renderer: &R, locales: &[LocaleId]) -> RenderStatus
where
    R: Renderer + ?Sized,
{
    let source = config.build.chunk_path();
    if !source.exists() {
        log!("warn"; "chunk `{}` not found", source.display());
    }
    log!("render"; "prerendering {} for {} locales", config.build.chunk, locales.len());

    let options = RenderOptions {
        source: &source,
        chunk: &config.build.chunk,
        server: config.render.server,
        externals: &config.render.externals,
    };

    let progress = ProgressBars::new_filtered(&[("render", locales.len())]);
    let status = render_locales(locales, renderer, options, || {
        if let Some(progress) = &progress {
            progress.inc_by_name("render");
        }
    });
    if let Some(progress) = &progress {
        progress.finish();
    }
    status
}
