//! Per-locale prerendering.
//!
//! Every resolved locale is rendered independently. A failing locale is
//! recorded in the returned [`RenderStatus`] and never stops the others.
//!
//! ```text
//! render_locales()
//!     │
//!     ├── par_iter over locales ──► Renderer::render(request)
//!     │                                 │
//!     │                                 ├── Ok(markup)  → content
//!     │                                 └── Err(cause)  → failed + errors
//!     │
//!     └── fold results in resolution order
//! ```

mod command;

pub use command::CommandRenderer;

use crate::{build::BuildError, locale::LocaleId, log};
use anyhow::Result;
use rayon::prelude::*;
use std::{collections::HashMap, path::Path};

/// Inputs for rendering one locale.
#[derive(Debug, Clone)]
pub struct RenderRequest<'a> {
    /// Locale in dashed form (`en-US`).
    pub locale: String,
    /// Compiled application chunk.
    pub source: &'a Path,
    /// Localized chunk filename (`main.en-US.js`).
    pub file: String,
    pub server: bool,
    pub externals: &'a [String],
}

/// The render collaborator: application code in, markup for one locale out.
pub trait Renderer: Sync {
    fn render(&self, request: &RenderRequest<'_>) -> Result<String>;
}

impl<F> Renderer for F
where
    F: Fn(&RenderRequest<'_>) -> Result<String> + Sync,
{
    fn render(&self, request: &RenderRequest<'_>) -> Result<String> {
        self(request)
    }
}

/// Pass-through settings shared by every request of one build.
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions<'a> {
    /// Path of the compiled chunk.
    pub source: &'a Path,
    /// Chunk filename the localized filenames derive from.
    pub chunk: &'a str,
    pub server: bool,
    pub externals: &'a [String],
}

impl<'a> RenderOptions<'a> {
    fn request(&self, locale: &LocaleId) -> RenderRequest<'a> {
        let dashed = locale.dashed();
        RenderRequest {
            file: localized_filename(self.chunk, &dashed),
            locale: dashed,
            source: self.source,
            server: self.server,
            externals: self.externals,
        }
    }
}

/// `main.js` → `main.<locale>.js`. Names without a `.js` suffix are kept.
pub fn localized_filename(chunk: &str, dashed_locale: &str) -> String {
    match chunk.strip_suffix(".js") {
        Some(stem) => format!("{stem}.{dashed_locale}.js"),
        None => chunk.to_owned(),
    }
}

/// Outcome of rendering every locale of one build.
///
/// Each locale lands either in `content` or in both `failed` and `errors`.
#[derive(Debug, Default)]
pub struct RenderStatus {
    pub content: HashMap<LocaleId, String>,
    /// Failed locales in resolution order.
    pub failed: Vec<LocaleId>,
    pub errors: HashMap<LocaleId, anyhow::Error>,
}

impl RenderStatus {
    /// Markup for a successfully rendered locale.
    pub fn markup(&self, locale: &LocaleId) -> Option<&str> {
        if self.errors.contains_key(locale) {
            return None;
        }
        self.content.get(locale).map(String::as_str)
    }

    /// One aggregated diagnostic naming every failed locale.
    pub fn failure(&self) -> Option<BuildError> {
        (!self.failed.is_empty()).then(|| BuildError::RenderFailed(self.failed.clone()))
    }

    fn record(&mut self, locale: &LocaleId, result: Result<String>) {
        match result {
            Ok(markup) => {
                self.content.insert(locale.clone(), markup);
            }
            Err(err) => {
                self.failed.push(locale.clone());
                self.errors.insert(locale.clone(), err);
            }
        }
    }
}

/// Render every locale with `renderer`.
///
/// Rendering runs in parallel; results are folded in `locales` order so
/// `failed` keeps resolution order. `on_progress` is called once per
/// finished locale.
pub fn render_locales<R, F>(
    locales: &[LocaleId],
    renderer: &R,
    options: RenderOptions<'_>,
    on_progress: F,
) -> RenderStatus
where
    R: Renderer + ?Sized,
    F: Fn() + Sync,
{
    let results: Vec<Result<String>> = locales
        .par_iter()
        .map(|locale| {
            let request = options.request(locale);
            let result = renderer.render(&request);
            if let Err(err) = &result {
                log!("render"; "{} failed: {:#}", request.locale, err);
            }
            on_progress();
            result
        })
        .collect();

    let mut status = RenderStatus::default();
    for (locale, result) in locales.iter().zip(results) {
        status.record(locale, result);
    }
    status
}
