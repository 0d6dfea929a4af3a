//! Localized document emission.
//!
//! Combines the template fragments around the root container with each
//! locale's prerendered markup, then writes the documents to the output
//! directory.

use crate::{
    build::BuildError,
    locale::LocaleId,
    render::RenderStatus,
    template::TemplateFragments,
    utils::minify::minify_html,
};
use anyhow::{Context, Result};
use rayon::prelude::*;
use std::{fs, path::Path};

/// Name of the locale-neutral fallback document.
pub const FALLBACK_DOCUMENT: &str = "index.html";

/// A named output document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmittedDocument {
    /// `None` for the fallback document.
    pub locale: Option<LocaleId>,
    pub name: String,
    pub content: String,
}

impl EmittedDocument {
    pub fn localized(locale: &LocaleId, content: String) -> Self {
        Self {
            name: locale.document_name(),
            locale: Some(locale.clone()),
            content,
        }
    }

    pub fn fallback(content: String) -> Self {
        Self {
            locale: None,
            name: FALLBACK_DOCUMENT.to_owned(),
            content,
        }
    }
}

/// One document per successfully rendered locale, in `locales` order.
///
/// Without template fragments nothing is emitted and the whole batch fails
/// with [`BuildError::RootNotFound`].
pub fn emit_localized(
    fragments: Option<&TemplateFragments>,
    status: &RenderStatus,
    locales: &[LocaleId],
) -> Result<Vec<EmittedDocument>, BuildError> {
    let fragments = fragments.ok_or(BuildError::RootNotFound)?;

    Ok(locales
        .iter()
        .filter_map(|locale| {
            let markup = status.markup(locale)?;
            Some(EmittedDocument::localized(locale, fragments.wrap(markup)))
        })
        .collect())
}

/// Write `documents` into `output`, minifying when requested.
pub fn write_documents(output: &Path, documents: &[EmittedDocument], minify: bool) -> Result<()> {
    fs::create_dir_all(output)
        .with_context(|| format!("Failed to create output directory: {}", output.display()))?;

    documents.par_iter().try_for_each(|document| {
        let path = output.join(&document.name);
        let content = minify_html(document.content.as_bytes(), minify);
        fs::write(&path, &*content)
            .with_context(|| format!("Failed to write document: {}", path.display()))
    })
}
