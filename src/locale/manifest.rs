//! Locale discovery from a resource manifest.
//!
//! A manifest lists resource files relative to the resource root:
//!
//! ```json
//! { "files": ["en/US/strings.json", "fr/strings.json", "img/logo.png"] }
//! ```
//!
//! The parent directory of each file is a locale candidate.

use super::LocaleId;
use serde::Deserialize;
use std::{fs, path::Path};

#[derive(Debug, Default, Deserialize)]
struct Manifest {
    #[serde(default)]
    files: Vec<String>,
}

/// Scan the manifest at `path` and return the locales it references,
/// least specific first.
///
/// Unreadable or malformed manifests yield an empty list.
pub fn scan_manifest(path: &Path, include_ancestors: bool) -> Vec<LocaleId> {
    fs::read_to_string(path)
        .ok()
        .and_then(|content| locales_in_manifest(&content, include_ancestors))
        .unwrap_or_default()
}

/// Parse manifest text and collect its locales.
///
/// Dashes are normalized to path separators before parsing, so `en-US/x.json`
/// counts as `en/US`.
fn locales_in_manifest(content: &str, include_ancestors: bool) -> Option<Vec<LocaleId>> {
    let manifest: Manifest = serde_json::from_str(&content.replace('-', "/")).ok()?;
    let mut locales: Vec<&str> = Vec::new();

    for file in &manifest.files {
        let mut dir = dirname(file);
        if !include_ancestors {
            push_locale(&mut locales, dir);
            continue;
        }
        while !dir.is_empty() && dir != "." {
            push_locale(&mut locales, dir);
            let parent = dirname(dir);
            if parent == dir {
                break;
            }
            dir = parent;
        }
    }

    // Stable: equally specific locales keep discovery order
    locales.sort_by_key(|locale| locale.split('/').count());
    Some(locales.into_iter().map(LocaleId::from).collect())
}

fn push_locale<'a>(locales: &mut Vec<&'a str>, dir: &'a str) {
    if LocaleId::is_locale_path(dir) && !locales.contains(&dir) {
        locales.push(dir);
    }
}

/// Parent directory of a `/`-separated path; `.` when there is none.
fn dirname(path: &str) -> &str {
    match path.rfind('/') {
        Some(0) => "/",
        Some(index) => &path[..index],
        None => ".",
    }
}
