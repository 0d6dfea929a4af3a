//! Locale identifiers and target locale resolution.
//!
//! - **target**: turn a target spec (`tv`, `used`, `all`, a json file, a
//!   comma-separated list) into an ordered list of locales
//! - **manifest**: derive the locales an app uses from a resource manifest

mod manifest;
mod target;

pub use manifest::scan_manifest;
pub use target::{ResolveContext, TargetSpec, resolve};

use serde::{Deserialize, Serialize};
use std::{collections::HashSet, fmt};

/// A hierarchical locale path such as `en` or `en/US`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocaleId(String);

impl LocaleId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Path separators replaced with dashes (`en/US` → `en-US`).
    pub fn dashed(&self) -> String {
        self.0.replace(['/', '\\'], "-")
    }

    /// Number of path segments; fewer segments means a more general locale.
    pub fn segments(&self) -> usize {
        self.0.split('/').count()
    }

    /// Name of the prerendered entry document for this locale.
    pub fn document_name(&self) -> String {
        format!("index.{}.html", self.dashed())
    }

    /// Whether a directory name has the shape of a locale path:
    /// exactly two characters, or a two character first segment.
    pub fn is_locale_path(path: &str) -> bool {
        let mut chars = path.chars();
        let head: String = chars.by_ref().take(2).collect();
        head.chars().count() == 2 && !head.contains('/') && matches!(chars.next(), None | Some('/'))
    }
}

/// Drop locales whose document name repeats an earlier one.
pub fn dedup_documents(locales: Vec<LocaleId>) -> Vec<LocaleId> {
    let mut seen = HashSet::new();
    locales
        .into_iter()
        .filter(|locale| seen.insert(locale.dashed()))
        .collect()
}

impl fmt::Display for LocaleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LocaleId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for LocaleId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashed_replaces_separators() {
        assert_eq!(LocaleId::from("en/US").dashed(), "en-US");
        assert_eq!(LocaleId::from("zh/Hant/TW").dashed(), "zh-Hant-TW");
        assert_eq!(LocaleId::from("zh\\Hans").dashed(), "zh-Hans");
        assert_eq!(LocaleId::from("fr").dashed(), "fr");
    }

    #[test]
    fn test_segments() {
        assert_eq!(LocaleId::from("en").segments(), 1);
        assert_eq!(LocaleId::from("en/US").segments(), 2);
        assert_eq!(LocaleId::from("zh/Hant/TW").segments(), 3);
    }

    #[test]
    fn test_document_name() {
        assert_eq!(LocaleId::from("en/US").document_name(), "index.en-US.html");
        assert_eq!(LocaleId::from("ko").document_name(), "index.ko.html");
    }

    #[test]
    fn test_is_locale_path() {
        assert!(LocaleId::is_locale_path("en"));
        assert!(LocaleId::is_locale_path("en/US"));
        assert!(LocaleId::is_locale_path("zh/Hant/TW"));
        assert!(!LocaleId::is_locale_path("eng"));
        assert!(!LocaleId::is_locale_path("."));
        assert!(!LocaleId::is_locale_path("img/icons"));
        assert!(!LocaleId::is_locale_path(""));
    }

    #[test]
    fn test_is_locale_path_counts_characters() {
        // "ü" is two bytes but one character
        assert!(!LocaleId::is_locale_path("ü"));
        assert!(!LocaleId::is_locale_path("ü/DE"));
        assert!(LocaleId::is_locale_path("ét"));
    }

    #[test]
    fn test_dedup_documents_first_wins() {
        let locales = vec![
            LocaleId::from("en"),
            LocaleId::from("en/US"),
            LocaleId::from("en"),
            LocaleId::from("en-US"),
            LocaleId::from("fr"),
        ];
        assert_eq!(
            dedup_documents(locales),
            vec![LocaleId::from("en"), LocaleId::from("en/US"), LocaleId::from("fr")]
        );
    }

    #[test]
    fn test_serde_transparent() {
        let locales: Vec<LocaleId> = serde_json::from_str(r#"["en", "en/US"]"#).unwrap();
        assert_eq!(locales, vec![LocaleId::from("en"), LocaleId::from("en/US")]);
        assert_eq!(serde_json::to_string(&locales[1]).unwrap(), r#""en/US""#);
    }
}
