//! Target locale resolution.
//!
//! | Spec               | Locales                                          |
//! |--------------------|--------------------------------------------------|
//! | `tv`, `signage`    | bundled preset list                              |
//! | `used`             | locales in the app's resource manifest           |
//! | `all`              | locales in the i18n library's manifest           |
//! | `*.json`           | `paths` of a locale-list file                    |
//! | `en-US,fr`         | literal list, dashes become path separators      |
//! | `["en/US", ...]`   | already resolved, passed through                 |
//!
//! Resolution never fails: unreadable inputs resolve to no locales.

use super::{LocaleId, scan_manifest};
use crate::config::ProjectConfig;
use crate::log;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

const TV_PRESET: &str = include_str!("presets/locales-tv.json");
const SIGNAGE_PRESET: &str = include_str!("presets/locales-signage.json");

/// Bundled locale lists for known device families.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    Tv,
    Signage,
}

impl Preset {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "tv" => Some(Self::Tv),
            "signage" => Some(Self::Signage),
            _ => None,
        }
    }

    const fn name(self) -> &'static str {
        match self {
            Self::Tv => "tv",
            Self::Signage => "signage",
        }
    }

    const fn source(self) -> &'static str {
        match self {
            Self::Tv => TV_PRESET,
            Self::Signage => SIGNAGE_PRESET,
        }
    }
}

/// A target locale specification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawTarget", into = "RawTarget")]
pub enum TargetSpec {
    /// Empty spec; no locales are targeted.
    Disabled,
    Preset(Preset),
    /// Locales referenced by the app's own resource manifest.
    #[default]
    Used,
    /// Locales referenced by the i18n library's manifest.
    All,
    /// A json file with a `paths` array.
    File(PathBuf),
    /// Comma-separated locale list.
    List(String),
    Resolved(Vec<LocaleId>),
}

impl TargetSpec {
    /// Classify a textual spec.
    pub fn parse(spec: &str) -> Self {
        if spec.is_empty() {
            return Self::Disabled;
        }
        if let Some(preset) = Preset::from_name(spec) {
            return Self::Preset(preset);
        }
        match spec {
            "used" => Self::Used,
            "all" => Self::All,
            _ if spec.to_ascii_lowercase().ends_with(".json") => Self::File(PathBuf::from(spec)),
            _ => Self::List(spec.to_owned()),
        }
    }
}

/// Config-file shape of a target: a spec string or a locale array.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum RawTarget {
    Locales(Vec<LocaleId>),
    Spec(String),
}

impl From<RawTarget> for TargetSpec {
    fn from(raw: RawTarget) -> Self {
        match raw {
            RawTarget::Locales(locales) => Self::Resolved(locales),
            RawTarget::Spec(spec) => Self::parse(&spec),
        }
    }
}

impl From<TargetSpec> for RawTarget {
    fn from(spec: TargetSpec) -> Self {
        match spec {
            TargetSpec::Disabled => Self::Spec(String::new()),
            TargetSpec::Preset(preset) => Self::Spec(preset.name().to_owned()),
            TargetSpec::Used => Self::Spec("used".to_owned()),
            TargetSpec::All => Self::Spec("all".to_owned()),
            TargetSpec::File(path) => Self::Spec(path.to_string_lossy().into_owned()),
            TargetSpec::List(list) => Self::Spec(list),
            TargetSpec::Resolved(locales) => Self::Locales(locales),
        }
    }
}

/// Where manifests and locale files are looked up.
#[derive(Debug, Clone)]
pub struct ResolveContext {
    /// Project root; relative paths resolve against it.
    pub root: PathBuf,
    /// App resource manifest, for `used`.
    pub manifest: PathBuf,
    /// i18n library manifest, for `all`.
    pub library_manifest: PathBuf,
    pub include_ancestors: bool,
}

impl ResolveContext {
    pub fn from_config(config: &ProjectConfig) -> Self {
        Self {
            root: config.get_root().to_path_buf(),
            manifest: config.locales.manifest.clone(),
            library_manifest: config.locales.library_manifest.clone(),
            include_ancestors: config.locales.include_ancestors,
        }
    }
}

/// Resolve `spec` into an ordered list of locales.
pub fn resolve(context: &ResolveContext, spec: &TargetSpec) -> Vec<LocaleId> {
    match spec {
        TargetSpec::Disabled => Vec::new(),
        TargetSpec::Resolved(locales) => locales.clone(),
        TargetSpec::Preset(preset) => parse_locale_list(preset.source()).unwrap_or_default(),
        TargetSpec::Used => scan_manifest(
            &context.root.join(&context.manifest),
            context.include_ancestors,
        ),
        TargetSpec::All => scan_manifest(
            &context.root.join(&context.library_manifest),
            context.include_ancestors,
        ),
        TargetSpec::File(path) => read_locale_file(&context.root.join(path)),
        TargetSpec::List(list) => split_locale_list(list),
    }
}

#[derive(Deserialize)]
struct LocaleList {
    #[serde(default)]
    paths: Vec<LocaleId>,
}

fn parse_locale_list(content: &str) -> Option<Vec<LocaleId>> {
    serde_json::from_str::<LocaleList>(content)
        .ok()
        .map(|list| list.paths)
}

fn read_locale_file(path: &Path) -> Vec<LocaleId> {
    let locales = fs::read_to_string(path)
        .ok()
        .and_then(|content| parse_locale_list(&content));
    match locales {
        Some(locales) => locales,
        None => {
            log!("warn"; "unable to read locale list `{}`", path.display());
            Vec::new()
        }
    }
}

fn split_locale_list(list: &str) -> Vec<LocaleId> {
    list.replace('-', "/")
        .split(',')
        .map(str::trim)
        .filter(|locale| !locale.is_empty())
        .map(LocaleId::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn context(root: &Path) -> ResolveContext {
        ResolveContext {
            root: root.to_path_buf(),
            manifest: PathBuf::from("resources/ilibmanifest.json"),
            library_manifest: PathBuf::from("node_modules/@enact/i18n/ilibmanifest"),
            include_ancestors: false,
        }
    }

    fn ids(locales: &[LocaleId]) -> Vec<&str> {
        locales.iter().map(LocaleId::as_str).collect()
    }

    // ------------------------------------------------------------------------
    // TargetSpec::parse
    // ------------------------------------------------------------------------

    #[test]
    fn test_parse_classification() {
        assert_eq!(TargetSpec::parse(""), TargetSpec::Disabled);
        assert_eq!(TargetSpec::parse("tv"), TargetSpec::Preset(Preset::Tv));
        assert_eq!(TargetSpec::parse("signage"), TargetSpec::Preset(Preset::Signage));
        assert_eq!(TargetSpec::parse("used"), TargetSpec::Used);
        assert_eq!(TargetSpec::parse("all"), TargetSpec::All);
        assert_eq!(
            TargetSpec::parse("custom/Locales.JSON"),
            TargetSpec::File(PathBuf::from("custom/Locales.JSON"))
        );
        assert_eq!(
            TargetSpec::parse("en-US,fr"),
            TargetSpec::List("en-US,fr".to_owned())
        );
    }

    #[test]
    fn test_deserialize_from_toml() {
        #[derive(Deserialize)]
        struct Wrapper {
            target: TargetSpec,
        }

        let spec: Wrapper = toml::from_str(r#"target = "tv""#).unwrap();
        assert_eq!(spec.target, TargetSpec::Preset(Preset::Tv));

        let spec: Wrapper = toml::from_str(r#"target = ["en/US", "ko"]"#).unwrap();
        assert_eq!(
            spec.target,
            TargetSpec::Resolved(vec![LocaleId::from("en/US"), LocaleId::from("ko")])
        );
    }

    // ------------------------------------------------------------------------
    // resolve
    // ------------------------------------------------------------------------

    #[test]
    fn test_resolve_disabled() {
        let dir = TempDir::new().unwrap();
        assert!(resolve(&context(dir.path()), &TargetSpec::Disabled).is_empty());
    }

    #[test]
    fn test_resolve_list_normalizes_dashes() {
        let dir = TempDir::new().unwrap();
        let locales = resolve(&context(dir.path()), &TargetSpec::parse("en-US, fr,,zh-Hant-TW"));
        assert_eq!(ids(&locales), vec!["en/US", "fr", "zh/Hant/TW"]);
    }

    #[test]
    fn test_resolve_is_idempotent_on_resolved() {
        let dir = TempDir::new().unwrap();
        let ctx = context(dir.path());
        let first = resolve(&ctx, &TargetSpec::parse("en-US,ko"));
        let second = resolve(&ctx, &TargetSpec::Resolved(first.clone()));
        assert_eq!(first, second);
    }

    #[test]
    fn test_resolve_resolved_passthrough_unvalidated() {
        let dir = TempDir::new().unwrap();
        let raw = vec![LocaleId::from("not-a-locale"), LocaleId::from("en/US")];
        let locales = resolve(&context(dir.path()), &TargetSpec::Resolved(raw.clone()));
        assert_eq!(locales, raw);
    }

    #[test]
    fn test_resolve_presets() {
        let dir = TempDir::new().unwrap();
        let ctx = context(dir.path());
        let tv = resolve(&ctx, &TargetSpec::Preset(Preset::Tv));
        let signage = resolve(&ctx, &TargetSpec::Preset(Preset::Signage));
        assert!(tv.contains(&LocaleId::from("en/US")));
        assert!(signage.contains(&LocaleId::from("ko/KR")));
        assert!(tv.len() > signage.len());
    }

    #[test]
    fn test_resolve_used_reads_project_manifest() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("resources")).unwrap();
        fs::write(
            dir.path().join("resources/ilibmanifest.json"),
            r#"{"files": ["ja/JP/strings.json", "ja/strings.json"]}"#,
        )
        .unwrap();

        let locales = resolve(&context(dir.path()), &TargetSpec::Used);
        assert_eq!(ids(&locales), vec!["ja", "ja/JP"]);
    }

    #[test]
    fn test_resolve_all_reads_library_manifest() {
        let dir = TempDir::new().unwrap();
        let lib = dir.path().join("node_modules/@enact/i18n");
        fs::create_dir_all(&lib).unwrap();
        fs::write(lib.join("ilibmanifest"), r#"{"files": ["de/DE/x.json"]}"#).unwrap();

        let locales = resolve(&context(dir.path()), &TargetSpec::All);
        assert_eq!(ids(&locales), vec!["de/DE"]);
    }

    #[test]
    fn test_resolve_used_without_manifest() {
        let dir = TempDir::new().unwrap();
        assert!(resolve(&context(dir.path()), &TargetSpec::Used).is_empty());
    }

    #[test]
    fn test_resolve_json_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("targets.json"), r#"{"paths": ["en/GB", "it"]}"#).unwrap();

        let locales = resolve(&context(dir.path()), &TargetSpec::parse("targets.json"));
        assert_eq!(ids(&locales), vec!["en/GB", "it"]);
    }

    #[test]
    fn test_resolve_bad_json_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("broken.json"), "{ paths: ").unwrap();

        let ctx = context(dir.path());
        assert!(resolve(&ctx, &TargetSpec::parse("broken.json")).is_empty());
        assert!(resolve(&ctx, &TargetSpec::parse("missing.json")).is_empty());
    }
}
