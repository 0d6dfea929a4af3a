//! `[locales]` section configuration.

use super::defaults;
use crate::locale::TargetSpec;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[locales]` section in locale-html.toml - which locales to prerender.
///
/// # Example
/// ```toml
/// [locales]
/// target = "tv"                 # tv | signage | used | all | <file>.json | en-US,ko-KR
/// # target = ["en/US", "ko/KR"] # or an explicit list
/// include_ancestors = true
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct LocalesConfig {
    #[serde(default = "defaults::locales::target")]
    #[educe(Default = defaults::locales::target())]
    pub target: TargetSpec,

    /// App resource manifest scanned for `used`.
    #[serde(default = "defaults::locales::manifest")]
    #[educe(Default = defaults::locales::manifest())]
    pub manifest: PathBuf,

    /// i18n library manifest scanned for `all`.
    #[serde(default = "defaults::locales::library_manifest")]
    #[educe(Default = defaults::locales::library_manifest())]
    pub library_manifest: PathBuf,

    /// Also target the parent locales of every manifest entry (`en` for `en/US`).
    #[serde(default = "defaults::r#false")]
    #[educe(Default = false)]
    pub include_ancestors: bool,
}

#[cfg(test)]
mod tests {
    use super::super::ProjectConfig;
    use super::*;
    use crate::locale::LocaleId;

    #[test]
    fn test_locales_config_defaults() {
        let config: ProjectConfig = toml::from_str("").unwrap();

        assert_eq!(config.locales.target, TargetSpec::Used);
        assert_eq!(config.locales.manifest, PathBuf::from("resources/ilibmanifest.json"));
        assert_eq!(
            config.locales.library_manifest,
            PathBuf::from("node_modules/@enact/i18n/ilibmanifest")
        );
        assert!(!config.locales.include_ancestors);
    }

    #[test]
    fn test_locales_target_forms() {
        let config: ProjectConfig = toml::from_str("[locales]\ntarget = \"en-US,fr\"").unwrap();
        assert_eq!(config.locales.target, TargetSpec::List("en-US,fr".into()));

        let config: ProjectConfig = toml::from_str("[locales]\ntarget = \"\"").unwrap();
        assert_eq!(config.locales.target, TargetSpec::Disabled);

        let config: ProjectConfig = toml::from_str("[locales]\ntarget = [\"ja/JP\"]").unwrap();
        assert_eq!(config.locales.target, TargetSpec::Resolved(vec![LocaleId::from("ja/JP")]));
    }

    #[test]
    fn test_unknown_field_rejection() {
        let result: Result<ProjectConfig, _> = toml::from_str("[locales]\npreset = \"tv\"");
        assert!(result.is_err());
    }
}
