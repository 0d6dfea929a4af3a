//! Build-level diagnostics.

use crate::locale::LocaleId;
use thiserror::Error;

/// A problem reported by a build.
///
/// Only [`BuildError::RootNotFound`] blocks localized output; the others
/// leave the remaining locales and the fallback document intact.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Failed to prerender localized HTML for {}", dashed_list(.0))]
    RenderFailed(Vec<LocaleId>),

    #[error("Unable find root div element. Please verify it exists within your HTML template.")]
    RootNotFound,

    #[error("Failed to update localized appinfo: {0:#}")]
    Metadata(anyhow::Error),
}

impl BuildError {
    pub const fn is_blocking(&self) -> bool {
        matches!(self, Self::RootNotFound)
    }
}

fn dashed_list(locales: &[LocaleId]) -> String {
    locales
        .iter()
        .map(LocaleId::dashed)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_failed_lists_dashed_locales() {
        let err = BuildError::RenderFailed(vec![LocaleId::from("fr"), LocaleId::from("en/US")]);
        assert_eq!(
            err.to_string(),
            "Failed to prerender localized HTML for fr, en-US"
        );
        assert!(!err.is_blocking());
    }

    #[test]
    fn test_root_not_found_is_blocking() {
        let err = BuildError::RootNotFound;
        assert!(err.is_blocking());
        assert!(err.to_string().contains("root div"));
    }

    #[test]
    fn test_metadata_includes_cause() {
        let cause = anyhow::anyhow!("permission denied").context("Failed to write appinfo");
        let err = BuildError::Metadata(cause);
        assert!(err.to_string().contains("permission denied"));
        assert!(!err.is_blocking());
    }
}
