//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

// ============================================================================
// Common Defaults
// ============================================================================

pub fn r#false() -> bool {
    false
}

// ============================================================================
// [build] Section Defaults
// ============================================================================

pub mod build {
    use super::super::OutputFs;
    use std::path::PathBuf;

    pub fn root() -> Option<PathBuf> {
        None
    }

    pub fn output() -> PathBuf {
        "dist".into()
    }

    pub fn template() -> PathBuf {
        "index.html".into()
    }

    pub fn chunk() -> String {
        "main.js".into()
    }

    pub fn js() -> Vec<String> {
        vec!["main.js".into()]
    }

    pub fn output_fs() -> OutputFs {
        OutputFs::default()
    }
}

// ============================================================================
// [locales] Section Defaults
// ============================================================================

pub mod locales {
    use crate::locale::TargetSpec;
    use std::path::PathBuf;

    pub fn target() -> TargetSpec {
        TargetSpec::Used
    }

    pub fn manifest() -> PathBuf {
        "resources/ilibmanifest.json".into()
    }

    pub fn library_manifest() -> PathBuf {
        "node_modules/@enact/i18n/ilibmanifest".into()
    }
}

// ============================================================================
// [render] Section Defaults
// ============================================================================

pub mod render {
    pub fn command() -> Vec<String> {
        vec!["node".into(), "prerender.js".into()]
    }
}

// ============================================================================
// [appinfo] Section Defaults
// ============================================================================

pub mod appinfo {
    use std::path::PathBuf;

    pub fn resources() -> PathBuf {
        "resources".into()
    }
}
