//! HTML minification for emitted documents.

use std::borrow::Cow;

/// Minify `html` when `enabled`.
///
/// Returns `Cow::Borrowed` if minify disabled, `Cow::Owned` if minified.
pub fn minify_html(html: &[u8], enabled: bool) -> Cow<'_, [u8]> {
    if !enabled {
        return Cow::Borrowed(html);
    }

    let mut cfg = minify_html::Cfg::new();
    cfg.keep_closing_tags = true;
    cfg.keep_html_and_head_opening_tags = true;
    cfg.keep_comments = false;
    cfg.minify_css = true;
    // Inline startup scripts are emitted as composed
    cfg.minify_js = false;
    cfg.remove_bangs = true;
    cfg.remove_processing_instructions = true;
    Cow::Owned(minify_html::minify(html, &cfg))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::StartupConfig, startup::StartupScripts};

    #[test]
    fn test_minify_html_basic() {
        let html = b"<html>\n  <head>\n  </head>\n  <body>\n    <div id=\"root\"><p>Hello</p></div>\n  </body>\n</html>";
        let result = minify_html(html, true);
        let result_str = String::from_utf8_lossy(&result);

        assert!(!result_str.contains("\n  "));
        assert!(result_str.contains("<p>Hello</p>"));
        assert!(result_str.contains("root"));
    }

    #[test]
    fn test_minify_html_enabled() {
        let html = b"<html>\n  <body>\n  </body>\n</html>";

        let minified = minify_html(html, true);
        let not_minified = minify_html(html, false);

        assert!(minified.len() < not_minified.len());
        assert_eq!(&*not_minified, html);
    }

    #[test]
    fn test_minify_html_startup_scripts() {
        let screens = serde_json::json!([{"name": "fhd", "pxPerRem": 24, "width": 1920, "height": 1080}]);
        let config = StartupConfig {
            screen_types: Some(screens),
            ..StartupConfig::default()
        };
        let scripts = StartupScripts::compose(&config, &["main.js".to_owned()]).unwrap();

        for script in [&scripts.isomorphic, &scripts.standard] {
            let html = format!(
                "<html>\n  <head>\n    <script type=\"text/javascript\">{script}</script>\n  </head>\n  \
                 <body>\n    <div id=\"root\"></div>\n  </body>\n</html>"
            );
            let minified = minify_html(html.as_bytes(), true);
            let minified = String::from_utf8_lossy(&minified);

            assert!(minified.len() < html.len());
            assert!(minified.contains(r#"["main.js"]"#));
            assert!(minified.contains("<div id=root></div>") || minified.contains("<div id=\"root\"></div>"));
        }
        assert!(scripts.isomorphic.contains("pickScreenType"));
    }

    #[test]
    fn test_minify_html_disabled_borrows() {
        let html = b"<p>Hello World</p>";
        assert!(matches!(minify_html(html, false), Cow::Borrowed(_)));
    }
}
