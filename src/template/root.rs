//! Root container location.
//!
//! Splits an HTML template around the `<div id="root">` container that
//! receives prerendered markup. The search narrows a `[start, end)` hint
//! from both sides: forward to the next `<div`, backward to the nearest
//! `</div>`, until the region opens with the root div.

use regex::bytes::Regex;
use std::sync::OnceLock;

/// Reserved `id` of the root container.
pub const ROOT_ID: &str = "root";

const DIV_OPEN: &str = "<div";
const DIV_CLOSE: &str = "</div>";

/// The opening-tag test looks one byte past the closing tag at `end`.
const OPEN_WINDOW: usize = DIV_CLOSE.len() + 1;

/// Template HTML on either side of the root container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateFragments {
    pub before: String,
    pub after: String,
}

impl TemplateFragments {
    /// Rebuild the document with `content` inside the root container.
    pub fn wrap(&self, content: &str) -> String {
        format!(
            "{}<div id=\"{ROOT_ID}\">{content}</div>{}",
            self.before, self.after
        )
    }
}

fn root_open_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(&format!(r#"(?i-u)^<div[^>]+id="{ROOT_ID}""#)).unwrap())
}

/// Locate the root container anywhere in `html`.
pub fn find_root(html: &str) -> Option<TemplateFragments> {
    locate(html, 0, html.len().saturating_sub(DIV_CLOSE.len()))
}

/// Locate the root container within the `[start, end)` hint.
///
/// `end` is the offset of the container's closing `</div>`. Returns `None`
/// when no balanced `<div ...>` / `</div>` pair opens with the root id.
pub fn locate(html: &str, mut start: usize, mut end: usize) -> Option<TemplateFragments> {
    let bytes = html.as_bytes();

    // `start` grows by at least `DIV_OPEN.len()` per step
    for _ in 0..=bytes.len() {
        let window_end = end.saturating_add(OPEN_WINDOW).min(bytes.len());
        if start <= window_end && root_open_re().is_match(&bytes[start..window_end]) {
            let after = end.saturating_add(DIV_CLOSE.len()).min(bytes.len());
            return Some(TemplateFragments {
                before: String::from_utf8_lossy(&bytes[..start]).into_owned(),
                after: String::from_utf8_lossy(&bytes[after..]).into_owned(),
            });
        }

        let open = find_from(bytes, DIV_OPEN.as_bytes(), start.saturating_add(DIV_OPEN.len()))?;
        let close = rfind_at_or_before(bytes, DIV_CLOSE.as_bytes(), end)?;
        if open > close {
            return None;
        }
        start = open;
        end = close;
    }

    None
}

/// First occurrence of `needle` starting at or after `from`.
fn find_from(haystack: &[u8], needle: &[u8], from: usize) -> Option<usize> {
    haystack
        .get(from..)?
        .windows(needle.len())
        .position(|window| window == needle)
        .map(|index| index + from)
}

/// Last occurrence of `needle` starting at or before `at`.
fn rfind_at_or_before(haystack: &[u8], needle: &[u8], at: usize) -> Option<usize> {
    let limit = at.saturating_add(needle.len()).min(haystack.len());
    haystack[..limit]
        .windows(needle.len())
        .rposition(|window| window == needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ------------------------------------------------------------------------
    // find_root
    // ------------------------------------------------------------------------

    #[test]
    fn test_find_root_exact() {
        let html = r#"<p>x</p><div id="root"></div><p>y</p>"#;
        let fragments = find_root(html).unwrap();
        assert_eq!(fragments.before, "<p>x</p>");
        assert_eq!(fragments.after, "<p>y</p>");
        assert_eq!(
            fragments.wrap("<span>C</span>"),
            r#"<p>x</p><div id="root"><span>C</span></div><p>y</p>"#
        );
    }

    #[test]
    fn test_find_root_in_document() {
        let html = concat!(
            "<!DOCTYPE html>\n<html>\n<head><title>App</title></head>\n<body>\n",
            "\t<div id=\"root\"></div>\n",
            "</body>\n</html>\n"
        );
        let fragments = find_root(html).unwrap();
        assert!(fragments.before.ends_with("<body>\n\t"));
        assert_eq!(fragments.after, "\n</body>\n</html>\n");
    }

    #[test]
    fn test_find_root_with_existing_content() {
        let html = r#"<body><div id="root"><div class="spinner">...</div></div></body>"#;
        let fragments = find_root(html).unwrap();
        assert_eq!(fragments.before, "<body>");
        assert_eq!(fragments.after, "</body>");
    }

    #[test]
    fn test_find_root_with_other_attributes() {
        let html = r#"<body><div class="app" id="root"></div></body>"#;
        let fragments = find_root(html).unwrap();
        assert_eq!(fragments.before, "<body>");
        assert_eq!(fragments.after, "</body>");
    }

    #[test]
    fn test_find_root_uppercase_open_tag() {
        // The attribute match ignores case, the `<div` token search does not
        let html = r#"<body><DIV ID="root"></DIV></body>"#;
        assert!(find_root(html).is_none());
    }

    #[test]
    fn test_find_root_takes_last_closing_div() {
        // The backward search pairs the root with the last `</div>`
        let html = r#"<div class="outer"><div id="root"></div></div>"#;
        let fragments = find_root(html).unwrap();
        assert_eq!(fragments.before, r#"<div class="outer">"#);
        assert_eq!(fragments.after, "");
    }

    #[test]
    fn test_find_root_missing() {
        assert!(find_root("<html><body><p>no root</p></body></html>").is_none());
        assert!(find_root(r#"<div id="app"></div>"#).is_none());
        assert!(find_root("").is_none());
    }

    #[test]
    fn test_find_root_unmatched_open() {
        // No closing tag anywhere; must terminate
        assert!(find_root("<div><div><div><div>").is_none());
        assert!(find_root("<p><div class=\"a\"><div></p>").is_none());
    }

    #[test]
    fn test_find_root_inverted_tags() {
        assert!(find_root("</div></div><div><div>").is_none());
    }

    #[test]
    fn test_find_root_non_ascii_content() {
        let html = "<p>日本語</p><div id=\"root\"></div><p>한국어</p>";
        let fragments = find_root(html).unwrap();
        assert_eq!(fragments.before, "<p>日本語</p>");
        assert_eq!(fragments.after, "<p>한국어</p>");
    }

    // ------------------------------------------------------------------------
    // locate
    // ------------------------------------------------------------------------

    #[test]
    fn test_locate_confirms_hint() {
        let html = r#"<p>x</p><div id="root"></div><p>y</p>"#;
        let start = html.find("<div").unwrap();
        let end = html.find("</div>").unwrap();
        let fragments = locate(html, start, end).unwrap();
        assert_eq!(fragments.before, "<p>x</p>");
        assert_eq!(fragments.after, "<p>y</p>");
    }

    #[test]
    fn test_locate_out_of_range_hint() {
        let html = r#"<div id="root"></div>"#;
        assert!(locate(html, html.len() + 10, html.len() + 20).is_none());
    }

    // ------------------------------------------------------------------------
    // search helpers
    // ------------------------------------------------------------------------

    #[test]
    fn test_find_from() {
        assert_eq!(find_from(b"<div><div>", b"<div", 0), Some(0));
        assert_eq!(find_from(b"<div><div>", b"<div", 1), Some(5));
        assert_eq!(find_from(b"<div><div>", b"<div", 6), None);
        assert_eq!(find_from(b"<div>", b"<div", 99), None);
    }

    #[test]
    fn test_rfind_at_or_before() {
        let html = b"</div>ab</div>";
        assert_eq!(rfind_at_or_before(html, b"</div>", 8), Some(8));
        assert_eq!(rfind_at_or_before(html, b"</div>", 7), Some(0));
        assert_eq!(rfind_at_or_before(html, b"</div>", 100), Some(8));
        assert_eq!(rfind_at_or_before(b"<p></p>", b"</div>", 3), None);
    }
}
