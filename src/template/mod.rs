//! HTML template processing.
//!
//! - **root**: split a processed template around its root container
//! - `FileTemplate`: the templating collaborator that turns the raw template
//!   into processed HTML with asset tags and the startup script injected

pub mod root;

pub use root::{TemplateFragments, find_root};

use anyhow::{Context, Result};
use quick_xml::{
    Writer,
    events::{BytesEnd, BytesStart, BytesText, Event},
};
use std::{
    fs,
    io::{Cursor, Write},
    path::Path,
};

type HtmlWriter = Writer<Cursor<Vec<u8>>>;

/// Where script assets are injected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Inject {
    #[default]
    Head,
    Body,
}

/// An element injected into the processed HTML.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlTag {
    pub name: &'static str,
    pub attributes: Vec<(&'static str, String)>,
    /// Raw content, written verbatim (script bodies are not escaped).
    pub inner_html: String,
}

impl HtmlTag {
    /// Inline `<script type="text/javascript">`.
    pub fn inline_script(inner_html: impl Into<String>) -> Self {
        Self {
            name: "script",
            attributes: vec![("type", "text/javascript".to_owned())],
            inner_html: inner_html.into(),
        }
    }

    fn script_src(src: &str) -> Self {
        Self {
            name: "script",
            attributes: vec![("type", "text/javascript".to_owned()), ("src", src.to_owned())],
            inner_html: String::new(),
        }
    }

    fn stylesheet(href: &str) -> Self {
        Self {
            name: "link",
            attributes: vec![("href", href.to_owned()), ("rel", "stylesheet".to_owned())],
            inner_html: String::new(),
        }
    }

    /// `link` is a void element; everything else is closed.
    fn is_void(&self) -> bool {
        self.name == "link"
    }

    fn write(&self, writer: &mut HtmlWriter) -> Result<()> {
        let mut elem = BytesStart::new(self.name);
        for (key, value) in &self.attributes {
            elem.push_attribute((*key, value.as_str()));
        }
        writer.write_event(Event::Start(elem))?;
        if self.is_void() {
            return Ok(());
        }

        if !self.inner_html.is_empty() {
            writer.write_event(Event::Text(BytesText::from_escaped(self.inner_html.as_str())))?;
        }
        writer.write_event(Event::End(BytesEnd::new(self.name)))?;
        Ok(())
    }

    /// Serialize to HTML.
    pub fn to_html(&self) -> Result<String> {
        let mut writer = Writer::new(Cursor::new(Vec::new()));
        self.write(&mut writer)?;
        Ok(String::from_utf8(writer.into_inner().into_inner())?)
    }
}

/// The templating collaborator.
pub trait TemplateEngine {
    /// Hook before HTML processing: force body injection and hand the
    /// script asset list over to the caller.
    fn before_processing(&mut self) -> Vec<String>;

    /// Hook after HTML processing: the processed document with `head`
    /// tags injected.
    fn render(&self, head: &[HtmlTag]) -> Result<String>;
}

/// A template read from disk, with the asset lists the bundle produced.
#[derive(Debug, Clone)]
pub struct FileTemplate {
    html: String,
    js: Vec<String>,
    css: Vec<String>,
    inject: Inject,
}

impl FileTemplate {
    pub fn new(html: impl Into<String>, js: Vec<String>, css: Vec<String>) -> Self {
        Self {
            html: html.into(),
            js,
            css,
            inject: Inject::default(),
        }
    }

    pub fn load(path: &Path, js: Vec<String>, css: Vec<String>) -> Result<Self> {
        let html = fs::read_to_string(path)
            .with_context(|| format!("Failed to read html template: {}", path.display()))?;
        Ok(Self::new(html, js, css))
    }
}

impl TemplateEngine for FileTemplate {
    fn before_processing(&mut self) -> Vec<String> {
        self.inject = Inject::Body;
        std::mem::take(&mut self.js)
    }

    fn render(&self, head: &[HtmlTag]) -> Result<String> {
        let scripts: Vec<HtmlTag> = self.js.iter().map(|src| HtmlTag::script_src(src)).collect();
        let styles: Vec<HtmlTag> = self.css.iter().map(|href| HtmlTag::stylesheet(href)).collect();

        let mut head_tags: Vec<&HtmlTag> = styles.iter().chain(head).collect();
        let mut body_tags: Vec<&HtmlTag> = Vec::new();
        match self.inject {
            Inject::Head => head_tags.extend(&scripts),
            Inject::Body => body_tags.extend(&scripts),
        }

        let html = insert_before_close(&self.html, "head", &head_tags, false)?;
        insert_before_close(&html, "body", &body_tags, true)
    }
}

/// Write `tags` before the first `</tag>` (case-insensitive).
///
/// Without a closing tag the tags go to the end of the document when
/// `append` is set, otherwise to the start. The template itself is copied
/// through unparsed.
fn insert_before_close(html: &str, tag: &str, tags: &[&HtmlTag], append: bool) -> Result<String> {
    if tags.is_empty() {
        return Ok(html.to_owned());
    }

    let close = format!("</{tag}>");
    // ASCII lowercasing keeps byte offsets intact
    let (before, after) = match html.to_ascii_lowercase().find(&close) {
        Some(index) => html.split_at(index),
        None if append => (html, ""),
        None => ("", html),
    };

    let mut writer = Writer::new(Cursor::new(Vec::new()));
    writer.get_mut().write_all(before.as_bytes())?;
    for tag in tags {
        tag.write(&mut writer)?;
    }
    writer.get_mut().write_all(after.as_bytes())?;

    Ok(String::from_utf8(writer.into_inner().into_inner())?)
}
