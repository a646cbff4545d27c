//! MDX document rendering with element overrides.

use comrak::nodes::NodeValue;
use comrak::{Arena, Options, parse_document};
use maud::{Markup, PreEscaped, Render};
use std::sync::Arc;
use tracing::debug;

use super::error::RenderError;
use super::node::Node;
use super::overrides::{Overrides, RenderContext};
use super::tree::TreeBuilder;
use crate::components::nav::{Navigator, TransitionLink};
use crate::highlight::{CodeHighlighter, SyntectHighlighter, ThemePair};

/// Renders MDX/markdown documents through an element override table.
///
/// Parsing uses comrak with GitHub Flavored Markdown extensions and YAML
/// front matter. Parsed elements are offered to the default override table
/// (links, images, headings, code blocks), optionally merged with a
/// caller-supplied table per call. Nothing is cached between calls: every
/// render re-runs parsing and every highlight request.
pub struct MdxRenderer<'a> {
    options: Options<'a>,
    overrides: Overrides,
    highlighter: Arc<dyn CodeHighlighter>,
    navigator: Arc<dyn Navigator>,
    themes: ThemePair,
}

impl<'a> MdxRenderer<'a> {
    /// Creates renderer with default overrides and collaborators.
    ///
    /// Configures:
    /// - Tables, strikethrough, autolinks
    /// - Front matter delimited by `---`
    /// - Raw HTML passthrough (posts are trusted content)
    /// - syntect highlighting with the default dark and light themes
    pub fn new() -> Self {
        let mut options = Options::default();

        options.extension.strikethrough = true;
        options.extension.table = true;
        options.extension.autolink = true;
        options.extension.front_matter_delimiter = Some("---".to_string());

        options.render.unsafe_ = true;

        Self {
            options,
            overrides: Overrides::defaults(),
            highlighter: Arc::new(SyntectHighlighter::new()),
            navigator: Arc::new(TransitionLink),
            themes: ThemePair::default(),
        }
    }

    /// Replaces the syntax highlighting service.
    pub fn with_highlighter(mut self, highlighter: Arc<dyn CodeHighlighter>) -> Self {
        self.highlighter = highlighter;
        self
    }

    /// Replaces the navigation collaborator used for site-relative links.
    pub fn with_navigator(mut self, navigator: Arc<dyn Navigator>) -> Self {
        self.navigator = navigator;
        self
    }

    /// Sets the dark and light themes requested from the highlighter.
    pub fn with_themes(mut self, themes: ThemePair) -> Self {
        self.themes = themes;
        self
    }

    /// Default override table this renderer starts every render from.
    pub fn overrides(&self) -> &Overrides {
        &self.overrides
    }

    pub fn themes(&self) -> &ThemePair {
        &self.themes
    }

    /// Renders a document with the default overrides.
    ///
    /// # Errors
    ///
    /// Returns error if any code block fails to highlight.
    pub fn render(&self, source: &str) -> Result<Markup, RenderError> {
        self.render_with(source, &Overrides::empty())
    }

    /// Renders a document with `overrides` layered over the defaults.
    ///
    /// Caller entries win per element kind; the default table itself is
    /// never modified.
    ///
    /// # Errors
    ///
    /// Returns error if any code block fails to highlight. The first failure
    /// aborts the whole document.
    pub fn render_with(&self, source: &str, overrides: &Overrides) -> Result<Markup, RenderError> {
        let nodes = self.render_nodes(source, overrides)?;

        let mut html = String::with_capacity(source.len() * 2);
        for node in &nodes {
            node.render_to(&mut html);
        }
        Ok(PreEscaped(html))
    }

    /// Renders a document into its element tree without serializing it.
    ///
    /// # Errors
    ///
    /// Returns error if any code block fails to highlight.
    pub fn render_nodes(&self, source: &str, overrides: &Overrides) -> Result<Vec<Node>, RenderError> {
        let table = self.overrides.merged(overrides);
        let ctx = RenderContext {
            highlighter: self.highlighter.as_ref(),
            navigator: self.navigator.as_ref(),
            themes: &self.themes,
        };

        let arena = Arena::new();
        let root = parse_document(&arena, source, &self.options);

        debug!(
            bytes = source.len(),
            overrides = table.len(),
            "rendering document"
        );
        TreeBuilder::new(&table, &ctx).build(root)
    }

    /// Returns the YAML front matter of a document, without delimiters.
    pub fn front_matter(&self, source: &str) -> Option<String> {
        let arena = Arena::new();
        let root = parse_document(&arena, source, &self.options);

        let front_matter = root.children().find_map(|child| match &child.data.borrow().value {
            NodeValue::FrontMatter(raw) => Some(strip_delimiters(raw)),
            _ => None,
        });
        front_matter
    }
}

impl<'a> Default for MdxRenderer<'a> {
    fn default() -> Self {
        Self::new()
    }
}

/// Removes the `---` fences comrak keeps around front matter.
fn strip_delimiters(raw: &str) -> String {
    let body = raw.trim();
    let body = body.strip_prefix("---").unwrap_or(body);
    let body = body.strip_suffix("---").unwrap_or(body);
    body.trim_matches(['\r', '\n']).to_string()
}
