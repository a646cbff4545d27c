//! Element override table and the default overrides.
//!
//! The markdown pipeline looks up every element it builds in an
//! [`Overrides`] table keyed by [`ElementKind`]. A hit replaces the default
//! rendering with the override's output; a miss keeps the element as built.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

use super::error::RenderError;
use super::node::{Element, Node};
use super::slug::slugify;
use crate::components::nav::Navigator;
use crate::highlight::{CodeHighlighter, ThemePair};

/// Class added to every rendered image.
pub const IMAGE_CLASS: &str = "rounded-lg";

/// Class on the anchor wrapping heading content.
pub const HEADING_ANCHOR_CLASS: &str = "anchor";

const LANGUAGE_PREFIX: &str = "language-";

/// Heading level, always within 1..=6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HeadingLevel(u8);

impl HeadingLevel {
    /// Returns None for levels outside 1..=6.
    pub fn new(level: u8) -> Option<Self> {
        (1..=6).contains(&level).then_some(Self(level))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// All six levels in ascending order.
    pub fn all() -> impl Iterator<Item = HeadingLevel> {
        (1..=6).map(HeadingLevel)
    }

    /// Tag name, `h1` through `h6`.
    pub fn tag(self) -> &'static str {
        ["h1", "h2", "h3", "h4", "h5", "h6"][usize::from(self.0 - 1)]
    }
}

/// Element kinds that accept overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Link,
    Image,
    Heading(HeadingLevel),
    Pre,
}

impl ElementKind {
    /// Maps an HTML tag name to its kind.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "a" => Some(ElementKind::Link),
            "img" => Some(ElementKind::Image),
            "pre" => Some(ElementKind::Pre),
            _ => {
                let level = tag.strip_prefix('h')?.parse::<u8>().ok()?;
                HeadingLevel::new(level).map(ElementKind::Heading)
            }
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            ElementKind::Link => "a",
            ElementKind::Image => "img",
            ElementKind::Heading(level) => level.tag(),
            ElementKind::Pre => "pre",
        }
    }
}

/// Collaborators available to overrides during one render pass.
pub struct RenderContext<'a> {
    pub highlighter: &'a dyn CodeHighlighter,
    pub navigator: &'a dyn Navigator,
    pub themes: &'a ThemePair,
}

/// Rendering function substituted for an element kind.
pub type Override =
    Arc<dyn Fn(Element, &RenderContext<'_>) -> Result<Node, RenderError> + Send + Sync>;

/// Mapping from element kind to override.
#[derive(Clone, Default)]
pub struct Overrides {
    entries: HashMap<ElementKind, Override>,
}

impl Overrides {
    /// Table with no overrides; every element renders as built.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Links, images, the six heading levels and code blocks.
    pub fn defaults() -> Self {
        let mut table = Self::empty();
        table.insert(ElementKind::Link, link);
        table.insert(ElementKind::Image, image);
        for level in HeadingLevel::all() {
            table
                .entries
                .insert(ElementKind::Heading(level), heading(level));
        }
        table.insert(ElementKind::Pre, pre);
        table
    }

    /// Registers an override, replacing any previous entry for `kind`.
    pub fn insert<F>(&mut self, kind: ElementKind, render: F) -> &mut Self
    where
        F: Fn(Element, &RenderContext<'_>) -> Result<Node, RenderError> + Send + Sync + 'static,
    {
        self.entries.insert(kind, Arc::new(render));
        self
    }

    /// Registers an override by tag name (`a`, `img`, `h1`..`h6`, `pre`).
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::UnknownElementKind`] for any other name.
    pub fn insert_tag<F>(&mut self, tag: &str, render: F) -> Result<&mut Self, RenderError>
    where
        F: Fn(Element, &RenderContext<'_>) -> Result<Node, RenderError> + Send + Sync + 'static,
    {
        let kind =
            ElementKind::from_tag(tag).ok_or_else(|| RenderError::UnknownElementKind(tag.into()))?;
        Ok(self.insert(kind, render))
    }

    pub fn get(&self, kind: ElementKind) -> Option<&Override> {
        self.entries.get(&kind)
    }

    pub fn contains(&self, kind: ElementKind) -> bool {
        self.entries.contains_key(&kind)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// New table with `caller` entries layered over this one.
    ///
    /// Kinds the caller does not override keep this table's entry.
    pub fn merged(&self, caller: &Overrides) -> Overrides {
        let mut entries = self.entries.clone();
        entries.extend(
            caller
                .entries
                .iter()
                .map(|(kind, render)| (*kind, Arc::clone(render))),
        );
        Overrides { entries }
    }

    /// Applies the override for the element's kind, if one is registered.
    pub(crate) fn apply(
        &self,
        element: Element,
        ctx: &RenderContext<'_>,
    ) -> Result<Node, RenderError> {
        let render = ElementKind::from_tag(&element.tag).and_then(|kind| self.get(kind));
        match render {
            Some(render) => render(element, ctx),
            None => Ok(element.into()),
        }
    }
}

impl fmt::Debug for Overrides {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tags: Vec<&str> = self.entries.keys().map(|kind| kind.tag()).collect();
        tags.sort_unstable();
        f.debug_struct("Overrides").field("kinds", &tags).finish()
    }
}

/// Link override.
///
/// Site-relative targets (`/...`) go through the navigation collaborator,
/// in-page anchors (`#...`) stay plain, and everything else opens in a new
/// browsing context with `rel="noopener noreferrer"`.
pub fn link(mut element: Element, ctx: &RenderContext<'_>) -> Result<Node, RenderError> {
    let Some(href) = element.attr_value("href") else {
        return Ok(element.into());
    };

    if href.starts_with('/') {
        return Ok(ctx.navigator.link(element));
    }

    if href.starts_with('#') {
        return Ok(element.into());
    }

    element.set_attr("target", "_blank");
    element.set_attr("rel", "noopener noreferrer");
    Ok(element.into())
}

/// Image override: adds [`IMAGE_CLASS`], leaves `alt` exactly as given.
pub fn image(mut element: Element, _ctx: &RenderContext<'_>) -> Result<Node, RenderError> {
    let class = match element.attr_value("class") {
        Some(existing) if existing.split_whitespace().any(|c| c == IMAGE_CLASS) => {
            existing.to_string()
        }
        Some(existing) if !existing.trim().is_empty() => format!("{} {}", IMAGE_CLASS, existing),
        _ => IMAGE_CLASS.to_string(),
    };
    element.set_attr("class", class);
    Ok(element.into())
}

/// Builds the heading override for one level.
///
/// The slug is computed from the flattened text of the children, while the
/// anchor keeps the original children so inline formatting survives.
pub fn heading(level: HeadingLevel) -> Override {
    Arc::new(move |element: Element, _ctx: &RenderContext<'_>| -> Result<Node, RenderError> {
        let slug = slugify(&element.text_content());
        let anchor = Element::new("a")
            .attr("href", format!("#{}", slug))
            .attr("class", HEADING_ANCHOR_CLASS)
            .children(element.children);

        Ok(Element::new(level.tag())
            .attr("id", slug)
            .child(anchor)
            .into())
    })
}

/// Preformatted block override.
///
/// A `code` child classed `language-<tag>` is highlighted through the
/// context's highlighter and emitted as trusted markup. An empty tag falls
/// back to a plain `code` element; anything else passes through untouched.
///
/// # Errors
///
/// Highlighter failures are returned as-is and fail the render.
pub fn pre(element: Element, ctx: &RenderContext<'_>) -> Result<Node, RenderError> {
    let Some(code) = element
        .children
        .iter()
        .filter_map(Node::as_element)
        .find(|child| child.tag == "code")
    else {
        return Ok(element.into());
    };

    let Some(language) = code
        .attr_value("class")
        .and_then(|class| class.split(' ').next())
        .and_then(|first| first.strip_prefix(LANGUAGE_PREFIX))
    else {
        return Ok(element.into());
    };

    if language.is_empty() {
        return Ok(Element {
            tag: "code".to_string(),
            attrs: element.attrs,
            children: element.children,
        }
        .into());
    }

    debug!(language, "highlighting code block");
    let fragment = ctx
        .highlighter
        .highlight(&code.text_content(), language, ctx.themes)?;

    Ok(Element::new("div").child(Node::Raw(fragment)).into())
}
