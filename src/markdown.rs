//! MDX rendering with element overrides.
//!
//! This module parses markdown with comrak, converts the result into an
//! element tree and lets an override table replace the rendering of links,
//! images, headings and code blocks. Code blocks tagged with a language are
//! syntax highlighted for a dark and a light theme.

mod error;
mod node;
mod overrides;
mod renderer;
mod slug;
mod tree;

pub use error::RenderError;
pub use node::{Element, Node};
pub use overrides::{
    ElementKind, HEADING_ANCHOR_CLASS, HeadingLevel, IMAGE_CLASS, Override, Overrides,
    RenderContext, heading, image, link, pre,
};
pub use renderer::MdxRenderer;
pub use slug::slugify;
