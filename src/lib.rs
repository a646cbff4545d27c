//! Static blog generator with MDX rendering and a guestbook page.

mod assets;
pub mod components;
mod config;
mod content;
mod highlight;
mod logging;
mod markdown;
pub mod pages;
mod site;
mod util;

pub use assets::write_css_assets;
pub use config::Config;
pub use content::{Post, PostMeta, load_posts, parse_post};
pub use highlight::{
    CodeHighlighter, DEFAULT_DARK_THEME, DEFAULT_LIGHT_THEME, HighlightError, SyntectHighlighter,
    ThemePair,
};
pub use logging::init as init_logging;
pub use markdown::{
    Element, ElementKind, HeadingLevel, MdxRenderer, Node, Override, Overrides, RenderContext,
    RenderError, slugify,
};
pub use site::{SiteInfo, build};
