//! Static site generation.

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use maud::Markup;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::assets::write_css_assets;
use crate::config::Config;
use crate::content::load_posts;
use crate::markdown::MdxRenderer;
use crate::pages;

/// Site-wide metadata shared by every page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteInfo {
    pub title: String,
    pub author: Option<String>,
    pub guestbook_script: Option<String>,
}

impl SiteInfo {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: None,
            guestbook_script: None,
        }
    }

    /// Extracts site metadata from command line configuration.
    pub fn from_config(config: &Config) -> Self {
        Self {
            title: config.title.clone(),
            author: config.author.clone(),
            guestbook_script: config.guestbook_script.clone(),
        }
    }
}

/// Generates the whole site into the configured output directory.
///
/// Writes one page per post under `blog/<slug>/index.html`, the blog index,
/// the guestbook page, a copy of the blog index at the site root and CSS
/// assets. Posts are rendered with the configured dark and light themes.
///
/// # Returns
///
/// Path of the generated blog index page
///
/// # Errors
///
/// Returns error if posts cannot be loaded, any post fails to render, or
/// output files cannot be written. A single failing post fails the build.
pub fn build(config: &Config) -> Result<PathBuf> {
    build_at(config, Local::now().date_naive())
}

/// Like [`build`], with an explicit reference date for relative dates.
pub(crate) fn build_at(config: &Config, today: NaiveDate) -> Result<PathBuf> {
    let site = SiteInfo::from_config(config);
    let renderer = MdxRenderer::new().with_themes(config.themes());

    let posts = load_posts(&config.content, &renderer).context("Failed to load posts")?;
    info!(count = posts.len(), "loaded posts");

    let assets_dir = config.output.join("assets");
    fs::create_dir_all(&assets_dir).context("Failed to create assets directory")?;
    write_css_assets(&assets_dir)?;

    for post in &posts {
        let page = pages::post::generate(post, &renderer, &site, today)?;
        write_page(&config.output.join("blog").join(post.slug()), page)?;
    }

    let blog_dir = config.output.join("blog");
    let blog_index = write_page(&blog_dir, pages::blog::generate(&posts, &site))?;
    write_page(
        &config.output.join("guestbook"),
        pages::guestbook::generate(&site),
    )?;
    write_page(&config.output, pages::blog::generate(&posts, &site))?;

    info!(output = %config.output.display(), "site generated");
    Ok(blog_index)
}

/// Writes `page` as `index.html` inside `dir`, creating the directory.
fn write_page(dir: &Path, page: Markup) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory {}", dir.display()))?;

    let path = dir.join("index.html");
    fs::write(&path, page.into_string())
        .with_context(|| format!("Failed to write page to {}", path.display()))?;

    info!(path = %path.display(), "generated page");
    Ok(path)
}
