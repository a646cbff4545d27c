//! Blog post loading from MDX files with YAML front matter.

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::markdown::MdxRenderer;

/// File extensions treated as posts.
const POST_EXTENSIONS: &[&str] = &["mdx", "md"];

/// Metadata declared in a post's front matter.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PostMeta {
    pub title: String,
    #[serde(alias = "publishedAt")]
    pub published_at: NaiveDate,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

/// Blog post source with parsed metadata.
#[derive(Debug, Clone)]
pub struct Post {
    slug: String,
    path: PathBuf,
    meta: PostMeta,
    source: String,
}

impl Post {
    /// URL segment, taken from the file stem.
    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn meta(&self) -> &PostMeta {
        &self.meta
    }

    /// Full MDX source, front matter included.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Site-relative URL of the rendered post.
    pub fn url(&self) -> String {
        format!("/blog/{}/", self.slug)
    }
}

/// Parses one post from its path and source text.
///
/// # Errors
///
/// Returns error if the file stem is not valid UTF8, the front matter is
/// missing, or the metadata does not deserialize.
pub fn parse_post(path: impl AsRef<Path>, source: String, renderer: &MdxRenderer) -> Result<Post> {
    let path = path.as_ref();

    let slug = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .with_context(|| format!("Cannot derive slug from path: {}", path.display()))?
        .to_string();

    let Some(front_matter) = renderer.front_matter(&source) else {
        bail!("Post has no front matter: {}", path.display());
    };

    let meta: PostMeta = serde_yaml::from_str(&front_matter)
        .with_context(|| format!("Invalid front matter in {}", path.display()))?;

    Ok(Post {
        slug,
        path: path.to_path_buf(),
        meta,
        source,
    })
}

/// Loads every post in `dir`, newest first.
///
/// Files without an `.mdx` or `.md` extension are skipped. Posts published
/// on the same day are ordered by slug.
///
/// # Errors
///
/// Returns error if the directory cannot be read or any post fails to parse.
pub fn load_posts(dir: impl AsRef<Path>, renderer: &MdxRenderer) -> Result<Vec<Post>> {
    let dir = dir.as_ref();
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read content directory: {}", dir.display()))?;

    let mut posts = Vec::new();
    for entry in entries {
        let path = entry
            .with_context(|| format!("Failed to read entry in {}", dir.display()))?
            .path();

        let is_post = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| POST_EXTENSIONS.contains(&ext));
        if !path.is_file() || !is_post {
            warn!(path = %path.display(), "skipping non-post file");
            continue;
        }

        let source = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read post: {}", path.display()))?;
        let post = parse_post(&path, source, renderer)?;
        debug!(slug = post.slug(), title = %post.meta.title, "loaded post");
        posts.push(post);
    }

    posts.sort_by(|a, b| {
        b.meta
            .published_at
            .cmp(&a.meta.published_at)
            .then_with(|| a.slug.cmp(&b.slug))
    });

    Ok(posts)
}
