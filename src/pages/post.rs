//! Blog post page generation

use anyhow::{Context, Result};
use chrono::NaiveDate;
use maud::{Markup, html};

use crate::components::layout::page_wrapper;
use crate::content::Post;
use crate::markdown::MdxRenderer;
use crate::site::SiteInfo;
use crate::util::{format_date, format_relative_date};

/// Generates the HTML page for one post
///
/// Renders the post body through the MDX renderer and wraps it with the
/// title, publish date and site layout.
///
/// # Arguments
///
/// * `post`: Post to render
/// * `renderer`: MDX renderer with the site's overrides and themes
/// * `site`: Site metadata
/// * `today`: Reference date for the relative publish date
///
/// # Returns
///
/// Complete HTML document for the post
///
/// # Errors
///
/// Returns error if rendering the body fails, e.g. a code block names a
/// language the highlighter does not support.
pub fn generate(
    post: &Post,
    renderer: &MdxRenderer,
    site: &SiteInfo,
    today: NaiveDate,
) -> Result<Markup> {
    let body = renderer
        .render(post.source())
        .with_context(|| format!("Failed to render post: {}", post.path().display()))?;

    let meta = post.meta();
    let content = html! {
        article class="post" {
            h1 class="post-title" { (meta.title) }
            p class="post-date" {
                time datetime=(meta.published_at.to_string()) { (format_date(meta.published_at)) }
                " (" (format_relative_date(meta.published_at, today)) ")"
            }
            div class="prose" { (body) }
        }
    };

    Ok(page_wrapper(site, &meta.title, "blog", content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::parse_post;

    #[test]
    fn test_generate_post_page() {
        // Arrange
        let renderer = MdxRenderer::new();
        let source = "---\ntitle: Hello\npublishedAt: 2024-01-15\n---\n\n## Intro\n\nSee [more](/blog/).\n";
        let post = parse_post("hello.mdx", source.to_string(), &renderer).expect("Should parse");
        let site = SiteInfo::new("My Blog");
        let today = NaiveDate::from_ymd_opt(2024, 1, 18).expect("valid date");

        // Act
        let html = generate(&post, &renderer, &site, today)
            .expect("Should generate")
            .into_string();

        // Assert
        assert!(html.contains("<title>Hello | My Blog</title>"), "{}", html);
        assert!(html.contains("January 15, 2024"), "{}", html);
        assert!(html.contains("(3 days ago)"), "{}", html);
        assert!(html.contains("<h2 id=\"intro\">"), "{}", html);
        assert!(html.contains("<a href=\"/blog/\" data-transition=\"\">more</a>"), "{}", html);
    }

    #[test]
    fn test_generate_post_unsupported_language_fails() {
        // Arrange
        let renderer = MdxRenderer::new();
        let source = "---\ntitle: Broken\npublishedAt: 2024-01-15\n---\n\n```no-such-language\nx\n```\n";
        let post = parse_post("broken.mdx", source.to_string(), &renderer).expect("Should parse");
        let site = SiteInfo::new("My Blog");
        let today = NaiveDate::from_ymd_opt(2024, 1, 18).expect("valid date");

        // Act
        let result = generate(&post, &renderer, &site, today);

        // Assert
        let err = result.expect_err("Unsupported language should fail the page");
        let chain = format!("{:#}", err);
        assert!(chain.contains("broken.mdx"), "{}", chain);
        assert!(chain.contains("no-such-language"), "{}", chain);
    }
}
