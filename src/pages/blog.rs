//! Blog index page generation

use maud::{Markup, html};

use crate::components::layout::page_wrapper;
use crate::content::Post;
use crate::site::SiteInfo;
use crate::util::format_date;

/// Generates the blog index listing every post, newest first
///
/// # Arguments
///
/// * `posts`: Posts in display order
/// * `site`: Site metadata
///
/// # Returns
///
/// Complete HTML document for the blog index
pub fn generate(posts: &[Post], site: &SiteInfo) -> Markup {
    let content = html! {
        h1 class="page-title" { "Blog" }
        @if posts.is_empty() {
            p class="empty-state" { "No posts yet" }
        } @else {
            ul class="post-list" {
                @for post in posts {
                    li class="post-row" {
                        a href=(post.url()) class="post-link" data-transition="" {
                            span class="post-row-title" { (post.meta().title) }
                            span class="post-row-date" { (format_date(post.meta().published_at)) }
                        }
                        @if let Some(summary) = &post.meta().summary {
                            p class="post-summary" { (summary) }
                        }
                    }
                }
            }
        }
    };

    page_wrapper(site, "Blog", "blog", content)
}
