//! Page footer component

use maud::{Markup, html};

use crate::site::SiteInfo;

/// Renders the site footer with optional author credit
pub fn footer(site: &SiteInfo) -> Markup {
    html! {
        footer class="site-footer" {
            @if let Some(author) = &site.author {
                p { "© " (author) }
            }
            p class="site-footer-feed" {
                a href="/blog/" data-transition="" { "All posts" }
            }
        }
    }
}
