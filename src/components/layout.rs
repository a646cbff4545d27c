//! Page layout wrapper component

use maud::{DOCTYPE, Markup, html};

use super::footer::footer;
use super::nav::site_nav;
use crate::site::SiteInfo;

/// Wraps page content with standard HTML structure
///
/// Provides consistent DOCTYPE, html, head, header navigation and footer
/// across all page types. The caller provides page-specific main content.
///
/// # Arguments
///
/// * `site`: Site metadata for title, navigation and footer
/// * `title`: Page title text (without site suffix)
/// * `section`: Navigation section key of the page
/// * `body`: Page-specific main markup
///
/// # Returns
///
/// Complete HTML document with wrapped content
pub fn page_wrapper(site: &SiteInfo, title: &str, section: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " | " (site.title) }
                link rel="stylesheet" href="/assets/site.css";
            }
            body {
                div class="container" {
                    (site_nav(&site.title, section))
                    main { (body) }
                }
                (footer(site))
            }
        }
    }
}
