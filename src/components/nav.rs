//! Site navigation: header links and client side navigation links

use maud::{Markup, html};

use crate::markdown::{Element, Node};

/// Attribute marking anchors handled by client side view transitions.
pub const TRANSITION_ATTR: &str = "data-transition";

/// Renders links to site-relative targets.
///
/// Link overrides hand every `/...` anchor to a navigator instead of
/// rendering it themselves, so the hosting site decides how in-site
/// navigation behaves.
pub trait Navigator: Send + Sync {
    /// Renders an anchor element pointing inside the site.
    fn link(&self, element: Element) -> Node;
}

/// Navigator that tags anchors for view transition handling.
///
/// Leaves `href`, `target` and `rel` untouched and forwards every other
/// attribute and child as given.
#[derive(Debug, Clone, Copy, Default)]
pub struct TransitionLink;

impl Navigator for TransitionLink {
    fn link(&self, mut element: Element) -> Node {
        element.set_attr(TRANSITION_ATTR, "");
        element.into()
    }
}

/// Top level sections shown in the site header.
pub const SECTIONS: &[(&str, &str)] = &[("home", "/"), ("blog", "/blog/"), ("guestbook", "/guestbook/")];

/// Renders the site header navigation
///
/// # Arguments
///
/// * `site_title`: Site name shown as the home link
/// * `current`: Section key of the page being rendered
///
/// # Returns
///
/// Header markup with the current section marked
pub fn site_nav(site_title: &str, current: &str) -> Markup {
    html! {
        header class="site-header" {
            a href="/" class="site-title" data-transition="" { (site_title) }
            nav class="site-nav" {
                @for (key, href) in SECTIONS.iter().skip(1) {
                    @if *key == current {
                        a href=(href) class="nav-link nav-link-active" data-transition="" { (key) }
                    } @else {
                        a href=(href) class="nav-link" data-transition="" { (key) }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transition_link_keeps_attributes() {
        // Arrange
        let element = Element::new("a")
            .attr("href", "/blog/post")
            .attr("title", "Post")
            .child(Node::Text("Post".to_string()));

        // Act
        let node = TransitionLink.link(element);

        // Assert
        let anchor = node.as_element().expect("Should be element");
        assert_eq!(anchor.attr_value("href"), Some("/blog/post"));
        assert_eq!(anchor.attr_value("title"), Some("Post"));
        assert_eq!(anchor.attr_value(TRANSITION_ATTR), Some(""));
        assert_eq!(anchor.text_content(), "Post");
    }

    #[test]
    fn test_site_nav_marks_current_section() {
        // Arrange & Act
        let html = site_nav("My Site", "blog").into_string();

        // Assert
        assert!(html.contains("My Site"));
        assert!(html.contains("class=\"nav-link nav-link-active\" data-transition=\"\">blog</a>"));
        assert!(html.contains("href=\"/guestbook/\""));
    }
}
