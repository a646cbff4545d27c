//! Guestbook page generation

use maud::{Markup, html};

use crate::components::guestbook::widget;
use crate::components::layout::page_wrapper;
use crate::site::SiteInfo;

/// Invitation text shown above the widget.
pub const INVITATION: &str = "Leave a comment below to sign my Guestbook. It could literally be \
    anything - a joke, a quote or even a cool fact. Surprise me!";

/// Generates the guestbook page shell
///
/// Positions the external comment widget under a heading and the static
/// invitation text. Entries are stored and listed by the widget itself.
pub fn generate(site: &SiteInfo) -> Markup {
    let content = html! {
        h1 class="page-title" { "Guestbook" }
        p class="page-intro" { (INVITATION) }
        div class="spacer" {}
        (widget(site.guestbook_script.as_deref()))
    };

    page_wrapper(site, "Guestbook", "guestbook", content)
}
