//! Guestbook widget embed

use maud::{Markup, html};

/// Element id the comment widget mounts into.
pub const WIDGET_MOUNT_ID: &str = "guestbook";

/// Renders the mount point for the external guestbook widget
///
/// The widget owns submission and listing of entries; this component only
/// positions it. Without a script URL the mount point is still emitted so a
/// page-level script can attach later.
///
/// # Arguments
///
/// * `script`: Optional script URL that loads the widget
pub fn widget(script: Option<&str>) -> Markup {
    html! {
        div id=(WIDGET_MOUNT_ID) class="guestbook-widget" {}
        @if let Some(src) = script {
            script src=(src) async {}
        }
    }
}
