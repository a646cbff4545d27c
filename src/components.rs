//! Reusable HTML components for page generation
//!
//! This module provides Maud component functions shared across the blog,
//! post and guestbook pages, plus the navigation collaborator used by the
//! markdown link override.

pub mod footer;
pub mod guestbook;
pub mod layout;
pub mod nav;
