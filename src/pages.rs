//! Page generation modules for different view types
//!
//! Each page module renders one kind of page and composes shared components
//! from the components module.

pub mod blog;
pub mod guestbook;
pub mod post;
