//! Contact page, contact form and the reusable call-to-action block.

pub mod api;
pub mod ui;
