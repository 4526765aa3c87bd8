//! Landing page and the presentational sections shared with the static pages.

pub mod content;
pub mod ui;
