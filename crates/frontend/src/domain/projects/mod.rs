//! Projects explorer: category grid, per-category listing, detail modal.

pub mod ui;
