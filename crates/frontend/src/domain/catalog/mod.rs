//! Product catalog: filterable listing, product detail modal, landing preview.

pub mod ui;
