//! Clients and partners: filterable logo grids and landing carousels.

pub mod ui;
