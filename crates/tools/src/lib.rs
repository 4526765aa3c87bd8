//! Content tooling for the O&P site: image extraction from legacy dumps, product
//! normalization and data audits.

pub mod audit;
pub mod config;
pub mod extract_images;
pub mod normalize_products;
