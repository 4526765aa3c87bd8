//! Shared model and pure logic of the O&P site.
//!
//! Everything here is target-independent: the WASM frontend renders it and the
//! `site-tools` binary audits it.

pub mod carousel;
pub mod catalog;
pub mod contact;
pub mod data;
pub mod error;
pub mod media;
pub mod navigation;
pub mod showcase;

pub use error::DataError;
