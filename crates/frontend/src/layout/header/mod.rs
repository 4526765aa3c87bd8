pub mod header;
pub mod mega_menu;

pub use header::Header;
