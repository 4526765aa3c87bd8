pub mod category_filter;
pub mod page;
pub mod preview;
pub mod product_card;
pub mod product_modal;

pub use page::CatalogPage;
pub use preview::ProductsPreview;
