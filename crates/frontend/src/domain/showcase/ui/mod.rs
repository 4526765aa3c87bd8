pub mod carousels;
pub mod logo_grid;
pub mod pages;

pub use carousels::{ClientsCarousel, PartnersCarousel};
pub use pages::{ClientsPage, PartnersPage};
