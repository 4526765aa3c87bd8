pub mod button;
pub mod card_animated;
pub mod chip;
pub mod gallery;
pub mod logo_carousel;
pub mod optimized_image;
pub mod section_header;

pub use button::{Button, ButtonLink};
pub use card_animated::{stagger_delay, CardAnimated};
pub use chip::{Badge, FilterChip};
pub use gallery::ImageGallery;
pub use logo_carousel::{LogoCard, LogoCarousel};
pub use optimized_image::{placeholder_src, OptimizedImage};
pub use section_header::SectionHeader;
