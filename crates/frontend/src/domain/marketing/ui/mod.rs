pub mod about;
pub mod contact_section;
pub mod hero;
pub mod landing;
pub mod services;

pub use about::AboutSection;
pub use landing::LandingPage;
pub use services::ServicesSection;
