//! Static pages: about, services, legal and the not-found fallback.

pub mod about;
pub mod legal;
pub mod not_found;
pub mod services;

pub use about::AboutPage;
pub use legal::LegalPage;
pub use not_found::NotFoundPage;
pub use services::ServicesPage;
