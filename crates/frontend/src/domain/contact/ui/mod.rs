pub mod cta_section;
pub mod form;
pub mod page;

pub use cta_section::ContactCta;
pub use page::ContactPage;
