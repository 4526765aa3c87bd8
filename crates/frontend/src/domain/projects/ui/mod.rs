pub mod explorer;
pub mod preview;
pub mod project_card;
pub mod project_modal;

pub use explorer::ProjectsPage;
pub use preview::ProjectsPreview;
