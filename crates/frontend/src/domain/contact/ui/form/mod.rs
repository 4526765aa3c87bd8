//! Contact form
//!
//! - view_model.rs: state, prefill and the submit command
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::ContactFormView;
pub use view_model::ContactFormViewModel;
