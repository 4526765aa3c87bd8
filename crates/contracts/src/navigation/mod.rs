pub mod routes;
pub mod scroll;
pub mod selection;

pub use routes::{nav_items, HomeSection, NavItem, NavKind, Route};
pub use scroll::{ScrollAction, ScrollCoordinator, ScrollPhase, ScrollStep, ScrollTimings, TargetMetrics};
pub use selection::SelectionState;
