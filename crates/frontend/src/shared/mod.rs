pub mod components;
pub mod icons;
pub mod list_utils;
pub mod listing;
pub mod modal;
pub mod site_data;
