pub mod catalog;
pub mod contact;
pub mod info;
pub mod marketing;
pub mod projects;
pub mod showcase;
