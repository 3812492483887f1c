pub mod catalog;
pub mod menu;
pub mod search;
pub mod status;
