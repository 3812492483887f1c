pub mod json;
pub mod terminal;
pub mod text;
pub mod views;
