//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod config_warning;
mod icon_tag;
mod selection;

pub use config_warning::ConfigWarning;
pub use icon_tag::{icon_name, icon_tag, strip_icon_tags};
pub use selection::{InvalidSelection, MenuLevel, SelectionPath};
