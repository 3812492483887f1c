//! Domain Services
//!
//! Pure menu logic: building, resolving, searching, editing and
//! serializing. Nothing here touches the file system.

pub mod config_resolver;
pub mod document;
pub mod editor;
pub mod menu_builder;
pub mod search;
pub mod serializer;

pub use config_resolver::{resolve_config, set_config_value, Placement};
pub use document::Fidelity;
pub use editor::{EditSession, DEFAULT_PLACEHOLDER};
pub use menu_builder::{
    build_menu, carry_forward, detect_help_column, split_sections, BuiltMenu, CONFIG_SENTINEL,
};
pub use search::{search, Search, SearchHit};
pub use serializer::{serialize, serialize_with, SerializeOptions};
