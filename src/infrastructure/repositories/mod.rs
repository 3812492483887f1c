//! Repository Implementations
//!
//! Concrete implementations of domain repository ports.

mod camera_store;

pub use camera_store::{TomlCameraStore, STORE_PATH_ENV};
