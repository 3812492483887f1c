//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod camera_store;

pub use camera_store::{CameraStore, StoreError};
