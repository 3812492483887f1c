//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain menu rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `Catalog` - Loads, imports, exports, removes and commits cameras

pub mod catalog;

pub use catalog::{BrandGroup, CameraSource, CameraSummary, Catalog, CatalogEntry};
