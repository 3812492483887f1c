//! Domain Layer
//!
//! The menu model - pure logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Menu tree, help map, camera metadata, documents
//! - `value_objects/` - Icon tags, selection paths, config warnings
//! - `services/` - Builder, resolver, search, editor, serializer
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system directly
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - Persistence goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
