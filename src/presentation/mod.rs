//! Presentation Layer
//!
//! Wiring between the command line and the application layer.

pub mod factory;
