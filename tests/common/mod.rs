//! Common test utilities for camera-menu CLI tests.
//!
//! This module provides:
//! - `TestEnv`: isolated data directory, record store and config home
//! - Fixtures: reusable menu documents and bundle archives

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
