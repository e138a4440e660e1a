//! Common test utilities for SmartPark contract and scenario tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated temp directory plus helpers to run the `smartpark` binary
//! - Fixtures: Registries wired to in-memory logs and a manual clock

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
