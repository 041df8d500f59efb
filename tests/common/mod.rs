//! Common test utilities for spdx-stamp CLI and property tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated source tree in a temp directory
//! - Fixtures: Reusable file content constants

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
