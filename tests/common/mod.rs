//! Common test utilities for Boxpick CLI tests.
//!
//! - `TestEnv`: isolated temp-dir environment running the compiled binary
//! - Fixtures: reusable JSON feed constants

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
