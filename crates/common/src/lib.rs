//! Rinkview Common Utilities
//!
//! Shared infrastructure for all Rinkview crates:
//! - Error types and result aliases
//! - Game-clock parsing and period arithmetic
//! - Tracing/logging initialization
//! - Configuration loading

pub mod clock;
pub mod config;
pub mod error;
pub mod logging;

pub use clock::*;
pub use config::*;
pub use error::*;
