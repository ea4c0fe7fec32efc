//! Common utilities and shared functionality.
//!
//! Helpers used across the other modules: logging setup, folder
//! preparation, timestamps and a constant-time string comparison for the
//! shared secret.
//!
//! # Example
//!
//! ```rust,ignore
//! use certkeeper::common::common::{setup_logging, create_folders};
//!
//! setup_logging(&config)?;
//! create_folders(&config.folders)?;
//! ```

/// Common data structures.
pub mod structs;

/// Core utility functions.
#[allow(clippy::module_inception)]
pub mod common;

/// Implementation blocks for common types.
pub mod impls;
