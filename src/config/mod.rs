//! Configuration management module.
//!
//! This module handles loading, parsing, and validating the service
//! configuration from a TOML file.
//!
//! # Configuration Structure
//!
//! The main configuration file (`config.toml`) contains sections for:
//! - **root**: log level, production mode, API version, folders to create
//! - **http_server**: listener address, workers and timeouts
//! - **tls**: minimum protocol version, cipher suites, client authentication
//! - **certificates**: store location, generation parameters, rotation
//!   threshold and the remote issuing endpoints
//! - **company**: subject fields stamped into generated certificates
//!
//! # Example
//!
//! ```rust,ignore
//! use certkeeper::config::structs::configuration::Configuration;
//!
//! let config = Configuration::load_from_file("config.toml", false)?;
//! ```

/// Configuration enumerations (key algorithm, certificate source, TLS version).
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;
