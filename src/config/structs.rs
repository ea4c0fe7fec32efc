//! Configuration data structures.
//!
//! Each struct corresponds to a section in the TOML configuration file.

/// Certificate store, generation, rotation and remote source settings.
pub mod certificates_config;

/// Subject fields stamped into generated certificates.
pub mod company_config;

/// Root configuration structure containing all settings.
pub mod configuration;

/// HTTP/HTTPS listener configuration.
pub mod http_server_config;

/// TLS protocol, cipher suite and client authentication settings.
pub mod tls_config;
