//! Configuration enumerations.

/// Source of truth for certificate material (`local` or `remote`).
pub mod certificate_source;

/// Client certificate policy on the TLS listener.
pub mod client_auth;

/// Errors raised while loading, saving or validating configuration.
pub mod configuration_error;

/// Key algorithm used for locally generated key pairs.
pub mod key_algorithm;

/// Minimum TLS protocol version accepted by the listener.
pub mod tls_version;
