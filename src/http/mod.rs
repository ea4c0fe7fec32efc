//! HTTP/HTTPS listener.
//!
//! Serves the operational endpoints of the service and, when enabled, the
//! certificate-issuing endpoints other instances fetch their material from.
//!
//! # Supported Endpoints
//!
//! - `/health` - Liveness check
//! - `/api/{version}/certificates/status` - Result of the last verification
//! - `/api/{version}/certificates/ca/{hash}` - CA certificate PEM
//! - `/api/{version}/certificates/host/{hash}` - Host certificate PEM
//! - `/api/{version}/certificates/host-key/{hash}` - Host key PEM
//!
//! `{hash}` is the base64 encoding of the shared secret
//! (`password_permission_end_point`). The issuing endpoints only exist when
//! `issuer_enabled` is set.
//!
//! In production the listener terminates mutual TLS with the configuration
//! built by the `ssl` module; otherwise it serves plain HTTP.

/// Data structures shared with the request handlers.
pub mod structs;

/// Core HTTP service implementation.
#[allow(clippy::module_inception)]
pub mod http;

/// Handler and routing tests.
pub mod tests;
