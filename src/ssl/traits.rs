//! Capability traits composed by the certificate manager.

/// Reading, writing and fetching certificate material.
pub mod certificate_provider;

/// Generating a CA and host certificates.
pub mod certificate_authority;
