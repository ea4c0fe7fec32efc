//! Data structures for certificate management.

/// A certificate/key file pair on disk.
pub mod certificate_paths;

/// CA and host file pairs derived from configuration.
pub mod store_location;

/// Fields extracted from a parsed X.509 certificate.
pub mod parsed_certificate;

/// Freshly generated certificate and key, in DER and PEM.
pub mod generated_certificate;

/// The four PEM artifacts handled as one unit.
pub mod certificate_bundle;

/// File-backed persistence for the PEM artifacts.
pub mod certificate_store;

/// Private CA and host certificate generation.
pub mod certificate_generator;

/// Client for the remote certificate-issuing service.
pub mod remote_fetcher;

/// Store plus optional fetcher, exposed as a `CertificateProvider`.
pub mod certificate_service;

/// Verification and rotation state machine.
pub mod certificate_manager;

/// Snapshot of the last verification, reported over the API.
pub mod certificate_status;

/// Handshake-time server certificate resolver.
pub mod dynamic_certificate_resolver;

/// Handshake-time client certificate verifier.
pub mod dynamic_client_verifier;

/// TLS session cache emptied on every rotation.
pub mod rotating_session_cache;
