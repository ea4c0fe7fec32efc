//! SSL/TLS certificate management module.
//!
//! This module keeps a private certificate authority and a host leaf
//! certificate on disk, rotates them before they expire and serves them to
//! the HTTPS listener at handshake time.
//!
//! # Components
//!
//! - `CertificateStore` - PEM persistence with atomic per-file writes
//! - `CertificateGenerator` - self-signed CA and CA-signed host certificates
//! - `RemoteFetcher` - pre-issued material from a remote issuing service
//! - `CertificateManager` - verification and rotation state machine
//! - `DynamicCertificateResolver` / `DynamicClientVerifier` - mutual TLS
//!
//! # Files
//!
//! For `file_name_cert = "cert.pem"` and `file_name_key = "key.pem"`:
//! - host: `{folder}/cert.pem`, `{folder}/key.pem`
//! - CA: `{folder}/ca_cert.pem`, `{folder}/ca_key.pem`
//!
//! # Hot Reload
//!
//! Every rotation bumps a shared epoch. The resolver and the verifier reload
//! from the store on the next handshake after the epoch moved, so the
//! listener never needs a restart.
//!
//! # Example
//!
//! ```rust,ignore
//! use certkeeper::ssl::ssl::{bootstrap_certificates, create_server_config};
//!
//! let manager = CertificateManager::from_config(&config)?;
//! bootstrap_certificates(&manager, shutdown).await?;
//! let tls = create_server_config(store, manager.epoch(), &config.tls)?;
//! ```

/// Certificate enumerations (artifacts, states, errors).
pub mod enums;

/// Certificate data structures.
pub mod structs;

/// Implementation blocks for certificate types.
pub mod impls;

/// Capability traits composed by the manager.
pub mod traits;

/// PEM helpers, TLS configuration and startup bootstrap.
#[allow(clippy::module_inception)]
pub mod ssl;
