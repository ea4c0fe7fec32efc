//! # Certkeeper
//!
//! Private certificate authority bootstrap and host certificate rotation for
//! a mutual-TLS HTTPS listener, built on Actix-web and rustls.
//!
//! ## Overview
//!
//! At startup the service makes sure a CA certificate, a CA key, a host
//! certificate signed by that CA and the host key exist on disk, are
//! mutually consistent and are not about to expire. Missing, corrupt or
//! expiring material is regenerated as a whole (or fetched from a remote
//! issuing service). The HTTPS listener reads the host certificate and the
//! client trust pool from the store at handshake time, so a rotation never
//! needs a restart.
//!
//! ## Features
//!
//! - **Self-signed CA**: ECDSA P-256/P-384 or Ed25519 keys, random 128-bit serials
//! - **Rotation**: Configurable threshold before `not_after`, checked periodically
//! - **Atomic Persistence**: Temporary file plus rename for every artifact
//! - **Remote Source**: Optional fetch from an issuing service with local fallback
//! - **Mutual TLS**: Client certificates verified against the private CA
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use certkeeper::config::structs::configuration::Configuration;
//! use certkeeper::ssl::ssl::bootstrap_certificates;
//! use certkeeper::ssl::structs::certificate_manager::CertificateManager;
//!
//! let config = Configuration::load_from_file("config.toml", false)?;
//! let store = Arc::new(CertificateStore::from_config(&config.certificates));
//! let manager = CertificateManager::from_config(&config, store)?;
//! bootstrap_certificates(&manager, std::future::pending()).await?;
//! ```
//!
//! ## Modules
//!
//! - [`common`] - Logging setup, folder preparation and shared helpers
//! - [`config`] - Configuration management and TOML parsing
//! - [`http`] - HTTP/HTTPS listener with status and issuing endpoints
//! - [`ssl`] - Certificate store, generator, fetcher, manager and TLS bootstrap
//! - [`structs`] - CLI argument parsing

/// Common utilities and helper functions.
///
/// Logging initialisation with fern, folder creation and a constant-time
/// comparison used for the shared secret.
pub mod common;

/// Configuration management module.
///
/// Handles loading, parsing, and validating configuration from TOML files.
pub mod config;

/// HTTP/HTTPS listener.
///
/// Serves the health and certificate status endpoints, and the
/// certificate-issuing endpoints when enabled.
pub mod http;

/// SSL/TLS certificate management module.
///
/// Keeps the private CA and the host certificate on disk, rotates them and
/// serves them to rustls at handshake time.
pub mod ssl;

/// CLI argument parsing.
pub mod structs;
