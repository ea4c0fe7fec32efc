//! Implementation blocks for certificate management types.

pub mod artifact_kind;
pub mod certificate_bundle;
pub mod certificate_error;
pub mod certificate_generator;
pub mod certificate_manager;
pub mod certificate_pair;
pub mod certificate_service;
pub mod certificate_state;
pub mod certificate_store;
pub mod dynamic_certificate_resolver;
pub mod dynamic_client_verifier;
pub mod remote_fetcher;
pub mod store_location;
pub mod rotating_session_cache;
