//! Implementation blocks for configuration types.

pub mod certificate_source;
pub mod certificates_config;
pub mod client_auth;
pub mod company_config;
pub mod configuration;
pub mod configuration_error;
pub mod http_server_config;
pub mod key_algorithm;
pub mod tls_config;
pub mod tls_version;
