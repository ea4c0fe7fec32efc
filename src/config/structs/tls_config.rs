use serde::{Deserialize, Serialize};
use crate::config::enums::client_auth::ClientAuth;
use crate::config::enums::tls_version::TlsVersion;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct TlsConfig {
    pub min_version: TlsVersion,
    pub cipher_suites: Vec<String>,
    pub client_auth: ClientAuth,
}
