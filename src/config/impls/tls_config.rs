use crate::config::enums::client_auth::ClientAuth;
use crate::config::enums::tls_version::TlsVersion;
use crate::config::structs::tls_config::TlsConfig;

impl Default for TlsConfig {
    fn default() -> Self {
        TlsConfig {
            min_version: TlsVersion::tls12,
            cipher_suites: vec![
                String::from("TLS13_AES_256_GCM_SHA384"),
                String::from("TLS13_AES_128_GCM_SHA256"),
                String::from("TLS13_CHACHA20_POLY1305_SHA256"),
                String::from("TLS_ECDHE_ECDSA_WITH_AES_128_GCM_SHA256"),
                String::from("TLS_ECDHE_ECDSA_WITH_AES_256_GCM_SHA384"),
                String::from("TLS_ECDHE_RSA_WITH_AES_256_GCM_SHA384"),
                String::from("TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256"),
            ],
            client_auth: ClientAuth::required,
        }
    }
}
