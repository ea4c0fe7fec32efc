use std::path::PathBuf;
use std::time::Duration;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use crate::config::enums::certificate_source::CertificateSource;
use crate::config::enums::key_algorithm::KeyAlgorithm;
use crate::config::structs::certificates_config::CertificatesConfig;

impl Default for CertificatesConfig {
    fn default() -> Self {
        CertificatesConfig {
            folder_name: String::from("certs"),
            file_name_cert: String::from("cert.pem"),
            file_name_key: String::from("key.pem"),
            source: CertificateSource::local,
            fallback_to_local: true,
            key_algorithm: KeyAlgorithm::ecdsa_p256,
            common_name: String::from("Certkeeper Root CA"),
            hosts: vec![String::from("localhost"), String::from("127.0.0.1")],
            ca_validity_years: 10,
            host_validity_days: 365,
            rotation_threshold_days: 7,
            minutes_to_reload_certificate: 60,
            password_permission_end_point: String::new(),
            end_point_get_certificate_ca: String::new(),
            end_point_get_certificate_host: String::new(),
            end_point_get_certificate_host_key: String::new(),
            fetch_timeout_seconds: 5,
            issuer_enabled: false,
        }
    }
}

impl CertificatesConfig {
    pub fn folder(&self) -> PathBuf {
        PathBuf::from(&self.folder_name)
    }

    /// Shared secret as it travels in the request path of the issuing endpoints.
    pub fn permission_hash(&self) -> String {
        STANDARD.encode(self.password_permission_end_point.as_bytes())
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_seconds)
    }

    pub fn rotation_threshold(&self) -> chrono::Duration {
        chrono::Duration::days(i64::from(self.rotation_threshold_days))
    }
}
