use serde::{Deserialize, Serialize};
use crate::config::enums::certificate_source::CertificateSource;
use crate::config::enums::key_algorithm::KeyAlgorithm;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct CertificatesConfig {
    pub folder_name: String,
    pub file_name_cert: String,
    pub file_name_key: String,
    pub source: CertificateSource,
    pub fallback_to_local: bool,
    pub key_algorithm: KeyAlgorithm,
    pub common_name: String,
    pub hosts: Vec<String>,
    pub ca_validity_years: u32,
    pub host_validity_days: u32,
    pub rotation_threshold_days: u32,
    pub minutes_to_reload_certificate: u64,
    pub password_permission_end_point: String,
    pub end_point_get_certificate_ca: String,
    pub end_point_get_certificate_host: String,
    pub end_point_get_certificate_host_key: String,
    pub fetch_timeout_seconds: u64,
    pub issuer_enabled: bool,
}
