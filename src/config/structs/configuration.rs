use serde::{Deserialize, Serialize};
use crate::config::structs::certificates_config::CertificatesConfig;
use crate::config::structs::company_config::CompanyConfig;
use crate::config::structs::http_server_config::HttpServerConfig;
use crate::config::structs::tls_config::TlsConfig;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Configuration {
    pub log_level: String,
    pub production: bool,
    pub app_name: String,
    pub api_version: String,
    #[serde(default)]
    pub folders: Vec<String>,
    #[serde(default)]
    pub http_server: HttpServerConfig,
    #[serde(default)]
    pub tls: TlsConfig,
    #[serde(default)]
    pub certificates: CertificatesConfig,
    #[serde(default)]
    pub company: CompanyConfig,
}
