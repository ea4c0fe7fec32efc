use crate::config::structs::certificates_config::CertificatesConfig;
use crate::config::structs::company_config::CompanyConfig;

#[derive(Debug, Clone)]
pub struct CertificateGenerator {
    pub(crate) settings: CertificatesConfig,
    pub(crate) company: CompanyConfig,
}
