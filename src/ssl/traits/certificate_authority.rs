use crate::ssl::enums::certificate_error::CertificateError;
use crate::ssl::structs::certificate_bundle::CertificateBundle;
use crate::ssl::structs::generated_certificate::GeneratedCertificate;

#[cfg_attr(test, mockall::automock)]
pub trait CertificateAuthority: Send + Sync {
    fn generate_ca(&self) -> Result<GeneratedCertificate, CertificateError>;

    fn generate_host(&self, ca_cert_pem: &str, ca_key_pem: &str) -> Result<GeneratedCertificate, CertificateError>;

    /// A CA and a host certificate signed by that exact CA.
    fn generate_bundle(&self) -> Result<CertificateBundle, CertificateError>;
}
