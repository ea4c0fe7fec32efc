use crate::ssl::structs::certificate_bundle::CertificateBundle;

impl std::fmt::Debug for CertificateBundle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CertificateBundle")
            .field("ca_cert_bytes", &self.ca_cert.len())
            .field("has_ca_key", &self.ca_key.is_some())
            .field("host_cert_bytes", &self.host_cert.len())
            .field("host_key_bytes", &self.host_key.len())
            .finish()
    }
}
