use std::fmt;
use crate::config::enums::certificate_source::CertificateSource;

impl fmt::Display for CertificateSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CertificateSource::local => write!(f, "local"),
            CertificateSource::remote => write!(f, "remote"),
        }
    }
}
