use std::fmt;
use crate::ssl::enums::artifact_kind::ArtifactKind;
use crate::ssl::enums::certificate_pair::CertificatePair;

impl CertificatePair {
    pub fn certificate(&self) -> ArtifactKind {
        match self {
            CertificatePair::Ca => ArtifactKind::CaCert,
            CertificatePair::Host => ArtifactKind::HostCert,
        }
    }

    pub fn key(&self) -> ArtifactKind {
        match self {
            CertificatePair::Ca => ArtifactKind::CaKey,
            CertificatePair::Host => ArtifactKind::HostKey,
        }
    }
}

impl fmt::Display for CertificatePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CertificatePair::Ca => write!(f, "CA"),
            CertificatePair::Host => write!(f, "host"),
        }
    }
}
