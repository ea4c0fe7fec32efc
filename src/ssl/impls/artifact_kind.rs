use std::fmt;
use crate::ssl::enums::artifact_kind::ArtifactKind;
use crate::ssl::enums::certificate_pair::CertificatePair;

impl ArtifactKind {
    /// Every artifact, in write order.
    pub const ALL: [ArtifactKind; 4] = [
        ArtifactKind::CaCert,
        ArtifactKind::CaKey,
        ArtifactKind::HostCert,
        ArtifactKind::HostKey,
    ];

    pub fn pair(&self) -> CertificatePair {
        match self {
            ArtifactKind::CaCert | ArtifactKind::CaKey => CertificatePair::Ca,
            ArtifactKind::HostCert | ArtifactKind::HostKey => CertificatePair::Host,
        }
    }

    pub fn is_certificate(&self) -> bool {
        matches!(self, ArtifactKind::CaCert | ArtifactKind::HostCert)
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArtifactKind::CaCert => write!(f, "CA certificate"),
            ArtifactKind::CaKey => write!(f, "CA key"),
            ArtifactKind::HostCert => write!(f, "host certificate"),
            ArtifactKind::HostKey => write!(f, "host key"),
        }
    }
}
