use std::fmt;
use crate::ssl::enums::certificate_state::CertificateState;

impl CertificateState {
    pub fn needs_rotation(&self) -> bool {
        matches!(self, CertificateState::Missing | CertificateState::Expiring | CertificateState::Corrupt)
    }
}

impl fmt::Display for CertificateState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CertificateState::Unverified => write!(f, "unverified"),
            CertificateState::Valid => write!(f, "valid"),
            CertificateState::Missing => write!(f, "missing"),
            CertificateState::Expiring => write!(f, "expiring"),
            CertificateState::Corrupt => write!(f, "corrupt"),
        }
    }
}
