use std::fmt;
use rcgen::SignatureAlgorithm;
use crate::config::enums::key_algorithm::KeyAlgorithm;

impl fmt::Display for KeyAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyAlgorithm::ecdsa_p256 => write!(f, "ECDSA P-256"),
            KeyAlgorithm::ecdsa_p384 => write!(f, "ECDSA P-384"),
            KeyAlgorithm::ed25519 => write!(f, "Ed25519"),
        }
    }
}

impl KeyAlgorithm {
    pub fn signature_algorithm(&self) -> &'static SignatureAlgorithm {
        match self {
            KeyAlgorithm::ecdsa_p256 => &rcgen::PKCS_ECDSA_P256_SHA256,
            KeyAlgorithm::ecdsa_p384 => &rcgen::PKCS_ECDSA_P384_SHA384,
            KeyAlgorithm::ed25519 => &rcgen::PKCS_ED25519,
        }
    }
}
