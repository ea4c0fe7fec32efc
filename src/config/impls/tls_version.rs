use std::fmt;
use rustls::SupportedProtocolVersion;
use crate::config::enums::tls_version::TlsVersion;

static TLS13_ONLY: &[&SupportedProtocolVersion] = &[&rustls::version::TLS13];

impl fmt::Display for TlsVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TlsVersion::tls12 => write!(f, "TLSv1.2"),
            TlsVersion::tls13 => write!(f, "TLSv1.3"),
        }
    }
}

impl TlsVersion {
    /// Protocol versions at or above this minimum.
    pub fn protocol_versions(&self) -> &'static [&'static SupportedProtocolVersion] {
        match self {
            TlsVersion::tls12 => rustls::ALL_VERSIONS,
            TlsVersion::tls13 => TLS13_ONLY,
        }
    }
}
