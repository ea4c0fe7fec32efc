use thiserror::Error;

#[derive(Debug, Error)]
pub enum CertificateError {
    #[error("Certificate artifact not found: {0}")]
    NotFound(String),
    #[error("Failed to decode PEM: {0}")]
    DecodeError(String),
    #[error("Failed to parse certificate: {0}")]
    ParseError(String),
    #[error("Failed to generate key pair: {0}")]
    KeyGenError(String),
    #[error("Failed to build certificate: {0}")]
    CertBuildError(String),
    #[error("Invalid certificate authority: {0}")]
    InvalidCaError(String),
    #[error("Failed to fetch certificate: {0}")]
    FetchError(String),
    #[error("I/O error: {0}")]
    IoError(String),
    #[error("Failed to build certified key: {0}")]
    CertifiedKeyError(String),
    #[error("Invalid TLS configuration: {0}")]
    TlsConfigError(String),
    #[error("Certificate bootstrap cancelled by shutdown")]
    Cancelled,
}
