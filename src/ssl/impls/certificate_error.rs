use crate::ssl::enums::certificate_error::CertificateError;

impl CertificateError {
    /// Errors the manager heals by regenerating: unreadable material on
    /// disk and a failing remote issuer (subject to the fallback policy).
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            CertificateError::NotFound(_)
                | CertificateError::DecodeError(_)
                | CertificateError::ParseError(_)
                | CertificateError::FetchError(_)
        )
    }
}

impl From<std::io::Error> for CertificateError {
    fn from(error: std::io::Error) -> Self {
        CertificateError::IoError(error.to_string())
    }
}

impl From<rcgen::Error> for CertificateError {
    fn from(error: rcgen::Error) -> Self {
        CertificateError::CertBuildError(error.to_string())
    }
}
