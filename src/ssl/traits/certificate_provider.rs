use async_trait::async_trait;
use crate::ssl::enums::artifact_kind::ArtifactKind;
use crate::ssl::enums::certificate_error::CertificateError;
use crate::ssl::structs::certificate_bundle::CertificateBundle;
use crate::ssl::structs::store_location::StoreLocation;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CertificateProvider: Send + Sync {
    fn artifact_exists(&self, kind: ArtifactKind) -> bool;

    /// Raw PEM bytes of an artifact, validated for its kind.
    fn read(&self, kind: ArtifactKind) -> Result<Vec<u8>, CertificateError>;

    /// Writes CA cert, CA key, host cert and host key, in that order.
    fn write_bundle(&self, bundle: &CertificateBundle) -> Result<(), CertificateError>;

    /// CA cert, host cert and host key from the remote issuer.
    async fn fetch_remote(&self) -> Result<CertificateBundle, CertificateError>;

    fn location(&self) -> StoreLocation;
}
