use std::sync::Arc;
use async_trait::async_trait;
use crate::config::enums::certificate_source::CertificateSource;
use crate::config::structs::certificates_config::CertificatesConfig;
use crate::ssl::enums::artifact_kind::ArtifactKind;
use crate::ssl::enums::certificate_error::CertificateError;
use crate::ssl::ssl::{decode_private_key, parse_certificate_pem};
use crate::ssl::structs::certificate_bundle::CertificateBundle;
use crate::ssl::structs::certificate_service::CertificateService;
use crate::ssl::structs::certificate_store::CertificateStore;
use crate::ssl::structs::remote_fetcher::RemoteFetcher;
use crate::ssl::structs::store_location::StoreLocation;
use crate::ssl::traits::certificate_provider::CertificateProvider;

impl CertificateService {
    pub fn new(store: Arc<CertificateStore>, fetcher: Option<RemoteFetcher>) -> Self {
        Self { store, fetcher }
    }

    /// The fetcher is only built for the remote source.
    pub fn from_config(store: Arc<CertificateStore>, config: &CertificatesConfig) -> Result<Self, CertificateError> {
        let fetcher = match config.source {
            CertificateSource::remote => Some(RemoteFetcher::from_config(config)?),
            CertificateSource::local => None,
        };
        Ok(Self::new(store, fetcher))
    }

    pub fn store(&self) -> Arc<CertificateStore> {
        self.store.clone()
    }
}

#[async_trait]
impl CertificateProvider for CertificateService {
    fn artifact_exists(&self, kind: ArtifactKind) -> bool {
        self.store.artifact_exists(kind)
    }

    fn read(&self, kind: ArtifactKind) -> Result<Vec<u8>, CertificateError> {
        self.store.read(kind)
    }

    fn write_bundle(&self, bundle: &CertificateBundle) -> Result<(), CertificateError> {
        self.store.write_bundle(bundle)
    }

    async fn fetch_remote(&self) -> Result<CertificateBundle, CertificateError> {
        let fetcher = self.fetcher
            .as_ref()
            .ok_or_else(|| CertificateError::FetchError(String::from("no remote issuer configured")))?;
        let ca_cert = fetcher.fetch_ca().await?;
        let host_cert = fetcher.fetch_host_cert().await?;
        let host_key = fetcher.fetch_host_key().await?;

        // Nothing is written unless the material at least parses.
        parse_certificate_pem(&ca_cert)
            .map_err(|e| CertificateError::FetchError(format!("remote CA certificate: {e}")))?;
        parse_certificate_pem(&host_cert)
            .map_err(|e| CertificateError::FetchError(format!("remote host certificate: {e}")))?;
        decode_private_key(&host_key)
            .map_err(|e| CertificateError::FetchError(format!("remote host key: {e}")))?;

        Ok(CertificateBundle {
            ca_cert,
            ca_key: None,
            host_cert,
            host_key,
        })
    }

    fn location(&self) -> StoreLocation {
        self.store.location().clone()
    }
}
