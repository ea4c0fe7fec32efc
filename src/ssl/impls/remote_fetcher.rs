use std::time::Duration;
use log::{debug, warn};
use crate::config::structs::certificates_config::CertificatesConfig;
use crate::ssl::enums::certificate_error::CertificateError;
use crate::ssl::structs::remote_fetcher::RemoteFetcher;

impl std::fmt::Debug for RemoteFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteFetcher")
            .field("end_point_ca", &self.end_point_ca)
            .field("end_point_host", &self.end_point_host)
            .field("end_point_host_key", &self.end_point_host_key)
            .finish()
    }
}

impl RemoteFetcher {
    /// The issuing service is reached before any trust exists, so its
    /// server certificate is NOT verified. The shared secret in the request
    /// path is the only authentication.
    pub fn new(
        end_point_ca: &str,
        end_point_host: &str,
        end_point_host_key: &str,
        permission_hash: &str,
        timeout: Duration,
    ) -> Result<Self, CertificateError> {
        let client = reqwest::Client::builder()
            .danger_accept_invalid_certs(true)
            .timeout(timeout)
            .build()
            .map_err(|e| CertificateError::FetchError(e.to_string()))?;
        Ok(Self {
            client,
            end_point_ca: end_point_ca.trim_end_matches('/').to_string(),
            end_point_host: end_point_host.trim_end_matches('/').to_string(),
            end_point_host_key: end_point_host_key.trim_end_matches('/').to_string(),
            permission_hash: permission_hash.to_string(),
        })
    }

    pub fn from_config(config: &CertificatesConfig) -> Result<Self, CertificateError> {
        warn!("[CERTIFICATE] Remote issuer configured; its TLS certificate will not be verified");
        Self::new(
            &config.end_point_get_certificate_ca,
            &config.end_point_get_certificate_host,
            &config.end_point_get_certificate_host_key,
            &config.permission_hash(),
            config.fetch_timeout(),
        )
    }

    pub async fn fetch_ca(&self) -> Result<Vec<u8>, CertificateError> {
        self.fetch(&self.end_point_ca).await
    }

    pub async fn fetch_host_cert(&self) -> Result<Vec<u8>, CertificateError> {
        self.fetch(&self.end_point_host).await
    }

    pub async fn fetch_host_key(&self) -> Result<Vec<u8>, CertificateError> {
        self.fetch(&self.end_point_host_key).await
    }

    async fn fetch(&self, end_point: &str) -> Result<Vec<u8>, CertificateError> {
        debug!("[CERTIFICATE] Requesting {end_point}");
        let url = format!("{}/{}", end_point, self.permission_hash);
        let response = self.client
            .get(url)
            .send()
            .await
            .map_err(|e| CertificateError::FetchError(format!("{end_point}: {}", e.without_url())))?;
        let status = response.status();
        if !status.is_success() {
            return Err(CertificateError::FetchError(format!("{end_point} responded with {status}")));
        }
        let body = response
            .bytes()
            .await
            .map_err(|e| CertificateError::FetchError(format!("{end_point}: {}", e.without_url())))?;
        Ok(body.to_vec())
    }
}
