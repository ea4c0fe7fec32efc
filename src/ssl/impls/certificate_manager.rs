use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use chrono::Utc;
use log::{error, info, warn};
use parking_lot::RwLock;
use crate::config::enums::certificate_source::CertificateSource;
use crate::config::structs::configuration::Configuration;
use crate::ssl::enums::artifact_kind::ArtifactKind;
use crate::ssl::enums::certificate_error::CertificateError;
use crate::ssl::enums::certificate_pair::CertificatePair;
use crate::ssl::enums::certificate_state::CertificateState;
use crate::ssl::ssl::{certified_key_from_pem, parse_certificate_pem, verify_issued_by};
use crate::ssl::structs::certificate_bundle::CertificateBundle;
use crate::ssl::structs::certificate_generator::CertificateGenerator;
use crate::ssl::structs::certificate_manager::CertificateManager;
use crate::ssl::structs::certificate_paths::CertificatePaths;
use crate::ssl::structs::certificate_service::CertificateService;
use crate::ssl::structs::certificate_status::CertificateStatus;
use crate::ssl::structs::certificate_store::CertificateStore;
use crate::ssl::structs::parsed_certificate::ParsedCertificate;
use crate::ssl::structs::store_location::StoreLocation;
use crate::ssl::traits::certificate_authority::CertificateAuthority;
use crate::ssl::traits::certificate_provider::CertificateProvider;

const REMOTE_ARTIFACTS: [ArtifactKind; 3] = [
    ArtifactKind::CaCert,
    ArtifactKind::HostCert,
    ArtifactKind::HostKey,
];

impl CertificateManager {
    pub fn new(
        provider: Arc<dyn CertificateProvider>,
        authority: Arc<dyn CertificateAuthority>,
        source: CertificateSource,
        fallback_to_local: bool,
        rotation_threshold: chrono::Duration,
    ) -> Self {
        Self {
            provider,
            authority,
            source,
            fallback_to_local,
            rotation_threshold,
            rotation_lock: tokio::sync::Mutex::new(()),
            epoch: Arc::new(AtomicU64::new(0)),
            generations: AtomicU64::new(0),
            status: RwLock::new(CertificateStatus::default()),
        }
    }

    /// Manager over the given store, generating with the configured
    /// algorithm and subject and fetching from the configured issuer.
    pub fn from_config(config: &Configuration, store: Arc<CertificateStore>) -> Result<Self, CertificateError> {
        let certificates = &config.certificates;
        let service = CertificateService::from_config(store, certificates)?;
        Ok(Self::new(
            Arc::new(service),
            Arc::new(CertificateGenerator::from_config(config)),
            certificates.source.clone(),
            certificates.fallback_to_local,
            certificates.rotation_threshold(),
        ))
    }

    pub fn location(&self) -> StoreLocation {
        self.provider.location()
    }

    pub fn ca_certificate_paths(&self) -> CertificatePaths {
        self.location().paths(CertificatePair::Ca).clone()
    }

    pub fn host_certificate_paths(&self) -> CertificatePaths {
        self.location().paths(CertificatePair::Host).clone()
    }

    /// Bumped after every rotation; TLS consumers reload when it moves.
    pub fn epoch(&self) -> Arc<AtomicU64> {
        self.epoch.clone()
    }

    /// Number of completed rotations.
    pub fn generations(&self) -> u64 {
        self.generations.load(Ordering::SeqCst)
    }

    pub fn status(&self) -> CertificateStatus {
        self.status.read().clone()
    }

    pub async fn verify_and_rotate(&self) -> bool {
        match self.check_and_rotate().await {
            Ok(_) => true,
            Err(e) => {
                error!("[CERTIFICATE] Verification failed: {e}");
                false
            }
        }
    }

    /// Inspects the stored bundle and regenerates it in full when it is
    /// missing, corrupt or inside the rotation threshold. Returns the state
    /// found before any rotation; on `Ok` the stored material is valid.
    pub async fn check_and_rotate(&self) -> Result<CertificateState, CertificateError> {
        let _guard = self.rotation_lock.lock().await;
        let (state, expiries) = self.inspect();
        self.record(state, expiries);
        match state {
            CertificateState::Valid => {}
            CertificateState::Missing => {
                info!("[CERTIFICATE] Certificate material missing, generating a new bundle");
                self.rotate().await?;
            }
            CertificateState::Corrupt => {
                warn!("[CERTIFICATE] Certificate material corrupt, regenerating the bundle");
                self.rotate().await?;
            }
            CertificateState::Expiring => {
                info!("[CERTIFICATE] Certificate expires within {} days, rotating", self.rotation_threshold.num_days());
                self.rotate().await?;
            }
            CertificateState::Unverified => {}
        }
        Ok(state)
    }

    fn required_artifacts(&self) -> &'static [ArtifactKind] {
        match self.source {
            CertificateSource::local => &ArtifactKind::ALL,
            CertificateSource::remote => &REMOTE_ARTIFACTS,
        }
    }

    fn inspect(&self) -> (CertificateState, Option<(ParsedCertificate, ParsedCertificate)>) {
        if let Some(kind) = self.required_artifacts().iter().find(|kind| !self.provider.artifact_exists(**kind)) {
            info!("[CERTIFICATE] {} not found", kind);
            return (CertificateState::Missing, None);
        }
        let (host, ca) = match self.load_consistent() {
            Ok(certificates) => certificates,
            Err(e) => {
                warn!("[CERTIFICATE] Stored material rejected: {e}");
                return (CertificateState::Corrupt, None);
            }
        };
        let now = Utc::now();
        if now >= host.not_after - self.rotation_threshold || now >= ca.not_after - self.rotation_threshold {
            return (CertificateState::Expiring, Some((host, ca)));
        }
        (CertificateState::Valid, Some((host, ca)))
    }

    fn load_consistent(&self) -> Result<(ParsedCertificate, ParsedCertificate), CertificateError> {
        let host_cert = self.provider.read(ArtifactKind::HostCert)?;
        let ca_cert = self.provider.read(ArtifactKind::CaCert)?;
        let host_key = self.provider.read(ArtifactKind::HostKey)?;
        if self.source == CertificateSource::local {
            self.provider.read(ArtifactKind::CaKey)?;
        }
        check_consistency(&ca_cert, &host_cert, &host_key)
    }

    async fn rotate(&self) -> Result<(), CertificateError> {
        let bundle = self.produce_bundle().await?;
        let (host, ca) = check_consistency(&bundle.ca_cert, &bundle.host_cert, &bundle.host_key)?;
        self.provider.write_bundle(&bundle)?;
        self.generations.fetch_add(1, Ordering::SeqCst);
        let epoch = self.epoch.fetch_add(1, Ordering::SeqCst) + 1;
        info!(
            "[CERTIFICATE] Certificates rotated (epoch {epoch}), host valid until {}",
            host.not_after
        );
        self.record(CertificateState::Valid, Some((host, ca)));
        Ok(())
    }

    async fn produce_bundle(&self) -> Result<CertificateBundle, CertificateError> {
        if self.source == CertificateSource::local {
            return self.authority.generate_bundle();
        }
        let fetched = self.provider.fetch_remote().await.and_then(|bundle| {
            check_consistency(&bundle.ca_cert, &bundle.host_cert, &bundle.host_key)
                .map_err(|e| CertificateError::FetchError(format!("remote bundle is inconsistent: {e}")))?;
            Ok(bundle)
        });
        match fetched {
            Ok(bundle) => {
                info!("[CERTIFICATE] Fetched certificates from the remote issuer");
                Ok(bundle)
            }
            Err(e) if e.is_recoverable() && self.fallback_to_local => {
                warn!("[CERTIFICATE] Remote issuer unavailable ({e}), generating locally");
                self.authority.generate_bundle()
            }
            Err(e) => Err(e),
        }
    }

    fn record(&self, state: CertificateState, expiries: Option<(ParsedCertificate, ParsedCertificate)>) {
        let mut status = self.status.write();
        status.state = state;
        status.host_not_after = expiries.as_ref().map(|(host, _)| host.not_after);
        status.ca_not_after = expiries.as_ref().map(|(_, ca)| ca.not_after);
        status.checked_at = Some(Utc::now());
        status.generations = self.generations();
        status.epoch = self.epoch.load(Ordering::SeqCst);
    }
}

/// Host certificate issued and signed by the CA, host key matching the host
/// certificate.
fn check_consistency(ca_cert: &[u8], host_cert: &[u8], host_key: &[u8]) -> Result<(ParsedCertificate, ParsedCertificate), CertificateError> {
    let host = parse_certificate_pem(host_cert)?;
    let ca = parse_certificate_pem(ca_cert)?;
    verify_issued_by(&host, &ca)?;
    certified_key_from_pem(host_cert, host_key)?;
    Ok((host, ca))
}
