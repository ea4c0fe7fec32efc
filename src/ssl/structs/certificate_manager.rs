use std::sync::Arc;
use std::sync::atomic::AtomicU64;
use parking_lot::RwLock;
use crate::config::enums::certificate_source::CertificateSource;
use crate::ssl::structs::certificate_status::CertificateStatus;
use crate::ssl::traits::certificate_authority::CertificateAuthority;
use crate::ssl::traits::certificate_provider::CertificateProvider;

pub struct CertificateManager {
    pub(crate) provider: Arc<dyn CertificateProvider>,
    pub(crate) authority: Arc<dyn CertificateAuthority>,
    pub(crate) source: CertificateSource,
    pub(crate) fallback_to_local: bool,
    pub(crate) rotation_threshold: chrono::Duration,
    pub(crate) rotation_lock: tokio::sync::Mutex<()>,
    pub(crate) epoch: Arc<AtomicU64>,
    pub(crate) generations: AtomicU64,
    pub(crate) status: RwLock<CertificateStatus>,
}
