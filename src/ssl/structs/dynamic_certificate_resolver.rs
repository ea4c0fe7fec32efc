use std::sync::Arc;
use std::sync::atomic::AtomicU64;
use parking_lot::RwLock;
use crate::ssl::structs::certificate_store::CertificateStore;

pub struct DynamicCertificateResolver {
    pub(crate) store: Arc<CertificateStore>,
    pub(crate) epoch: Arc<AtomicU64>,
    pub(crate) loaded_epoch: AtomicU64,
    pub(crate) cached_key: RwLock<Option<Arc<rustls::sign::CertifiedKey>>>,
}
