use std::sync::Arc;
use std::sync::atomic::AtomicU64;
use parking_lot::RwLock;
use rustls::crypto::CryptoProvider;
use rustls::server::danger::ClientCertVerifier;
use crate::ssl::structs::certificate_store::CertificateStore;

pub struct DynamicClientVerifier {
    pub(crate) store: Arc<CertificateStore>,
    pub(crate) epoch: Arc<AtomicU64>,
    pub(crate) provider: Arc<CryptoProvider>,
    pub(crate) mandatory: bool,
    pub(crate) loaded_epoch: AtomicU64,
    pub(crate) inner: RwLock<Option<Arc<dyn ClientCertVerifier>>>,
}
