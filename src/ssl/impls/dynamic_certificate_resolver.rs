use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use rustls::server::{ClientHello, ResolvesServerCert};
use rustls::sign::CertifiedKey;
use crate::ssl::enums::artifact_kind::ArtifactKind;
use crate::ssl::enums::certificate_error::CertificateError;
use crate::ssl::ssl::certified_key_from_pem;
use crate::ssl::structs::certificate_store::CertificateStore;
use crate::ssl::structs::dynamic_certificate_resolver::DynamicCertificateResolver;

impl std::fmt::Debug for DynamicCertificateResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DynamicCertificateResolver")
            .field("loaded_epoch", &self.loaded_epoch.load(Ordering::SeqCst))
            .field("has_cached_key", &self.cached_key.read().is_some())
            .finish()
    }
}

impl DynamicCertificateResolver {
    /// Fails unless the store already holds a usable host certificate.
    pub fn new(store: Arc<CertificateStore>, epoch: Arc<AtomicU64>) -> Result<Self, CertificateError> {
        let current = epoch.load(Ordering::SeqCst);
        let resolver = Self {
            store,
            epoch,
            loaded_epoch: AtomicU64::new(current),
            cached_key: parking_lot::RwLock::new(None),
        };
        resolver.refresh_cache()?;
        Ok(resolver)
    }

    pub fn refresh_cache(&self) -> Result<(), CertificateError> {
        let cert_pem = self.store.read(ArtifactKind::HostCert)?;
        let key_pem = self.store.read(ArtifactKind::HostKey)?;
        let certified_key = certified_key_from_pem(&cert_pem, &key_pem)?;
        *self.cached_key.write() = Some(Arc::new(certified_key));
        log::info!(
            "[CERTIFICATE] Refreshed server certificate cache from {}",
            self.store.location().folder().display()
        );
        Ok(())
    }

    pub fn has_certificate(&self) -> bool {
        self.cached_key.read().is_some()
    }

    /// Reloads when a rotation happened since the last successful load. A
    /// failed reload keeps serving the previous key and is retried on the
    /// next handshake.
    pub(crate) fn refresh_if_rotated(&self) {
        let current = self.epoch.load(Ordering::SeqCst);
        if self.loaded_epoch.load(Ordering::SeqCst) == current {
            return;
        }
        match self.refresh_cache() {
            Ok(()) => self.loaded_epoch.store(current, Ordering::SeqCst),
            Err(e) => log::warn!("[CERTIFICATE] Keeping previous server certificate, reload failed: {e}"),
        }
    }
}

impl ResolvesServerCert for DynamicCertificateResolver {
    fn resolve(&self, _client_hello: ClientHello<'_>) -> Option<Arc<CertifiedKey>> {
        self.refresh_if_rotated();
        self.cached_key.read().clone()
    }
}
