use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use log::{info, warn};
use rustls::client::danger::HandshakeSignatureValid;
use rustls::crypto::CryptoProvider;
use rustls::pki_types::{CertificateDer, UnixTime};
use rustls::server::WebPkiClientVerifier;
use rustls::server::danger::{ClientCertVerified, ClientCertVerifier};
use rustls::{DigitallySignedStruct, DistinguishedName, SignatureScheme};
use crate::ssl::structs::certificate_store::CertificateStore;
use crate::ssl::structs::dynamic_client_verifier::DynamicClientVerifier;

impl std::fmt::Debug for DynamicClientVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DynamicClientVerifier")
            .field("mandatory", &self.mandatory)
            .field("loaded_epoch", &self.loaded_epoch.load(Ordering::SeqCst))
            .field("has_roots", &self.inner.read().is_some())
            .finish()
    }
}

impl DynamicClientVerifier {
    pub fn new(
        store: Arc<CertificateStore>,
        epoch: Arc<AtomicU64>,
        provider: Arc<CryptoProvider>,
        mandatory: bool,
    ) -> Self {
        let current = epoch.load(Ordering::SeqCst);
        let verifier = Self {
            store,
            epoch,
            provider,
            mandatory,
            loaded_epoch: AtomicU64::new(current),
            inner: parking_lot::RwLock::new(None),
        };
        verifier.rebuild();
        verifier
    }

    /// True when the trust pool holds at least one CA.
    pub fn has_roots(&self) -> bool {
        self.inner.read().is_some()
    }

    /// Rebuilds the WebPKI verifier from the store's trust pool. An empty
    /// pool leaves no verifier, and every client certificate is rejected.
    /// Returns whether a verifier was built.
    pub fn rebuild(&self) -> bool {
        let roots = self.store.trust_pool();
        if roots.is_empty() {
            warn!("[TLS] Client trust pool is empty, client certificates will be rejected");
            *self.inner.write() = None;
            return false;
        }
        let builder = WebPkiClientVerifier::builder_with_provider(Arc::new(roots), self.provider.clone());
        let builder = if self.mandatory { builder } else { builder.allow_unauthenticated() };
        match builder.build() {
            Ok(verifier) => {
                info!("[TLS] Client trust pool loaded");
                *self.inner.write() = Some(verifier);
                true
            }
            Err(e) => {
                warn!("[TLS] Unable to build client verifier: {e}");
                *self.inner.write() = None;
                false
            }
        }
    }

    /// Rebuilds after a rotation, and keeps retrying while no verifier
    /// could be built.
    pub(crate) fn current(&self) -> Option<Arc<dyn ClientCertVerifier>> {
        let epoch = self.epoch.load(Ordering::SeqCst);
        let stale = self.loaded_epoch.load(Ordering::SeqCst) != epoch || self.inner.read().is_none();
        if stale && self.rebuild() {
            self.loaded_epoch.store(epoch, Ordering::SeqCst);
        }
        self.inner.read().clone()
    }
}

impl ClientCertVerifier for DynamicClientVerifier {
    fn client_auth_mandatory(&self) -> bool {
        self.mandatory
    }

    fn root_hint_subjects(&self) -> &[DistinguishedName] {
        &[]
    }

    fn verify_client_cert(
        &self,
        end_entity: &CertificateDer<'_>,
        intermediates: &[CertificateDer<'_>],
        now: UnixTime,
    ) -> Result<ClientCertVerified, rustls::Error> {
        match self.current() {
            Some(verifier) => verifier.verify_client_cert(end_entity, intermediates, now),
            None => Err(rustls::Error::InvalidCertificate(rustls::CertificateError::UnknownIssuer)),
        }
    }

    fn verify_tls12_signature(
        &self,
        message: &[u8],
        cert: &CertificateDer<'_>,
        dss: &DigitallySignedStruct,
    ) -> Result<HandshakeSignatureValid, rustls::Error> {
        rustls::crypto::verify_tls12_signature(message, cert, dss, &self.provider.signature_verification_algorithms)
    }

    fn verify_tls13_signature(
        &self,
        message: &[u8],
        cert: &CertificateDer<'_>,
        dss: &DigitallySignedStruct,
    ) -> Result<HandshakeSignatureValid, rustls::Error> {
        rustls::crypto::verify_tls13_signature(message, cert, dss, &self.provider.signature_verification_algorithms)
    }

    fn supported_verify_schemes(&self) -> Vec<SignatureScheme> {
        self.provider.signature_verification_algorithms.supported_schemes()
    }
}
