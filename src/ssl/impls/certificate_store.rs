use std::io::Write;
use std::sync::atomic::{AtomicU64, Ordering};
use log::{debug, warn};
use rustls::RootCertStore;
use rustls::pki_types::PrivateKeyDer;
use tempfile::NamedTempFile;
use crate::common::common::file_exists;
use crate::config::structs::certificates_config::CertificatesConfig;
use crate::ssl::enums::artifact_kind::ArtifactKind;
use crate::ssl::enums::certificate_error::CertificateError;
use crate::ssl::enums::certificate_pair::CertificatePair;
use crate::ssl::ssl::{decode_certificates, decode_private_key, parse_certificate_der};
use crate::ssl::structs::certificate_bundle::CertificateBundle;
use crate::ssl::structs::certificate_paths::CertificatePaths;
use crate::ssl::structs::certificate_store::CertificateStore;
use crate::ssl::structs::parsed_certificate::ParsedCertificate;
use crate::ssl::structs::store_location::StoreLocation;

impl std::fmt::Debug for CertificateStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CertificateStore")
            .field("folder", &self.location.folder)
            .field("writes", &self.writes())
            .finish()
    }
}

impl CertificateStore {
    pub fn new(location: StoreLocation) -> Self {
        Self {
            location,
            writes: AtomicU64::new(0),
        }
    }

    pub fn from_config(config: &CertificatesConfig) -> Self {
        Self::new(StoreLocation::from_config(config))
    }

    pub fn location(&self) -> &StoreLocation {
        &self.location
    }

    pub fn paths(&self, pair: CertificatePair) -> &CertificatePaths {
        self.location.paths(pair)
    }

    /// Number of artifacts written since the store was created.
    pub fn writes(&self) -> u64 {
        self.writes.load(Ordering::SeqCst)
    }

    /// True iff both files of the pair exist.
    pub fn exists(&self, pair: CertificatePair) -> bool {
        let paths = self.location.paths(pair);
        file_exists(&paths.cert_path) && file_exists(&paths.key_path)
    }

    pub fn artifact_exists(&self, kind: ArtifactKind) -> bool {
        file_exists(self.location.path(kind))
    }

    /// Persists `bytes` through a temporary file in the store folder and an
    /// atomic rename. The folder must already exist.
    pub fn write(&self, kind: ArtifactKind, bytes: &[u8]) -> Result<(), CertificateError> {
        let target = self.location.path(kind);
        let mut file = NamedTempFile::new_in(&self.location.folder)
            .map_err(|e| CertificateError::IoError(format!("{}: {}", self.location.folder.display(), e)))?;
        file.write_all(bytes)
            .and_then(|_| file.as_file().sync_all())
            .map_err(|e| CertificateError::IoError(format!("{}: {}", file.path().display(), e)))?;
        if kind.is_certificate() {
            set_certificate_permissions(file.as_file())
                .map_err(|e| CertificateError::IoError(format!("{}: {}", file.path().display(), e)))?;
        }
        file.persist(target)
            .map_err(|e| CertificateError::IoError(format!("{}: {}", target.display(), e.error)))?;
        self.writes.fetch_add(1, Ordering::SeqCst);
        debug!("[CERTIFICATE] Wrote {} to {}", kind, target.display());
        Ok(())
    }

    /// Raw PEM bytes, checked to decode (and for certificates, to parse)
    /// as the kind they are stored under.
    pub fn read(&self, kind: ArtifactKind) -> Result<Vec<u8>, CertificateError> {
        let path = self.location.path(kind);
        let bytes = match std::fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(CertificateError::NotFound(path.display().to_string()));
            }
            Err(e) => return Err(CertificateError::IoError(format!("{}: {}", path.display(), e))),
        };
        if kind.is_certificate() {
            let certs = decode_certificates(&bytes)?;
            parse_certificate_der(certs[0].as_ref())?;
        } else {
            decode_private_key(&bytes)?;
        }
        Ok(bytes)
    }

    pub fn read_certificate(&self, kind: ArtifactKind) -> Result<ParsedCertificate, CertificateError> {
        let bytes = self.read(kind)?;
        let certs = decode_certificates(&bytes)?;
        parse_certificate_der(certs[0].as_ref())
    }

    pub fn read_private_key(&self, kind: ArtifactKind) -> Result<PrivateKeyDer<'static>, CertificateError> {
        let bytes = self.read(kind)?;
        decode_private_key(&bytes)
    }

    /// Writes CA cert, CA key, host cert, host key in that order. A missing
    /// CA key in the bundle leaves the CA key file untouched.
    pub fn write_bundle(&self, bundle: &CertificateBundle) -> Result<(), CertificateError> {
        self.write(ArtifactKind::CaCert, &bundle.ca_cert)?;
        if let Some(ca_key) = &bundle.ca_key {
            self.write(ArtifactKind::CaKey, ca_key)?;
        }
        self.write(ArtifactKind::HostCert, &bundle.host_cert)?;
        self.write(ArtifactKind::HostKey, &bundle.host_key)?;
        Ok(())
    }

    /// Roots built from the CA certificate file. Empty when the file is
    /// absent or holds nothing usable.
    pub fn trust_pool(&self) -> RootCertStore {
        let mut roots = RootCertStore::empty();
        let bytes = match std::fs::read(&self.location.ca.cert_path) {
            Ok(bytes) => bytes,
            Err(_) => return roots,
        };
        match decode_certificates(&bytes) {
            Ok(certs) => {
                let (added, ignored) = roots.add_parsable_certificates(certs);
                if ignored > 0 {
                    warn!("[CERTIFICATE] Ignored {ignored} unusable CA certificates ({added} added)");
                }
            }
            Err(e) => warn!("[CERTIFICATE] CA certificate unusable for the trust pool: {e}"),
        }
        roots
    }
}

/// Certificates are world-readable; keys keep the owner-only mode of the
/// temporary file.
#[cfg(unix)]
fn set_certificate_permissions(file: &std::fs::File) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    file.set_permissions(std::fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn set_certificate_permissions(_file: &std::fs::File) -> std::io::Result<()> {
    Ok(())
}
