use std::path::{Path, PathBuf};
use crate::config::structs::certificates_config::CertificatesConfig;
use crate::ssl::enums::artifact_kind::ArtifactKind;
use crate::ssl::enums::certificate_pair::CertificatePair;
use crate::ssl::structs::certificate_paths::CertificatePaths;
use crate::ssl::structs::store_location::StoreLocation;

impl StoreLocation {
    /// Host pair at `{folder}/{cert}` and `{folder}/{key}`, CA pair at the
    /// same names prefixed with `ca_`.
    pub fn new(folder: impl Into<PathBuf>, file_name_cert: &str, file_name_key: &str) -> Self {
        let folder = folder.into();
        StoreLocation {
            ca: CertificatePaths {
                cert_path: folder.join(format!("ca_{file_name_cert}")),
                key_path: folder.join(format!("ca_{file_name_key}")),
            },
            host: CertificatePaths {
                cert_path: folder.join(file_name_cert),
                key_path: folder.join(file_name_key),
            },
            folder,
        }
    }

    pub fn from_config(config: &CertificatesConfig) -> Self {
        Self::new(config.folder(), &config.file_name_cert, &config.file_name_key)
    }

    pub fn folder(&self) -> &Path {
        &self.folder
    }

    pub fn paths(&self, pair: CertificatePair) -> &CertificatePaths {
        match pair {
            CertificatePair::Ca => &self.ca,
            CertificatePair::Host => &self.host,
        }
    }

    pub fn path(&self, kind: ArtifactKind) -> &Path {
        let paths = self.paths(kind.pair());
        if kind.is_certificate() {
            &paths.cert_path
        } else {
            &paths.key_path
        }
    }
}
