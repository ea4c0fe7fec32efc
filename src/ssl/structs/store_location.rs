use std::path::PathBuf;
use serde::{Deserialize, Serialize};
use crate::ssl::structs::certificate_paths::CertificatePaths;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct StoreLocation {
    pub(crate) folder: PathBuf,
    pub(crate) ca: CertificatePaths,
    pub(crate) host: CertificatePaths,
}
