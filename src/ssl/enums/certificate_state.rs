use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Hash, Eq, PartialEq, Default)]
pub enum CertificateState {
    #[default]
    Unverified,
    Valid,
    Missing,
    Expiring,
    Corrupt,
}
