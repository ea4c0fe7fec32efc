use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub enum ArtifactKind {
    CaCert,
    CaKey,
    HostCert,
    HostKey,
}
