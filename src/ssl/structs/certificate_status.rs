use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::ssl::enums::certificate_state::CertificateState;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct CertificateStatus {
    pub state: CertificateState,
    pub host_not_after: Option<DateTime<Utc>>,
    pub ca_not_after: Option<DateTime<Utc>>,
    pub checked_at: Option<DateTime<Utc>>,
    pub generations: u64,
    pub epoch: u64,
}
