use crate::config::enums::client_auth::ClientAuth;

impl ClientAuth {
    pub fn is_mandatory(&self) -> bool {
        matches!(self, ClientAuth::required)
    }
}
