use std::sync::Arc;
use crate::config::structs::configuration::Configuration;
use crate::ssl::structs::certificate_manager::CertificateManager;
use crate::ssl::structs::certificate_store::CertificateStore;

pub struct HttpServiceData {
    pub config: Arc<Configuration>,
    pub manager: Arc<CertificateManager>,
    pub store: Arc<CertificateStore>,
}
