use std::sync::Arc;
use crate::ssl::structs::certificate_store::CertificateStore;
use crate::ssl::structs::remote_fetcher::RemoteFetcher;

pub struct CertificateService {
    pub(crate) store: Arc<CertificateStore>,
    pub(crate) fetcher: Option<RemoteFetcher>,
}
