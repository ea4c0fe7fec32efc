use std::sync::atomic::AtomicU64;
use crate::ssl::structs::store_location::StoreLocation;

pub struct CertificateStore {
    pub(crate) location: StoreLocation,
    pub(crate) writes: AtomicU64,
}
