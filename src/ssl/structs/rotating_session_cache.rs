use std::sync::Arc;
use std::sync::atomic::AtomicU64;
use parking_lot::RwLock;
use rustls::server::ServerSessionMemoryCache;

pub struct RotatingSessionCache {
    pub(crate) epoch: Arc<AtomicU64>,
    pub(crate) loaded_epoch: AtomicU64,
    pub(crate) capacity: usize,
    pub(crate) cache: RwLock<Arc<ServerSessionMemoryCache>>,
}
