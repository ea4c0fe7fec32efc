use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use log::debug;
use rustls::server::{ServerSessionMemoryCache, StoresServerSessions};
use crate::ssl::structs::rotating_session_cache::RotatingSessionCache;

impl std::fmt::Debug for RotatingSessionCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingSessionCache")
            .field("capacity", &self.capacity)
            .field("loaded_epoch", &self.loaded_epoch.load(Ordering::SeqCst))
            .finish()
    }
}

impl RotatingSessionCache {
    pub fn new(epoch: Arc<AtomicU64>, capacity: usize) -> Self {
        let current = epoch.load(Ordering::SeqCst);
        Self {
            epoch,
            loaded_epoch: AtomicU64::new(current),
            capacity,
            cache: parking_lot::RwLock::new(ServerSessionMemoryCache::new(capacity)),
        }
    }

    /// Sessions negotiated before a rotation carry the previous certificates
    /// and must not be resumed, so the cache is dropped when the epoch moves.
    fn current(&self) -> Arc<ServerSessionMemoryCache> {
        let epoch = self.epoch.load(Ordering::SeqCst);
        if self.loaded_epoch.load(Ordering::SeqCst) != epoch {
            let mut cache = self.cache.write();
            if self.loaded_epoch.load(Ordering::SeqCst) != epoch {
                *cache = ServerSessionMemoryCache::new(self.capacity);
                self.loaded_epoch.store(epoch, Ordering::SeqCst);
                debug!("[TLS] Session cache cleared after rotation (epoch {epoch})");
            }
        }
        self.cache.read().clone()
    }
}

impl StoresServerSessions for RotatingSessionCache {
    fn put(&self, key: Vec<u8>, value: Vec<u8>) -> bool {
        self.current().put(key, value)
    }

    fn get(&self, key: &[u8]) -> Option<Vec<u8>> {
        self.current().get(key)
    }

    fn take(&self, key: &[u8]) -> Option<Vec<u8>> {
        self.current().take(key)
    }

    fn can_cache(&self) -> bool {
        true
    }
}
