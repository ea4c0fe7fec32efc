#![allow(dead_code)]
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use certkeeper::config::structs::configuration::Configuration;
use certkeeper::ssl::structs::certificate_manager::CertificateManager;
use certkeeper::ssl::structs::certificate_store::CertificateStore;
use tempfile::TempDir;

pub const TEST_SECRET: &str = "secret";

pub struct TestEnvironment {
    pub dir: TempDir,
    pub config: Configuration,
    pub store: Arc<CertificateStore>,
    pub manager: Arc<CertificateManager>,
}

impl TestEnvironment {
    pub fn path(&self, file: &str) -> std::path::PathBuf {
        self.dir.path().join(file)
    }
}

pub fn install_crypto_provider() {
    let _ = rustls::crypto::ring::default_provider().install_default();
}

pub fn create_test_config(folder: &Path) -> Configuration {
    let mut config = Configuration::init();
    config.certificates.folder_name = folder.to_string_lossy().to_string();
    config.certificates.password_permission_end_point = TEST_SECRET.to_string();
    config.folders = vec![config.certificates.folder_name.clone()];
    config
}

pub fn create_test_environment() -> TestEnvironment {
    create_test_environment_with(|_| {})
}

pub fn create_test_environment_with(configure: impl FnOnce(&mut Configuration)) -> TestEnvironment {
    install_crypto_provider();
    let dir = tempfile::tempdir().unwrap();
    let mut config = create_test_config(dir.path());
    configure(&mut config);
    let store = Arc::new(CertificateStore::from_config(&config.certificates));
    let manager = Arc::new(CertificateManager::from_config(&config, store.clone()).unwrap());
    TestEnvironment {
        dir,
        config,
        store,
        manager,
    }
}

/// An address on the loopback interface that nothing is bound to right now.
pub fn free_local_address() -> SocketAddr {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap()
}

pub fn read_file(path: &Path) -> Vec<u8> {
    std::fs::read(path).unwrap()
}
