#[cfg(test)]
mod http_tests {
    use std::sync::Arc;
    use crate::config::structs::configuration::Configuration;
    use crate::http::http::http_validate_permission;
    use crate::http::structs::http_service_data::HttpServiceData;
    use crate::ssl::structs::certificate_manager::CertificateManager;
    use crate::ssl::structs::certificate_store::CertificateStore;

    fn service_data(secret: &str) -> HttpServiceData {
        let mut config = Configuration::init();
        config.certificates.password_permission_end_point = secret.to_string();
        let store = Arc::new(CertificateStore::from_config(&config.certificates));
        let manager = Arc::new(CertificateManager::from_config(&config, store.clone()).unwrap());
        HttpServiceData {
            config: Arc::new(config),
            manager,
            store,
        }
    }

    #[test]
    fn test_permission_accepts_encoded_secret() {
        let data = service_data("secret");
        assert!(http_validate_permission("c2VjcmV0", &data));
    }

    #[test]
    fn test_permission_rejects_plain_secret() {
        let data = service_data("secret");
        assert!(!http_validate_permission("secret", &data));
        assert!(!http_validate_permission("", &data));
    }

    #[test]
    fn test_permission_requires_configured_secret() {
        let data = service_data("");
        assert!(!http_validate_permission("", &data));
        assert!(!http_validate_permission(&data.config.certificates.permission_hash(), &data));
    }
}
