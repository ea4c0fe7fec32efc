mod common;

use std::sync::Arc;
use actix_web::dev::ServerHandle;
use certkeeper::config::enums::certificate_source::CertificateSource;
use certkeeper::config::structs::http_server_config::HttpServerConfig;
use certkeeper::http::http::http_service;
use certkeeper::http::structs::http_service_data::HttpServiceData;
use certkeeper::ssl::enums::certificate_error::CertificateError;
use certkeeper::ssl::enums::certificate_state::CertificateState;
use certkeeper::ssl::ssl::create_server_config;
use certkeeper::ssl::structs::remote_fetcher::RemoteFetcher;

fn server_config() -> HttpServerConfig {
    HttpServerConfig {
        threads: 1,
        shutdown_timeout: 1,
        ..HttpServerConfig::default()
    }
}

/// Boots an issuing instance with fresh material and returns its base URL.
async fn start_issuer(tls: bool) -> (common::TestEnvironment, ServerHandle, String) {
    let env = common::create_test_environment_with(|config| {
        config.certificates.issuer_enabled = true;
        config.tls.client_auth = certkeeper::config::enums::client_auth::ClientAuth::optional;
    });
    env.manager.check_and_rotate().await.unwrap();
    let data = Arc::new(HttpServiceData {
        config: Arc::new(env.config.clone()),
        manager: env.manager.clone(),
        store: env.store.clone(),
    });
    let tls_config = match tls {
        true => Some(create_server_config(env.store.clone(), env.manager.epoch(), &env.config.tls).unwrap()),
        false => None,
    };
    let addr = common::free_local_address();
    let (handle, server) = http_service(addr, data, server_config(), tls_config).unwrap();
    actix_web::rt::spawn(server);
    let scheme = if tls { "https" } else { "http" };
    (env, handle, format!("{scheme}://{addr}/api/v1/certificates"))
}

/// Accepts connections and never answers them.
async fn start_silent_issuer() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    actix_web::rt::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });
    format!("http://{addr}/api/v1/certificates")
}

fn remote_environment(base_url: &str, secret: &str, fallback_to_local: bool) -> common::TestEnvironment {
    let base_url = base_url.to_string();
    let secret = secret.to_string();
    common::create_test_environment_with(move |config| {
        config.certificates.source = CertificateSource::remote;
        config.certificates.fallback_to_local = fallback_to_local;
        config.certificates.password_permission_end_point = secret;
        config.certificates.end_point_get_certificate_ca = format!("{base_url}/ca");
        config.certificates.end_point_get_certificate_host = format!("{base_url}/host");
        config.certificates.end_point_get_certificate_host_key = format!("{base_url}/host-key");
        config.certificates.fetch_timeout_seconds = 2;
    })
}

#[actix_web::test]
async fn test_fetcher_downloads_artifacts() {
    let (issuer, handle, base_url) = start_issuer(false).await;
    let fetcher = RemoteFetcher::new(
        &format!("{base_url}/ca"),
        &format!("{base_url}/host/"),
        &format!("{base_url}/host-key"),
        &issuer.config.certificates.permission_hash(),
        std::time::Duration::from_secs(2),
    ).unwrap();

    assert_eq!(fetcher.fetch_ca().await.unwrap(), common::read_file(&issuer.path("ca_cert.pem")));
    assert_eq!(fetcher.fetch_host_cert().await.unwrap(), common::read_file(&issuer.path("cert.pem")));
    assert_eq!(fetcher.fetch_host_key().await.unwrap(), common::read_file(&issuer.path("key.pem")));
    assert!(!format!("{fetcher:?}").contains(&issuer.config.certificates.permission_hash()));

    handle.stop(true).await;
}

#[actix_web::test]
async fn test_remote_bootstrap_over_plain_http() {
    let (issuer, handle, base_url) = start_issuer(false).await;
    let client = remote_environment(&base_url, common::TEST_SECRET, false);

    let state = client.manager.check_and_rotate().await.unwrap();

    assert_eq!(state, CertificateState::Missing);
    assert_eq!(common::read_file(&client.path("ca_cert.pem")), common::read_file(&issuer.path("ca_cert.pem")));
    assert_eq!(common::read_file(&client.path("cert.pem")), common::read_file(&issuer.path("cert.pem")));
    assert_eq!(common::read_file(&client.path("key.pem")), common::read_file(&issuer.path("key.pem")));
    assert!(!client.path("ca_key.pem").exists());
    assert_eq!(client.manager.check_and_rotate().await.unwrap(), CertificateState::Valid);

    handle.stop(true).await;
}

#[actix_web::test]
async fn test_remote_bootstrap_over_unverified_tls() {
    let (issuer, handle, base_url) = start_issuer(true).await;
    let client = remote_environment(&base_url, common::TEST_SECRET, false);

    assert_eq!(client.manager.check_and_rotate().await.unwrap(), CertificateState::Missing);
    assert_eq!(common::read_file(&client.path("cert.pem")), common::read_file(&issuer.path("cert.pem")));

    handle.stop(true).await;
}

#[actix_web::test]
async fn test_wrong_secret_without_fallback_fails() {
    let (_issuer, handle, base_url) = start_issuer(false).await;
    let client = remote_environment(&base_url, "wrong", false);

    let result = client.manager.check_and_rotate().await;

    assert!(matches!(result, Err(CertificateError::FetchError(_))));
    assert!(!client.path("cert.pem").exists());
    assert_eq!(client.store.writes(), 0);

    handle.stop(true).await;
}

#[actix_web::test]
async fn test_wrong_secret_with_fallback_generates_locally() {
    let (issuer, handle, base_url) = start_issuer(false).await;
    let client = remote_environment(&base_url, "wrong", true);

    assert_eq!(client.manager.check_and_rotate().await.unwrap(), CertificateState::Missing);
    assert!(client.path("ca_key.pem").is_file());
    assert_ne!(common::read_file(&client.path("ca_cert.pem")), common::read_file(&issuer.path("ca_cert.pem")));

    handle.stop(true).await;
}

#[actix_web::test]
async fn test_unreachable_issuer_with_fallback() {
    let addr = common::free_local_address();
    let client = remote_environment(&format!("http://{addr}/api/v1/certificates"), common::TEST_SECRET, true);

    assert_eq!(client.manager.check_and_rotate().await.unwrap(), CertificateState::Missing);
    assert_eq!(client.store.writes(), 4);
}

#[actix_web::test]
async fn test_silent_issuer_times_out() {
    let base_url = start_silent_issuer().await;
    let fetcher = RemoteFetcher::new(
        &format!("{base_url}/ca"),
        &format!("{base_url}/host"),
        &format!("{base_url}/host-key"),
        "c2VjcmV0",
        std::time::Duration::from_secs(1),
    ).unwrap();

    let started = std::time::Instant::now();
    let result = fetcher.fetch_ca().await;

    assert!(matches!(result, Err(CertificateError::FetchError(_))));
    assert!(started.elapsed() >= std::time::Duration::from_millis(900));
    assert!(started.elapsed() < std::time::Duration::from_secs(5));
}

#[actix_web::test]
async fn test_silent_issuer_with_fallback_generates_locally() {
    let base_url = start_silent_issuer().await;
    let client = remote_environment(&base_url, common::TEST_SECRET, true);

    let started = std::time::Instant::now();
    let state = client.manager.check_and_rotate().await.unwrap();

    assert_eq!(state, CertificateState::Missing);
    assert!(started.elapsed() < std::time::Duration::from_secs(10));
    assert!(client.path("ca_key.pem").is_file());
    assert_eq!(client.store.writes(), 4);
}

#[actix_web::test]
async fn test_silent_issuer_without_fallback_fails() {
    let base_url = start_silent_issuer().await;
    let client = remote_environment(&base_url, common::TEST_SECRET, false);

    let result = client.manager.check_and_rotate().await;

    assert!(matches!(result, Err(CertificateError::FetchError(_))));
    assert_eq!(client.store.writes(), 0);
}
