use std::net::SocketAddr;
use std::process::exit;
use std::sync::Arc;
use std::time::Duration;
use clap::Parser;
use log::{error, info, warn};
use tokio::runtime::Builder;
use tokio_shutdown::Shutdown;
use certkeeper::common::common::{create_folders, setup_logging};
use certkeeper::config::structs::configuration::Configuration;
use certkeeper::http::http::http_service;
use certkeeper::http::structs::http_service_data::HttpServiceData;
use certkeeper::ssl::enums::certificate_error::CertificateError;
use certkeeper::ssl::ssl::{bootstrap_certificates, create_server_config};
use certkeeper::ssl::structs::certificate_manager::CertificateManager;
use certkeeper::ssl::structs::certificate_store::CertificateStore;
use certkeeper::structs::Cli;

#[tracing::instrument(level = "debug")]
fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let config = match Configuration::load_from_file(&args.config, args.create_config) {
        Ok(config) => Arc::new(config),
        Err(_) => exit(101)
    };

    if let Err(error) = setup_logging(&config) {
        eprintln!("{error}");
        exit(1);
    }

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    if rustls::crypto::ring::default_provider().install_default().is_err() {
        error!("[BOOT] Unable to install the ring crypto provider");
        exit(1);
    }

    Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            if let Err(error) = create_folders(&config.folders) {
                error!("[BOOT] {error}");
                exit(1);
            }

            let store = Arc::new(CertificateStore::from_config(&config.certificates));
            let manager = match CertificateManager::from_config(&config, store.clone()) {
                Ok(manager) => Arc::new(manager),
                Err(error) => {
                    error!("[BOOT] Unable to set up certificate management: {error}");
                    exit(1);
                }
            };

            let interrupted = async {
                let _ = tokio::signal::ctrl_c().await;
            };
            match bootstrap_certificates(&manager, interrupted).await {
                Ok(state) => info!("[BOOT] Certificates verified (found {state})"),
                Err(CertificateError::Cancelled) => {
                    info!("Shutdown request received before the certificates were ready");
                    exit(130);
                }
                Err(error) => {
                    error!("[BOOT] Certificate bootstrap failed: {error}");
                    exit(1);
                }
            }

            if args.verify_only {
                info!("[BOOT] Verification only, exiting");
                return Ok(());
            }

            let tokio_shutdown = match Shutdown::new() {
                Ok(shutdown) => shutdown,
                Err(_) => {
                    error!("[BOOT] Unable to register the shutdown handler");
                    exit(1);
                }
            };

            let reload_handler = tokio_shutdown.clone();
            let reload_manager = manager.clone();
            let reload_interval = config.certificates.minutes_to_reload_certificate;
            info!("[BOOT] Starting thread for certificate checks with {reload_interval} minutes delay...");
            tokio::spawn(async move {
                let mut interval = tokio::time::interval(Duration::from_secs(reload_interval.max(1).saturating_mul(60)));
                interval.tick().await;
                loop {
                    tokio::select! {
                        _ = interval.tick() => {
                            reload_manager.verify_and_rotate().await;
                        }
                        _ = reload_handler.handle() => {
                            info!("[BOOT] Shutting down thread for certificate checks...");
                            return;
                        }
                    }
                }
            });

            let tls = if config.production || args.prod {
                match create_server_config(store.clone(), manager.epoch(), &config.tls) {
                    Ok(tls_config) => Some(tls_config),
                    Err(error) => {
                        error!("[BOOT] {error}");
                        exit(1);
                    }
                }
            } else {
                warn!("[BOOT] Development mode, the listener serves plain HTTP");
                None
            };

            let address: SocketAddr = match config.http_server.bind_address.parse() {
                Ok(address) => address,
                Err(error) => {
                    error!("[BOOT] Invalid bind address {}: {error}", config.http_server.bind_address);
                    exit(1);
                }
            };
            let data = Arc::new(HttpServiceData {
                config: config.clone(),
                manager: manager.clone(),
                store,
            });
            let (handle, server) = match http_service(address, data, config.http_server.clone(), tls) {
                Ok(service) => service,
                Err(error) => {
                    error!("[HTTP] {error}");
                    exit(1);
                }
            };
            let mut server_task = tokio::spawn(server);

            tokio::select! {
                _ = tokio::signal::ctrl_c() => {
                    info!("Shutdown request received, shutting down...");
                    handle.stop(true).await;
                    tokio_shutdown.handle().await;
                    let _ = server_task.await;
                }
                result = &mut server_task => {
                    match result {
                        Ok(Ok(())) => warn!("[HTTP] Server stopped"),
                        Ok(Err(error)) => error!("[HTTP] Server failed: {error}"),
                        Err(error) => error!("[HTTP] Server task failed: {error}"),
                    }
                }
            }

            info!("Server shutting down completed");
            Ok(())
        })
}
