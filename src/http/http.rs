use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use actix_web::{App, HttpResponse, HttpServer, web};
use actix_web::dev::ServerHandle;
use actix_web::http::header::ContentType;
use actix_web::web::{Data, ServiceConfig};
use log::{debug, info, warn};
use serde_json::json;
use crate::common::common::equal_string_check;
use crate::common::structs::custom_error::CustomError;
use crate::config::structs::http_server_config::HttpServerConfig;
use crate::http::structs::http_service_data::HttpServiceData;
use crate::ssl::enums::artifact_kind::ArtifactKind;
use crate::ssl::enums::certificate_error::CertificateError;

pub fn http_service_routes(data: Arc<HttpServiceData>) -> Box<dyn Fn(&mut ServiceConfig)>
{
    Box::new(move |cfg: &mut ServiceConfig| {
        let api_version = data.config.api_version.clone();
        cfg.app_data(Data::new(data.clone()));
        cfg.service(web::resource("/health").route(web::get().to(http_service_health)));
        cfg.service(web::resource(format!("/api/{api_version}/certificates/status")).route(web::get().to(http_service_certificate_status)));
        if data.config.certificates.issuer_enabled {
            cfg.service(web::resource(format!("/api/{api_version}/certificates/ca/{{hash:.*}}")).route(web::get().to(http_service_certificate_ca)));
            cfg.service(web::resource(format!("/api/{api_version}/certificates/host/{{hash:.*}}")).route(web::get().to(http_service_certificate_host)));
            cfg.service(web::resource(format!("/api/{api_version}/certificates/host-key/{{hash:.*}}")).route(web::get().to(http_service_certificate_host_key)));
        }
        cfg.default_service(web::route().to(http_service_not_found));
    })
}

/// Builds the listener. With `tls` set it binds HTTPS, otherwise plain HTTP.
pub fn http_service(
    addr: SocketAddr,
    data: Arc<HttpServiceData>,
    server_config: HttpServerConfig,
    tls: Option<rustls::ServerConfig>,
) -> Result<(ServerHandle, impl Future<Output=Result<(), std::io::Error>>), CustomError>
{
    let app_data = data.clone();
    let server = HttpServer::new(move || {
        App::new().configure(http_service_routes(app_data.clone()))
    })
        .keep_alive(Duration::from_secs(server_config.keep_alive))
        .client_request_timeout(Duration::from_secs(server_config.request_timeout))
        .client_disconnect_timeout(Duration::from_secs(server_config.disconnect_timeout))
        .max_connections(server_config.max_connections as usize)
        .shutdown_timeout(server_config.shutdown_timeout)
        .workers(server_config.threads.max(1) as usize);

    let server = match tls {
        Some(tls_config) => {
            info!("[HTTP] Starting server listener with TLS on {}", addr);
            server.bind_rustls_0_23((addr.ip(), addr.port()), tls_config)
        }
        None => {
            info!("[HTTP] Starting server listener on {}", addr);
            server.bind((addr.ip(), addr.port()))
        }
    }
        .map_err(|e| CustomError::new(&format!("unable to bind {addr}: {e}")))?
        .disable_signals()
        .run();

    Ok((server.handle(), server))
}

#[tracing::instrument(level = "debug", skip_all)]
pub async fn http_service_health() -> HttpResponse
{
    HttpResponse::Ok().content_type(ContentType::json()).json(json!({"status": "ok"}))
}

#[tracing::instrument(level = "debug", skip_all)]
pub async fn http_service_certificate_status(data: Data<Arc<HttpServiceData>>) -> HttpResponse
{
    let status = data.manager.status();
    HttpResponse::Ok().content_type(ContentType::json()).json(json!({
        "state": status.state.to_string(),
        "host_not_after": status.host_not_after,
        "ca_not_after": status.ca_not_after,
        "checked_at": status.checked_at,
        "generations": status.generations,
        "epoch": status.epoch,
    }))
}

#[tracing::instrument(level = "debug", skip_all)]
pub async fn http_service_certificate_ca(path: web::Path<String>, data: Data<Arc<HttpServiceData>>) -> HttpResponse
{
    http_service_serve_artifact(path.into_inner(), data, ArtifactKind::CaCert)
}

#[tracing::instrument(level = "debug", skip_all)]
pub async fn http_service_certificate_host(path: web::Path<String>, data: Data<Arc<HttpServiceData>>) -> HttpResponse
{
    http_service_serve_artifact(path.into_inner(), data, ArtifactKind::HostCert)
}

#[tracing::instrument(level = "debug", skip_all)]
pub async fn http_service_certificate_host_key(path: web::Path<String>, data: Data<Arc<HttpServiceData>>) -> HttpResponse
{
    http_service_serve_artifact(path.into_inner(), data, ArtifactKind::HostKey)
}

pub fn http_service_serve_artifact(hash: String, data: Data<Arc<HttpServiceData>>, kind: ArtifactKind) -> HttpResponse
{
    if !http_validate_permission(&hash, &data) {
        warn!("[HTTP] Rejected request for {} with an invalid permission hash", kind);
        return HttpResponse::Unauthorized().content_type(ContentType::json()).json(json!({"status": "unauthorized"}));
    }
    match data.store.read(kind) {
        Ok(bytes) => {
            debug!("[HTTP] Serving {}", kind);
            HttpResponse::Ok().content_type("application/x-pem-file").body(bytes)
        }
        Err(CertificateError::NotFound(_)) => {
            HttpResponse::NotFound().content_type(ContentType::json()).json(json!({"status": format!("{kind} not available")}))
        }
        Err(e) => {
            warn!("[HTTP] Unable to serve {}: {}", kind, e);
            HttpResponse::ServiceUnavailable().content_type(ContentType::json()).json(json!({"status": format!("{kind} unreadable")}))
        }
    }
}

pub fn http_validate_permission(hash: &str, data: &HttpServiceData) -> bool
{
    let certificates = &data.config.certificates;
    !certificates.password_permission_end_point.is_empty()
        && equal_string_check(hash, &certificates.permission_hash())
}

pub async fn http_service_not_found() -> HttpResponse
{
    HttpResponse::NotFound().content_type(ContentType::json()).json(json!({"status": "not found"}))
}
