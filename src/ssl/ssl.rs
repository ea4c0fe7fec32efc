use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::AtomicU64;
use chrono::{DateTime, Utc};
use log::info;
use pem::{EncodeConfig, LineEnding, Pem};
use rustls::crypto::CryptoProvider;
use rustls::pki_types::{CertificateDer, PrivateKeyDer};
use rustls::sign::CertifiedKey;
use rustls::{ServerConfig, SupportedCipherSuite};
use x509_parser::prelude::{FromDer, X509Certificate};
use crate::config::structs::tls_config::TlsConfig;
use crate::ssl::enums::certificate_error::CertificateError;
use crate::ssl::enums::certificate_state::CertificateState;
use crate::ssl::structs::certificate_manager::CertificateManager;
use crate::ssl::structs::certificate_store::CertificateStore;
use crate::ssl::structs::dynamic_certificate_resolver::DynamicCertificateResolver;
use crate::ssl::structs::dynamic_client_verifier::DynamicClientVerifier;
use crate::ssl::structs::parsed_certificate::ParsedCertificate;
use crate::ssl::structs::rotating_session_cache::RotatingSessionCache;

const SESSION_CACHE_SIZE: usize = 256;

pub fn certificate_to_pem(der: &[u8]) -> String {
    encode_pem("CERTIFICATE", der)
}

pub fn private_key_to_pem(pkcs8_der: &[u8]) -> String {
    encode_pem("PRIVATE KEY", pkcs8_der)
}

fn encode_pem(tag: &str, contents: &[u8]) -> String {
    pem::encode_config(
        &Pem::new(tag, contents.to_vec()),
        EncodeConfig::new().set_line_ending(LineEnding::LF),
    )
}

/// Every certificate found in a PEM document, in order.
pub fn decode_certificates(pem_bytes: &[u8]) -> Result<Vec<CertificateDer<'static>>, CertificateError> {
    let certs = rustls_pemfile::certs(&mut &pem_bytes[..])
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| CertificateError::DecodeError(e.to_string()))?;
    if certs.is_empty() {
        return Err(CertificateError::DecodeError(String::from("no certificate found in PEM data")));
    }
    Ok(certs)
}

/// First private key in a PEM document (PKCS#8, PKCS#1 or SEC1).
pub fn decode_private_key(pem_bytes: &[u8]) -> Result<PrivateKeyDer<'static>, CertificateError> {
    rustls_pemfile::private_key(&mut &pem_bytes[..])
        .map_err(|e| CertificateError::DecodeError(e.to_string()))?
        .ok_or_else(|| CertificateError::DecodeError(String::from("no private key found in PEM data")))
}

pub fn parse_certificate_der(der: &[u8]) -> Result<ParsedCertificate, CertificateError> {
    let (_, cert) = X509Certificate::from_der(der)
        .map_err(|e| CertificateError::ParseError(e.to_string()))?;
    let validity = cert.validity();
    Ok(ParsedCertificate {
        subject: cert.subject().to_string(),
        issuer: cert.issuer().to_string(),
        serial: cert.raw_serial_as_string(),
        not_before: timestamp_to_datetime(validity.not_before.timestamp())?,
        not_after: timestamp_to_datetime(validity.not_after.timestamp())?,
        is_ca: cert.is_ca(),
        public_key: cert.public_key().raw.to_vec(),
        der: der.to_vec(),
    })
}

pub fn parse_certificate_pem(pem_bytes: &[u8]) -> Result<ParsedCertificate, CertificateError> {
    let certs = decode_certificates(pem_bytes)?;
    parse_certificate_der(certs[0].as_ref())
}

fn timestamp_to_datetime(timestamp: i64) -> Result<DateTime<Utc>, CertificateError> {
    DateTime::<Utc>::from_timestamp(timestamp, 0)
        .ok_or_else(|| CertificateError::ParseError(format!("validity timestamp {timestamp} out of range")))
}

/// Checks that `host` names `ca` as issuer and carries a signature made by
/// the CA's key.
pub fn verify_issued_by(host: &ParsedCertificate, ca: &ParsedCertificate) -> Result<(), CertificateError> {
    if host.issuer != ca.subject {
        return Err(CertificateError::InvalidCaError(format!(
            "host issuer \"{}\" does not match CA subject \"{}\"",
            host.issuer, ca.subject
        )));
    }
    let (_, host_x509) = X509Certificate::from_der(&host.der)
        .map_err(|e| CertificateError::ParseError(e.to_string()))?;
    let (_, ca_x509) = X509Certificate::from_der(&ca.der)
        .map_err(|e| CertificateError::ParseError(e.to_string()))?;
    host_x509
        .verify_signature(Some(ca_x509.public_key()))
        .map_err(|e| CertificateError::InvalidCaError(format!("host signature does not verify against the CA key: {e}")))
}

/// Certificate chain and signing key ready for rustls. A key that does not
/// belong to the leaf certificate is rejected.
pub fn certified_key_from_pem(cert_pem: &[u8], key_pem: &[u8]) -> Result<CertifiedKey, CertificateError> {
    let certs = decode_certificates(cert_pem)?;
    let key = decode_private_key(key_pem)?;
    let signing_key = rustls::crypto::ring::sign::any_supported_type(&key)
        .map_err(|e| CertificateError::CertifiedKeyError(format!("{}", e)))?;
    let certified_key = CertifiedKey::new(certs, signing_key);
    match certified_key.keys_match() {
        Ok(()) | Err(rustls::Error::InconsistentKeys(rustls::InconsistentKeys::Unknown)) => Ok(certified_key),
        Err(e) => Err(CertificateError::CertifiedKeyError(e.to_string())),
    }
}

/// Resolves cipher-suite names against the ring provider, keeping the given
/// order. An empty list selects the provider defaults.
pub fn select_cipher_suites(names: &[String]) -> Result<Vec<SupportedCipherSuite>, CertificateError> {
    if names.is_empty() {
        return Ok(rustls::crypto::ring::DEFAULT_CIPHER_SUITES.to_vec());
    }
    let mut suites: Vec<SupportedCipherSuite> = Vec::with_capacity(names.len());
    for name in names {
        let suite = rustls::crypto::ring::ALL_CIPHER_SUITES
            .iter()
            .find(|suite| format!("{:?}", suite.suite()) == *name)
            .ok_or_else(|| CertificateError::TlsConfigError(format!("unknown cipher suite {name}")))?;
        if !suites.iter().any(|s| s.suite() == suite.suite()) {
            suites.push(*suite);
        }
    }
    Ok(suites)
}

/// TLS configuration backed by the store: the server certificate and the
/// client trust pool are reloaded whenever `epoch` moves, and sessions from
/// before the move cannot be resumed.
pub fn create_server_config(
    store: Arc<CertificateStore>,
    epoch: Arc<AtomicU64>,
    tls_config: &TlsConfig,
) -> Result<ServerConfig, CertificateError> {
    let provider = Arc::new(CryptoProvider {
        cipher_suites: select_cipher_suites(&tls_config.cipher_suites)?,
        ..rustls::crypto::ring::default_provider()
    });
    let resolver = Arc::new(DynamicCertificateResolver::new(store.clone(), epoch.clone())?);
    let verifier = Arc::new(DynamicClientVerifier::new(
        store,
        epoch.clone(),
        provider.clone(),
        tls_config.client_auth.is_mandatory(),
    ));
    let mut config = ServerConfig::builder_with_provider(provider)
        .with_protocol_versions(tls_config.min_version.protocol_versions())
        .map_err(|e| CertificateError::TlsConfigError(e.to_string()))?
        .with_client_cert_verifier(verifier)
        .with_cert_resolver(resolver);
    // Stateless tickets stay disabled; every resumable session lives in this cache.
    config.session_storage = Arc::new(RotatingSessionCache::new(epoch, SESSION_CACHE_SIZE));
    info!(
        "[TLS] Server configuration ready (minimum {}, {} cipher suites, client auth {:?})",
        tls_config.min_version,
        tls_config.cipher_suites.len(),
        tls_config.client_auth
    );
    Ok(config)
}

/// Runs the first verification before the listener binds. Resolves to
/// `Cancelled` if `shutdown` completes first.
pub async fn bootstrap_certificates<F>(manager: &CertificateManager, shutdown: F) -> Result<CertificateState, CertificateError>
where
    F: Future<Output = ()>,
{
    info!("[BOOT] Verifying certificates in {}", manager.location().folder().display());
    tokio::select! {
        result = manager.check_and_rotate() => result,
        _ = shutdown => {
            info!("[BOOT] Certificate bootstrap interrupted by shutdown");
            Err(CertificateError::Cancelled)
        }
    }
}
