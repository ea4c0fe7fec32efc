use chrono::{DateTime, Months, Utc};
use log::info;
use rand::RngExt;
use rcgen::{
    BasicConstraints,
    CertificateParams,
    DistinguishedName,
    DnType,
    ExtendedKeyUsagePurpose,
    IsCa,
    Issuer,
    KeyPair,
    KeyUsagePurpose,
    SerialNumber
};
use time::OffsetDateTime;
use crate::config::structs::certificates_config::CertificatesConfig;
use crate::config::structs::company_config::CompanyConfig;
use crate::config::structs::configuration::Configuration;
use crate::ssl::enums::certificate_error::CertificateError;
use crate::ssl::ssl::{certificate_to_pem, parse_certificate_der, parse_certificate_pem, private_key_to_pem, verify_issued_by};
use crate::ssl::structs::certificate_bundle::CertificateBundle;
use crate::ssl::structs::certificate_generator::CertificateGenerator;
use crate::ssl::structs::generated_certificate::GeneratedCertificate;
use crate::ssl::structs::parsed_certificate::ParsedCertificate;
use crate::ssl::traits::certificate_authority::CertificateAuthority;

impl CertificateGenerator {
    pub fn new(settings: CertificatesConfig, company: CompanyConfig) -> Self {
        Self { settings, company }
    }

    pub fn from_config(config: &Configuration) -> Self {
        Self::new(config.certificates.clone(), config.company.clone())
    }

    fn generate_key_pair(&self) -> Result<KeyPair, CertificateError> {
        KeyPair::generate_for(self.settings.key_algorithm.signature_algorithm())
            .map_err(|e| CertificateError::KeyGenError(e.to_string()))
    }

    fn distinguished_name(&self, common_name: &str) -> DistinguishedName {
        let mut name = DistinguishedName::new();
        name.push(DnType::CommonName, common_name);
        let fields = [
            (DnType::OrganizationName, &self.company.name),
            (DnType::OrganizationalUnitName, &self.company.organizational_unit),
            (DnType::CountryName, &self.company.country),
            (DnType::StateOrProvinceName, &self.company.province),
            (DnType::LocalityName, &self.company.locality),
        ];
        for (dn_type, value) in fields {
            if !value.is_empty() {
                name.push(dn_type, value.as_str());
            }
        }
        name
    }

    fn ca_params(&self, now: DateTime<Utc>) -> Result<CertificateParams, CertificateError> {
        let not_after = now
            .checked_add_months(Months::new(self.settings.ca_validity_years.saturating_mul(12)))
            .ok_or_else(|| CertificateError::CertBuildError(String::from("CA validity overflows the calendar")))?;
        let mut params = CertificateParams::default();
        params.is_ca = IsCa::Ca(BasicConstraints::Unconstrained);
        params.distinguished_name = self.distinguished_name(&self.settings.common_name);
        params.key_usages = vec![
            KeyUsagePurpose::KeyCertSign,
            KeyUsagePurpose::CrlSign,
            KeyUsagePurpose::DigitalSignature,
        ];
        params.serial_number = Some(random_serial());
        params.not_before = to_offset_date_time(now)?;
        params.not_after = to_offset_date_time(not_after)?;
        Ok(params)
    }

    /// Signs a fresh host certificate and checks the result against the CA
    /// it claims to come from.
    fn sign_host(&self, issuer: &Issuer<'_, KeyPair>, ca: &ParsedCertificate) -> Result<GeneratedCertificate, CertificateError> {
        let now = Utc::now();
        if !ca.is_ca {
            return Err(CertificateError::InvalidCaError(format!("{} is not a CA certificate", ca.subject)));
        }
        if now < ca.not_before || now >= ca.not_after {
            return Err(CertificateError::InvalidCaError(format!(
                "{} is outside its validity window ({} - {})",
                ca.subject, ca.not_before, ca.not_after
            )));
        }
        let requested = now + chrono::Duration::days(i64::from(self.settings.host_validity_days));
        let latest = ca.not_after - chrono::Duration::seconds(1);
        let not_after = requested.min(latest);

        let key_pair = self.generate_key_pair()?;
        let mut params = CertificateParams::new(self.settings.hosts.clone())?;
        let common_name = self.settings.hosts.first().map(String::as_str).unwrap_or("localhost");
        params.distinguished_name = self.distinguished_name(common_name);
        params.is_ca = IsCa::NoCa;
        params.key_usages = vec![
            KeyUsagePurpose::DigitalSignature,
            KeyUsagePurpose::KeyEncipherment,
        ];
        params.extended_key_usages = vec![
            ExtendedKeyUsagePurpose::ServerAuth,
            ExtendedKeyUsagePurpose::ClientAuth,
        ];
        params.use_authority_key_identifier_extension = true;
        params.serial_number = Some(random_serial());
        params.not_before = to_offset_date_time(now)?;
        params.not_after = to_offset_date_time(not_after)?;

        let cert = params.signed_by(&key_pair, issuer)?;
        let host = parse_certificate_der(cert.der())?;
        verify_issued_by(&host, ca)?;

        let key_der = key_pair.serialize_der();
        Ok(GeneratedCertificate {
            cert_pem: certificate_to_pem(cert.der()),
            cert_der: cert.der().to_vec(),
            key_pem: private_key_to_pem(&key_der),
            key_der,
        })
    }
}

impl CertificateAuthority for CertificateGenerator {
    fn generate_ca(&self) -> Result<GeneratedCertificate, CertificateError> {
        let key_pair = self.generate_key_pair()?;
        let cert = self.ca_params(Utc::now())?.self_signed(&key_pair)?;
        let key_der = key_pair.serialize_der();
        Ok(GeneratedCertificate {
            cert_pem: certificate_to_pem(cert.der()),
            cert_der: cert.der().to_vec(),
            key_pem: private_key_to_pem(&key_der),
            key_der,
        })
    }

    fn generate_host(&self, ca_cert_pem: &str, ca_key_pem: &str) -> Result<GeneratedCertificate, CertificateError> {
        let ca = parse_certificate_pem(ca_cert_pem.as_bytes())
            .map_err(|e| CertificateError::InvalidCaError(e.to_string()))?;
        let ca_key = KeyPair::from_pem(ca_key_pem)
            .map_err(|e| CertificateError::InvalidCaError(format!("unusable CA key: {e}")))?;
        let issuer = Issuer::from_ca_cert_pem(ca_cert_pem, ca_key)
            .map_err(|e| CertificateError::InvalidCaError(e.to_string()))?;
        self.sign_host(&issuer, &ca)
    }

    fn generate_bundle(&self) -> Result<CertificateBundle, CertificateError> {
        let ca_key = self.generate_key_pair()?;
        let ca_params = self.ca_params(Utc::now())?;
        let ca_cert = ca_params.self_signed(&ca_key)?;
        let ca = parse_certificate_der(ca_cert.der())?;
        let ca_key_pem = private_key_to_pem(&ca_key.serialize_der());
        let issuer = Issuer::new(ca_params, ca_key);
        let host = self.sign_host(&issuer, &ca)?;
        info!(
            "[CERTIFICATE] Generated {} CA \"{}\" and host certificate for {:?} (serial {})",
            self.settings.key_algorithm, ca.subject, self.settings.hosts, ca.serial
        );
        Ok(CertificateBundle {
            ca_cert: certificate_to_pem(&ca.der).into_bytes(),
            ca_key: Some(ca_key_pem.into_bytes()),
            host_cert: host.cert_pem.into_bytes(),
            host_key: host.key_pem.into_bytes(),
        })
    }
}

/// 128-bit serial from the thread CSPRNG, top bit cleared so it stays positive.
fn random_serial() -> SerialNumber {
    let mut bytes: [u8; 16] = rand::rng().random();
    bytes[0] &= 0x7f;
    SerialNumber::from_slice(&bytes)
}

fn to_offset_date_time(datetime: DateTime<Utc>) -> Result<OffsetDateTime, CertificateError> {
    OffsetDateTime::from_unix_timestamp(datetime.timestamp())
        .map_err(|e| CertificateError::CertBuildError(e.to_string()))
}
