use std::fs::File;
use std::io::Write;
use regex::Regex;
use crate::common::structs::custom_error::CustomError;
use crate::config::enums::certificate_source::CertificateSource;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::certificates_config::CertificatesConfig;
use crate::config::structs::company_config::CompanyConfig;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::http_server_config::HttpServerConfig;
use crate::config::structs::tls_config::TlsConfig;

const FILE_NAME_REGEX: &str = r"^[A-Za-z0-9_][A-Za-z0-9_.\-]{0,127}$";
const FOLDER_REGEX: &str = r"^[A-Za-z0-9_./\-]{1,255}$";
const LOG_LEVEL_REGEX: &str = r"^(off|trace|debug|info|warn|error)$";
const API_VERSION_REGEX: &str = r"^v[0-9]{1,3}$";
const ENDPOINT_REGEX: &str = r"^https?://[^\s/$.?#][^\s]*[^/\s]$";
const BIND_REGEX: &str = r"^[^\s]+:[0-9]{1,5}$";
const MAX_RELOAD_MINUTES: u64 = 10_080;

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            production: false,
            app_name: String::from("certkeeper"),
            api_version: String::from("v1"),
            folders: vec![String::from("certs")],
            http_server: HttpServerConfig::default(),
            tls: TlsConfig::default(),
            certificates: CertificatesConfig::default(),
            company: CompanyConfig::default(),
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        match std::fs::read(path) {
            Err(e) => Err(ConfigurationError::IOError(e)),
            Ok(data) => {
                match Self::load(data.as_slice()) {
                    Ok(cfg) => Ok(cfg),
                    Err(e) => Err(ConfigurationError::ParseError(e)),
                }
            }
        }
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        match File::create(path) {
            Ok(mut file) => {
                match file.write_all(data.as_ref()) {
                    Ok(_) => Ok(()),
                    Err(e) => Err(ConfigurationError::IOError(e))
                }
            }
            Err(e) => Err(ConfigurationError::IOError(e))
        }
    }

    pub fn load_from_file(path: &str, create: bool) -> Result<Configuration, CustomError> {
        let config = match Configuration::load_file(path) {
            Ok(c) => c,
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {error}");

                if !create {
                    eprintln!("You can either create your own {path} file, or start this app using '--create-config' as parameter.");
                    return Err(CustomError::new(&format!("will not create automatically {path} file")));
                }
                eprintln!("Creating config file..");

                let config_toml = toml::to_string(&Configuration::init())
                    .map_err(|e| CustomError::new(&ConfigurationError::SerializeError(e).to_string()))?;
                return match Configuration::save_file(path, config_toml) {
                    Ok(_) => {
                        eprintln!("Please edit the {path} in the root folder, exiting now...");
                        Err(CustomError::new(&format!("create {path} file")))
                    }
                    Err(e) => {
                        eprintln!("{path} file could not be created, check permissions...");
                        eprintln!("{e}");
                        Err(CustomError::new(&format!("could not create {path} file")))
                    }
                };
            }
        };

        println!("[VALIDATE] Validating configuration...");
        Self::validate(&config).map_err(|e| CustomError::new(&e.to_string()))?;
        Ok(config)
    }

    pub fn validate(config: &Configuration) -> Result<(), ConfigurationError> {
        let certificates = &config.certificates;
        let mut check_map = vec![
            ("[ROOT] log_level", config.log_level.clone(), LOG_LEVEL_REGEX),
            ("[ROOT] api_version", config.api_version.clone(), API_VERSION_REGEX),
            ("[HTTP] bind_address", config.http_server.bind_address.clone(), BIND_REGEX),
            ("[CERTIFICATES] folder_name", certificates.folder_name.clone(), FOLDER_REGEX),
            ("[CERTIFICATES] file_name_cert", certificates.file_name_cert.clone(), FILE_NAME_REGEX),
            ("[CERTIFICATES] file_name_key", certificates.file_name_key.clone(), FILE_NAME_REGEX),
        ];
        for folder in &config.folders {
            check_map.push(("[ROOT] folders", folder.clone(), FOLDER_REGEX));
        }
        if certificates.source == CertificateSource::remote {
            check_map.push(("[CERTIFICATES] end_point_get_certificate_ca", certificates.end_point_get_certificate_ca.clone(), ENDPOINT_REGEX));
            check_map.push(("[CERTIFICATES] end_point_get_certificate_host", certificates.end_point_get_certificate_host.clone(), ENDPOINT_REGEX));
            check_map.push(("[CERTIFICATES] end_point_get_certificate_host_key", certificates.end_point_get_certificate_host_key.clone(), ENDPOINT_REGEX));
        }
        for (name, value, regex) in check_map {
            Self::validate_value(name, &value, regex)?;
        }

        if certificates.file_name_cert == certificates.file_name_key {
            return Err(ConfigurationError::ValidationError(String::from("[CERTIFICATES] file_name_cert and file_name_key must differ")));
        }
        if certificates.hosts.is_empty() {
            return Err(ConfigurationError::ValidationError(String::from("[CERTIFICATES] hosts must name at least one host")));
        }
        if certificates.common_name.trim().is_empty() {
            return Err(ConfigurationError::ValidationError(String::from("[CERTIFICATES] common_name must not be empty")));
        }
        if certificates.ca_validity_years == 0 || certificates.host_validity_days == 0 {
            return Err(ConfigurationError::ValidationError(String::from("[CERTIFICATES] validity windows must be positive")));
        }
        if u64::from(certificates.rotation_threshold_days) >= u64::from(certificates.host_validity_days) {
            return Err(ConfigurationError::ValidationError(format!(
                "[CERTIFICATES] rotation_threshold_days ({}) must be below host_validity_days ({})",
                certificates.rotation_threshold_days, certificates.host_validity_days
            )));
        }
        if certificates.minutes_to_reload_certificate == 0 || certificates.minutes_to_reload_certificate > MAX_RELOAD_MINUTES {
            return Err(ConfigurationError::ValidationError(format!(
                "[CERTIFICATES] minutes_to_reload_certificate must be between 1 and {MAX_RELOAD_MINUTES}"
            )));
        }
        if certificates.source == CertificateSource::remote && certificates.password_permission_end_point.is_empty() {
            return Err(ConfigurationError::ValidationError(String::from("[CERTIFICATES] password_permission_end_point is required for the remote source")));
        }
        if certificates.issuer_enabled && certificates.password_permission_end_point.is_empty() {
            return Err(ConfigurationError::ValidationError(String::from("[CERTIFICATES] password_permission_end_point is required when issuer_enabled is set")));
        }
        Ok(())
    }

    pub fn validate_value(name: &str, value: &str, regex: &str) -> Result<(), ConfigurationError> {
        let regex_check = Regex::new(regex).map_err(|e| ConfigurationError::ValidationError(e.to_string()))?;
        if !regex_check.is_match(value) {
            return Err(ConfigurationError::ValidationError(format!(
                "[VALIDATE CONFIG] Error checking {name} [:] Name: \"{value}\" [:] Regex: \"{regex_check}\""
            )));
        }
        Ok(())
    }
}
