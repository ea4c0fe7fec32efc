use std::path::Path;
use fern::colors::{Color, ColoredLevelConfig};
use log::info;
use crate::common::structs::custom_error::CustomError;
use crate::config::structs::configuration::Configuration;

pub fn parse_log_level(level: &str) -> Result<log::LevelFilter, CustomError> {
    match level {
        "off" => Ok(log::LevelFilter::Off),
        "trace" => Ok(log::LevelFilter::Trace),
        "debug" => Ok(log::LevelFilter::Debug),
        "info" => Ok(log::LevelFilter::Info),
        "warn" => Ok(log::LevelFilter::Warn),
        "error" => Ok(log::LevelFilter::Error),
        _ => Err(CustomError::new(&format!("Unknown log level encountered: '{level}'"))),
    }
}

pub fn setup_logging(config: &Configuration) -> Result<(), CustomError>
{
    let level = parse_log_level(config.log_level.as_str())?;

    let colors = ColoredLevelConfig::new()
        .trace(Color::Cyan)
        .debug(Color::Magenta)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red);

    fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{} [{:width$}][{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.9f"),
                colors.color(record.level()),
                record.target(),
                message,
                width = 5
            ))
        })
        .level(level)
        .level_for("rustls", log::LevelFilter::Warn)
        .level_for("reqwest", log::LevelFilter::Warn)
        .chain(std::io::stdout())
        .apply()
        .map_err(|e| CustomError::new(&format!("Failed to initialize logging: {e}")))?;
    info!("logging initialized.");
    Ok(())
}

/// Creates every configured folder that does not exist yet.
pub fn create_folders(folders: &[String]) -> Result<(), CustomError>
{
    for folder in folders {
        let path = Path::new(folder);
        if path.is_dir() {
            continue;
        }
        std::fs::create_dir_all(path)
            .map_err(|e| CustomError::new(&format!("unable to create folder {folder}: {e}")))?;
        info!("[BOOT] Created folder {folder}");
    }
    Ok(())
}

pub fn file_exists(path: &Path) -> bool
{
    path.is_file()
}

pub fn equal_string_check(source: &str, check: &str) -> bool
{
    let source = source.as_bytes();
    let check = check.as_bytes();
    if source.len() != check.len() {
        return false;
    }
    source.iter().zip(check.iter()).fold(0u8, |acc, (a, b)| acc | (a ^ b)) == 0
}
