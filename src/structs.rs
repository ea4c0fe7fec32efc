use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the configuration file.
    #[arg(long, default_value = "config.toml")]
    pub config: String,
    /// Create the configuration file if it does not exist or is broken.
    #[arg(long)]
    pub create_config: bool,
    /// Serve HTTPS with mutual TLS regardless of the configured mode.
    #[arg(long)]
    pub prod: bool,
    /// Verify (and rotate if needed) the certificates, then exit.
    #[arg(long)]
    pub verify_only: bool,
}
