use std::thread::available_parallelism;
use crate::config::structs::http_server_config::HttpServerConfig;

impl Default for HttpServerConfig {
    fn default() -> Self {
        HttpServerConfig {
            bind_address: String::from("0.0.0.0:8443"),
            threads: available_parallelism().map(|n| n.get() as u64).unwrap_or(4),
            keep_alive: 60,
            request_timeout: 15,
            disconnect_timeout: 15,
            max_connections: 25000,
            shutdown_timeout: 5,
        }
    }
}
