//! API server configuration.

use std::env;
use std::net::{AddrParseError, SocketAddr};

use common::{DatabaseConfig, ServiceConfig};

/// API server configuration.
#[derive(Debug, Clone, Default)]
pub struct ApiConfig {
    pub service: ServiceConfig,
    pub database: DatabaseConfig,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            service: ServiceConfig {
                host: env::var("API_HOST").unwrap_or(defaults.service.host),
                port: env::var("API_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(defaults.service.port),
                log_level: env::var("LOG_LEVEL").unwrap_or(defaults.service.log_level),
                ..defaults.service
            },
            database: DatabaseConfig {
                url: env::var("DATABASE_URL").unwrap_or(defaults.database.url),
                max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.database.max_connections),
                min_connections: env::var("DATABASE_MIN_CONNECTIONS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.database.min_connections),
                ..defaults.database
            },
        }
    }

    /// Override host and port, e.g. from CLI flags.
    pub fn with_bind(mut self, host: Option<String>, port: Option<u16>) -> Self {
        if let Some(host) = host {
            self.service.host = host;
        }
        if let Some(port) = port {
            self.service.port = port;
        }
        self
    }

    /// Socket address the HTTP server binds to.
    pub fn bind_addr(&self) -> Result<SocketAddr, AddrParseError> {
        format!("{}:{}", self.service.host, self.service.port).parse()
    }
}
