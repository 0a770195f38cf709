//! Server configuration
//!
//! The service reads no configuration files or environment variables; every
//! setting is a compiled-in default. The struct exists so tests and `main`
//! share one place to derive the bind address and the CORS origin list.

use axum::http::HeaderValue;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use thiserror::Error;

/// Port the server listens on.
pub const DEFAULT_PORT: u16 = 8000;

/// Browser origins allowed to call the API with credentials.
pub const DEFAULT_ALLOWED_ORIGINS: [&str; 2] = ["http://localhost:5173", "http://localhost:8000"];

/// Errors raised while turning an [`AppConfig`] into server settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid allowed origin `{origin}`")]
    InvalidOrigin {
        origin: String,
        #[source]
        source: axum::http::header::InvalidHeaderValue,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Interface to bind; all interfaces by default.
    pub host: IpAddr,

    /// HTTP port to listen on.
    pub port: u16,

    /// Exact origins echoed back in `Access-Control-Allow-Origin`.
    pub allowed_origins: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            allowed_origins: DEFAULT_ALLOWED_ORIGINS
                .iter()
                .map(|origin| origin.to_string())
                .collect(),
        }
    }
}

impl AppConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Converts the configured origins into header values for the CORS layer.
    pub fn origin_headers(&self) -> Result<Vec<HeaderValue>, ConfigError> {
        self.allowed_origins
            .iter()
            .map(|origin| {
                HeaderValue::from_str(origin).map_err(|source| ConfigError::InvalidOrigin {
                    origin: origin.clone(),
                    source,
                })
            })
            .collect()
    }
}
