//! Server configuration parsed from environment variables.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use axum::http::HeaderValue;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
pub const DEFAULT_FRONTEND_ORIGIN: &str = "http://localhost:3000";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// `PORT` is not a valid `u16`.
    #[error("invalid PORT: {value:?}")]
    InvalidPort { value: String },

    /// `HOST` is not an IP address.
    #[error("invalid HOST: {value:?}")]
    InvalidHost { value: String },

    /// A `FRONTEND_ORIGINS` entry is a wildcard or cannot be sent as a
    /// header value. Credentialed CORS requires explicit origins.
    #[error("invalid FRONTEND_ORIGINS entry: {value:?}")]
    InvalidOrigin { value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Origins allowed by CORS, the local frontend first.
    pub cors_origins: Vec<String>,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `HOST`: default `0.0.0.0`
    /// - `PORT`: default 3000
    /// - `FRONTEND_ORIGINS`: comma-separated origins added to
    ///   `http://localhost:3000`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(env_var)
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = match lookup("HOST") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidHost { value: raw.clone() })?,
            None => DEFAULT_HOST,
        };
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort { value: raw.clone() })?,
            None => DEFAULT_PORT,
        };
        let cors_origins = parse_frontend_origins(lookup("FRONTEND_ORIGINS").as_deref());
        if let Some(bad) = cors_origins.iter().find(|o| *o == "*" || HeaderValue::from_str(o).is_err()) {
            return Err(ConfigError::InvalidOrigin { value: bad.clone() });
        }

        Ok(Self { host, port, cors_origins })
    }

    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Read a process environment variable; unset or non-UTF-8 values are `None`.
pub(crate) fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Normalize the `FRONTEND_ORIGINS` list.
///
/// Entries are trimmed and lose a trailing `/`; empty entries and duplicates
/// are dropped. The default local origin always comes first.
#[must_use]
pub fn parse_frontend_origins(raw: Option<&str>) -> Vec<String> {
    let mut origins = vec![DEFAULT_FRONTEND_ORIGIN.to_owned()];
    for entry in raw.unwrap_or_default().split(',') {
        let origin = entry.trim().trim_end_matches('/');
        if origin.is_empty() || origins.iter().any(|o| o == origin) {
            continue;
        }
        origins.push(origin.to_owned());
    }
    origins
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
