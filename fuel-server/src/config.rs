//! Server configuration from environment variables.
//!
//! | Variable                     | Default                   |
//! |------------------------------|---------------------------|
//! | `FUEL_UPSTREAM_URL`          | Ministry endpoint         |
//! | `FUEL_UPSTREAM_TIMEOUT_SECS` | `30`                      |
//! | `FUEL_USER_AGENT`            | `fuel-server/<version>`   |
//! | `FUEL_BIND_ADDR`             | `127.0.0.1:3000`          |

use std::net::SocketAddr;

use crate::stations::StationClientConfig;

pub const UPSTREAM_URL_VAR: &str = "FUEL_UPSTREAM_URL";
pub const UPSTREAM_TIMEOUT_VAR: &str = "FUEL_UPSTREAM_TIMEOUT_SECS";
pub const USER_AGENT_VAR: &str = "FUEL_USER_AGENT";
pub const BIND_ADDR_VAR: &str = "FUEL_BIND_ADDR";

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

/// Errors from reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be a whole number of seconds, got {value:?}")]
    InvalidTimeout { var: &'static str, value: String },

    #[error("{var} must be a socket address like 127.0.0.1:3000, got {value:?}")]
    InvalidBindAddr { var: &'static str, value: String },
}

/// Top-level server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on
    pub bind_addr: SocketAddr,
    /// Upstream client settings
    pub upstream: StationClientConfig,
}

impl ServerConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, treating blank values as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mut upstream = StationClientConfig::new();

        if let Some(url) = get(UPSTREAM_URL_VAR) {
            upstream = upstream.with_url(url);
        }

        if let Some(value) = get(UPSTREAM_TIMEOUT_VAR) {
            let secs = value
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidTimeout {
                    var: UPSTREAM_TIMEOUT_VAR,
                    value: value.clone(),
                })?;
            upstream = upstream.with_timeout(secs);
        }

        if let Some(user_agent) = get(USER_AGENT_VAR) {
            upstream = upstream.with_user_agent(user_agent);
        }

        let bind_value = get(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_value
            .trim()
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidBindAddr {
                var: BIND_ADDR_VAR,
                value: bind_value.clone(),
            })?;

        Ok(Self {
            bind_addr,
            upstream,
        })
    }
}
