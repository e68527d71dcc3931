//! Startup configuration read from the process environment.

use std::net::SocketAddr;

use crate::admin::AdminCredential;

/// Environment variable holding the admin password. Required.
pub const ADMIN_PASSWORD_VAR: &str = "ADMIN_PASSWORD";

/// Environment variable overriding the listen address.
pub const LISTEN_ADDR_VAR: &str = "COASTER_LISTEN_ADDR";

/// Address the gateway binds when no override is set.
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";

/// Largest request body the gateway will read, in bytes.
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Errors that abort startup.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The admin password variable is unset or empty.
    #[error("required env var 'ADMIN_PASSWORD' not set")]
    MissingAdminPassword,

    /// The listen address override is not a valid socket address.
    #[error("invalid COASTER_LISTEN_ADDR '{value}': {source}")]
    InvalidListenAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
}

/// Settings the gateway is started with.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Socket address to listen on.
    pub listen_addr: SocketAddr,
    /// Admin login checked by the `/admin` endpoint.
    pub admin: AdminCredential,
}

impl GatewayConfig {
    /// Build the configuration from the real process environment.
    ///
    /// # Errors
    /// See [`GatewayConfig::from_lookup`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    /// Returns [`ConfigError::MissingAdminPassword`] if the password is unset
    /// or empty, and [`ConfigError::InvalidListenAddr`] if the address
    /// override does not parse.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let password = lookup(ADMIN_PASSWORD_VAR)
            .filter(|p| !p.is_empty())
            .ok_or(ConfigError::MissingAdminPassword)?;

        let addr = lookup(LISTEN_ADDR_VAR).unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_owned());
        let listen_addr = addr
            .parse()
            .map_err(|source| ConfigError::InvalidListenAddr { value: addr.clone(), source })?;

        Ok(Self { listen_addr, admin: AdminCredential::new(password) })
    }
}
