//! Password-gated admin page.
//!
//! Credentials arrive as HTTP basic authentication. The username is fixed;
//! the password is whatever the process was configured with at startup.

use axum::http::{header, HeaderMap};
use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::error::GatewayError;

/// The only username the admin gate accepts.
pub const ADMIN_USERNAME: &str = "admin";

/// Body served to an authenticated admin.
pub const ADMIN_PAGE: &str = "<H1>something super secret<H1>";

/// Username/password pair decoded from an `Authorization: Basic` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicCredentials {
    pub username: String,
    pub password: String,
}

impl BasicCredentials {
    /// Decode the value of an `Authorization` header.
    ///
    /// Returns `None` unless the scheme is `Basic` (any case), the payload is
    /// valid base64 and UTF-8, and it contains a `:`. The first colon
    /// separates username from password.
    #[must_use]
    pub fn from_header(value: &str) -> Option<Self> {
        let (scheme, payload) = value.trim().split_once(' ')?;
        if !scheme.eq_ignore_ascii_case("basic") {
            return None;
        }
        let decoded = STANDARD.decode(payload.trim()).ok()?;
        let text = String::from_utf8(decoded).ok()?;
        let (username, password) = text.split_once(':')?;
        Some(Self { username: username.to_owned(), password: password.to_owned() })
    }

    /// Pull credentials out of a request's headers, if present and well-formed.
    #[must_use]
    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
        Self::from_header(value)
    }
}

/// The configured admin login. Immutable once built.
#[derive(Clone)]
pub struct AdminCredential {
    password: String,
}

impl AdminCredential {
    /// Wrap the configured admin password.
    #[must_use]
    pub fn new(password: impl Into<String>) -> Self {
        Self { password: password.into() }
    }

    /// Check a request's headers against this credential.
    ///
    /// # Errors
    /// Returns [`GatewayError::Unauthorized`] if the header is missing or
    /// malformed, or the username or password does not match.
    pub fn verify(&self, headers: &HeaderMap) -> Result<(), GatewayError> {
        let Some(creds) = BasicCredentials::from_headers(headers) else {
            return Err(GatewayError::Unauthorized);
        };
        if creds.username != ADMIN_USERNAME || creds.password != self.password {
            tracing::warn!(username = %creds.username, "admin login rejected");
            return Err(GatewayError::Unauthorized);
        }
        Ok(())
    }
}

impl std::fmt::Debug for AdminCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminCredential").field("password", &"<redacted>").finish()
    }
}
