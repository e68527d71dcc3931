//! Error types for the gateway crate.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use coaster_core::CoreError;

/// Errors that can occur during gateway request handling.
///
/// Each variant maps to exactly one HTTP status. Bodies are plain text.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum GatewayError {
    /// The item path does not have exactly one segment after `/coasters/`.
    #[error("Incorrect path")]
    IncorrectPath,

    /// The HTTP method is not served on this path.
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// A create request did not declare a JSON body.
    #[error("need content-type 'application/json', but got '{received}'")]
    UnsupportedMediaType { received: String },

    /// The request body is not a valid coaster record.
    #[error("{0}")]
    MalformedBody(serde_json::Error),

    /// The request body could not be read from the connection.
    #[error("{0}")]
    BodyRead(String),

    /// A response body could not be serialized.
    #[error("{0}")]
    Encode(serde_json::Error),

    /// An error propagated from the core crate.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A random pick was requested while the store holds no records.
    #[error("store is empty")]
    EmptyStore,

    /// Missing, malformed, or wrong admin credentials.
    #[error("401 Unauthorized")]
    Unauthorized,
}

impl GatewayError {
    /// HTTP status this error is reported with.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            GatewayError::IncorrectPath | GatewayError::EmptyStore => StatusCode::NOT_FOUND,
            GatewayError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            GatewayError::UnsupportedMediaType { .. } => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            GatewayError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            GatewayError::BodyRead(_) | GatewayError::Encode(_) | GatewayError::Core(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            GatewayError::Unauthorized => StatusCode::UNAUTHORIZED,
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::warn!(status = %status, error = %self, "request failed");
        } else {
            tracing::debug!(status = %status, error = %self, "request rejected");
        }
        match self {
            GatewayError::EmptyStore => status.into_response(),
            GatewayError::Unauthorized => (
                status,
                [(header::WWW_AUTHENTICATE, r#"Basic realm="admin""#)],
                self.to_string(),
            )
                .into_response(),
            other => (status, other.to_string()).into_response(),
        }
    }
}
