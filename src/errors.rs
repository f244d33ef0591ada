use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

/// Standard error response body.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
    /// Upstream HTTP status, present when a provider call failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    /// Additional detail (upstream response body or a resolution hint)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A required provider credential is not configured.
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {message}")]
    NotFound {
        message: String,
        details: Option<String>,
    },

    /// A provider returned a non-success status. The response echoes the
    /// upstream status and body so clients can see what the provider said.
    #[error("{context}: upstream HTTP {status}")]
    Upstream {
        context: String,
        status: u16,
        body: String,
    },

    /// Network or deserialization failure talking to a provider.
    #[error("{context}: {detail}")]
    Transport { context: String, detail: String },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::Configuration(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    error: msg,
                    status: None,
                    details: None,
                },
            ),
            ApiError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    error: msg,
                    status: None,
                    details: None,
                },
            ),
            ApiError::NotFound { message, details } => (
                StatusCode::NOT_FOUND,
                ErrorResponse {
                    error: message,
                    status: None,
                    details,
                },
            ),
            ApiError::Upstream {
                context,
                status,
                body,
            } => (
                // Echo the upstream status; fall back to 502 for codes
                // axum cannot represent.
                StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
                ErrorResponse {
                    error: context,
                    status: Some(status),
                    details: Some(body),
                },
            ),
            ApiError::Transport { context, detail } => {
                tracing::error!("{}: {}", context, detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error: context,
                        status: None,
                        details: Some(detail),
                    },
                )
            }
        };

        (status, axum::Json(body)).into_response()
    }
}
