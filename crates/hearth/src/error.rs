//! Error types shared by the gateway routes.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

use crate::listing::ListingDecodeError;
use crate::upstream::UpstreamError;

/// Result type alias for gateway operations
pub type GatewayResult<T> = Result<T, GatewayError>;

/// Gateway error types
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("gateway is not configured: {0}")]
    NotConfigured(&'static str),

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("invalid listing payload: {0}")]
    ListingPayload(#[from] ListingDecodeError),

    #[error("upstream returned {status}: {message}")]
    UpstreamStatus { status: u16, message: String },

    #[error("upstream unreachable: {0}")]
    UpstreamUnreachable(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<UpstreamError> for GatewayError {
    fn from(err: UpstreamError) -> Self {
        match err {
            UpstreamError::Status { status, message } => {
                GatewayError::UpstreamStatus { status, message }
            }
            UpstreamError::Transport(e) => GatewayError::UpstreamUnreachable(e.to_string()),
            UpstreamError::Decode(e) => {
                GatewayError::Internal(format!("unexpected upstream payload: {e}"))
            }
            UpstreamError::EmptyCompletion => {
                GatewayError::UpstreamStatus {
                    status: 502,
                    message: "provider returned no choices".to_string(),
                }
            }
        }
    }
}

/// API error response body
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl GatewayError {
    /// Convert to API error code
    pub fn code(&self) -> &'static str {
        match self {
            GatewayError::NotConfigured(_) => "NOT_CONFIGURED",
            GatewayError::InvalidRequest(_) => "INVALID_REQUEST",
            GatewayError::ListingPayload(_) => "INVALID_LISTING_PAYLOAD",
            GatewayError::UpstreamStatus { .. } => "UPSTREAM_ERROR",
            GatewayError::UpstreamUnreachable(_) => "UPSTREAM_UNREACHABLE",
            GatewayError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::NotConfigured(_) => StatusCode::SERVICE_UNAVAILABLE,

            GatewayError::InvalidRequest(_) | GatewayError::ListingPayload(_) => {
                StatusCode::BAD_REQUEST
            }

            GatewayError::UpstreamStatus { .. } | GatewayError::UpstreamUnreachable(_) => {
                StatusCode::BAD_GATEWAY
            }

            GatewayError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ApiError {
            code: self.code().to_string(),
            message: self.to_string(),
            details: None,
        };

        (status, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping() {
        assert_eq!(
            GatewayError::NotConfigured("OPENAI_API_KEY is not set").status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            GatewayError::InvalidRequest("bad".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            GatewayError::UpstreamStatus {
                status: 401,
                message: "bad key".into()
            }
            .status_code(),
            StatusCode::BAD_GATEWAY
        );
    }

    #[test]
    fn upstream_errors_keep_their_message() {
        let err = GatewayError::from(UpstreamError::Status {
            status: 429,
            message: "rate limited".into(),
        });
        assert_eq!(err.code(), "UPSTREAM_ERROR");
        assert!(err.to_string().contains("rate limited"));
    }
}
