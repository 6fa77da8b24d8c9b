//! Error types for the gateway crate.

use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use mergington_core::{DirectoryError, ErrorKind};
use serde_json::json;

/// Errors that can occur during gateway request handling.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum GatewayError {
    /// A rejected directory operation.
    #[error(transparent)]
    Directory(#[from] DirectoryError),

    /// The request is missing a parameter or carries a malformed one.
    #[error("{0}")]
    InvalidRequest(String),
}

impl GatewayError {
    /// HTTP status this error is reported with.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            GatewayError::Directory(err) => match err.kind() {
                ErrorKind::NotFound => StatusCode::NOT_FOUND,
                ErrorKind::Conflict => StatusCode::BAD_REQUEST,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
            GatewayError::InvalidRequest(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl From<QueryRejection> for GatewayError {
    fn from(rejection: QueryRejection) -> Self {
        GatewayError::InvalidRequest(rejection.body_text())
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            GatewayError::Directory(err) => tracing::debug!(
                status = status.as_u16(),
                activity = err.activity(),
                detail = %err,
                "directory rejected request"
            ),
            GatewayError::InvalidRequest(reason) => {
                tracing::debug!(status = status.as_u16(), reason = %reason, "invalid request");
            }
        }
        (status, Json(json!({"detail": self.to_string()}))).into_response()
    }
}
