//! Maps [`OrderError`] onto HTTP responses.

use crate::http::api_types::ErrorResponse;
use crate::order_actor::{ErrorKind, OrderError};
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::{error, warn};

impl From<ErrorKind> for StatusCode {
    fn from(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::Validation | ErrorKind::Conflict => StatusCode::BAD_REQUEST,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for OrderError {
    fn from(rejection: JsonRejection) -> Self {
        OrderError::Malformed(rejection.body_text())
    }
}

impl IntoResponse for OrderError {
    fn into_response(self) -> Response {
        let status = StatusCode::from(self.kind());
        if status.is_server_error() {
            error!(error = %self, "request failed");
        } else {
            warn!(%status, error = %self, "request rejected");
        }

        (
            status,
            Json(ErrorResponse::new(self.to_string())),
        )
            .into_response()
    }
}
