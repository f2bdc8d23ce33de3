//! Request and response envelopes for the HTTP endpoints.
//!
//! Every body on the wire is wrapped as `{ "data": ... }`; errors are
//! `{ "message": "<text>", "error": "<text>" }`.

use crate::model::OrderPayload;
use serde::{Deserialize, Serialize};

/// Body of POST and PUT requests. A missing or `null` `data` reads as `{}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderRequest {
    #[serde(default)]
    pub data: Option<OrderPayload>,
}

impl OrderRequest {
    pub fn into_payload(self) -> OrderPayload {
        self.data.unwrap_or_default()
    }
}

/// Successful response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataResponse<T> {
    pub data: T,
}

impl<T> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Error response body. `error` repeats `message` for clients that read that key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            error: message.clone(),
            message,
        }
    }
}
