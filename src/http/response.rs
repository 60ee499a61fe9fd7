//! Response mapping.
//!
//! A `TranslateResult` is always sent as JSON with its `code` as the HTTP status.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::gateway::TranslateResult;

impl IntoResponse for TranslateResult {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

/// Body returned for POST bodies that do not decode.
pub fn invalid_body() -> TranslateResult {
    TranslateResult::failure(400, "Invalid request body")
}
