//! Route handlers.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::HeaderMap,
    response::{IntoResponse, Response},
    Json,
};

use crate::gateway::TranslateRequest;
use crate::http::request::RequestIdExt;
use crate::http::response::invalid_body;
use crate::http::server::AppState;

/// Identification string served on `/`.
pub const BANNER: &str = concat!(
    env!("CARGO_PKG_NAME"),
    " v",
    env!("CARGO_PKG_VERSION"),
    ": POST {\"text\", \"source_lang\", \"target_lang\"} to /translate"
);

/// Hint served on `GET /translate`.
pub const POST_HINT: &str = "Please use POST method :)";

pub async fn index() -> &'static str {
    BANNER
}

pub async fn translate_hint() -> &'static str {
    POST_HINT
}

/// `POST /translate`.
pub async fn translate(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<TranslateRequest>, JsonRejection>,
) -> Response {
    let request_id = headers.request_id();

    let Json(request) = match payload {
        Ok(json) => json,
        Err(rejection) => {
            tracing::warn!(request_id = %request_id, error = %rejection, "Error parsing request body");
            return invalid_body().into_response();
        }
    };

    let result = state.gateway.translate(&request).await;
    tracing::info!(
        request_id = %request_id,
        code = result.code,
        "Translation finished"
    );
    result.into_response()
}
