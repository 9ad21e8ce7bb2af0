use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::warn;

pub const CHANNEL_ID_REQUIRED: &str = "Channel ID is required";
pub const CHANNEL_NAME_REQUIRED: &str = "Channel name is required";
pub const SLACK_UNAVAILABLE: &str = "slack_unavailable";

#[derive(Serialize)]
struct ErrorBody<'a> {
    ok: bool,
    error: &'a str,
}

#[derive(Serialize)]
struct MessageBody<'a> {
    ok: bool,
    message: &'a str,
}

pub fn error(status: StatusCode, error: &str) -> Response {
    (status, Json(ErrorBody { ok: false, error })).into_response()
}

pub fn message(message: &str) -> Response {
    (StatusCode::OK, Json(MessageBody { ok: true, message })).into_response()
}

/// Non-empty after trimming, or `None`.
pub fn required(field: Option<String>) -> Option<String> {
    field.filter(|value| !value.trim().is_empty())
}

/// Malformed, mistyped or non-JSON bodies get the same `{ok, error}` shape
/// as every other failure.
pub fn invalid_body(rejection: JsonRejection) -> Response {
    let reason = rejection.body_text();
    warn!(status = %rejection.status(), reason = %reason, "Rejected request body");

    error(StatusCode::BAD_REQUEST, &reason)
}
