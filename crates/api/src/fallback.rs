//! Envelope bodies for failures raised outside the handlers.
//!
//! Axum answers unmatched paths and unsupported methods with empty bodies,
//! `TimeoutLayer` emits a bare 408 and `CatchPanicLayer` a plain-text 500.
//! The router installs these replacements so every failure is an
//! [`ApiResponse`].

use std::any::Any;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::response::ApiResponse;

fn failure(status: StatusCode, code: &str, message: &str) -> Response {
    (status, Json(ApiResponse::failure(message, code))).into_response()
}

/// Router fallback for paths that match no route.
pub async fn route_not_found() -> Response {
    failure(StatusCode::NOT_FOUND, "NOT_FOUND", "Route not found")
}

/// Fallback for a known path requested with a method it does not serve.
pub async fn method_not_allowed() -> Response {
    failure(
        StatusCode::METHOD_NOT_ALLOWED,
        "METHOD_NOT_ALLOWED",
        "Method not allowed",
    )
}

/// Replace the empty 408 produced by the timeout layer. Other responses pass through.
pub async fn timeout_envelope(response: Response) -> Response {
    if response.status() == StatusCode::REQUEST_TIMEOUT {
        failure(
            StatusCode::REQUEST_TIMEOUT,
            "REQUEST_TIMEOUT",
            "Request timed out",
        )
    } else {
        response
    }
}

/// Panic handler for `CatchPanicLayer`. The payload is logged, never returned.
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "non-string panic payload"
    };
    tracing::error!(panic = detail, "Handler panicked");

    failure(
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred",
    )
}
