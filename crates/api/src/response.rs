//! Shared response envelope for API handlers.
//!
//! Every response body, success or failure, is an [`ApiResponse`]:
//!
//! ```json
//! { "success": true, "data": { ... }, "message": "...", "errors": [] }
//! ```

use serde::Serialize;

/// Standard `{ success, data, message, errors }` response envelope.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    /// Serialized as `null` when absent.
    pub data: Option<T>,
    pub message: String,
    /// Machine-readable error codes; empty on success.
    pub errors: Vec<String>,
}

impl<T: Serialize> ApiResponse<T> {
    /// A successful response carrying `data`.
    pub fn ok(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: message.into(),
            errors: Vec::new(),
        }
    }
}

impl ApiResponse<()> {
    /// A successful response with no payload.
    pub fn empty(message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: None,
            message: message.into(),
            errors: Vec::new(),
        }
    }

    /// A failed response. `data` is always `null`.
    pub fn failure(message: impl Into<String>, code: &str) -> Self {
        Self {
            success: false,
            data: None,
            message: message.into(),
            errors: vec![code.to_string()],
        }
    }
}
