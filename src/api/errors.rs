use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// API error type with HTTP status code and an internal detail
///
/// Clients only ever see the fixed message for the status code; `detail`
/// goes to the log.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub detail: String,
}

impl ApiError {
    /// Creates a new API error
    pub fn new(status: StatusCode, detail: impl Into<String>) -> Self {
        Self {
            status,
            detail: detail.into(),
        }
    }

    /// Creates a 400 Bad Request error
    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, detail)
    }

    /// Creates a 404 Not Found error
    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, detail)
    }

    /// Creates a 422 Unprocessable Entity error
    pub fn unprocessable_entity(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, detail)
    }

    /// Creates a 500 Internal Server Error
    pub fn internal_server_error(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, detail)
    }

    /// Fixed client-facing message for the status code
    pub fn message(&self) -> &'static str {
        match self.status {
            StatusCode::BAD_REQUEST => "Oops! you made an invalid request",
            StatusCode::NOT_FOUND => "resource was not found",
            StatusCode::UNPROCESSABLE_ENTITY => "Request could not be processed",
            _ => "Internal Server Error",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(status = %self.status, "{}", self.detail);
        } else {
            tracing::warn!(status = %self.status, "{}", self.detail);
        }

        let body = Json(json!({
            "success": false,
            "error": self.status.as_u16(),
            "message": self.message()
        }));

        (self.status, body).into_response()
    }
}
