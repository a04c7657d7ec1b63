//! HTTP middleware for the web server

use axum::{
    http::{HeaderValue, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Json, Response},
};
use chrono::Utc;
use std::time::Instant;
use uuid::Uuid;

use crate::application::errors::ApplicationError;
use crate::presentation::models::ErrorResponse;

/// Response header carrying the id logged for the request
pub const REQUEST_ID_HEADER: &str = "x-request-id";

tokio::task_local! {
    static REQUEST_ID: Uuid;
}

/// Id assigned by [`logging_middleware`] to the request being handled.
///
/// Outside a request a fresh id is returned.
pub fn current_request_id() -> Uuid {
    REQUEST_ID.try_with(|id| *id).unwrap_or_else(|_| Uuid::new_v4())
}

/// Error handling middleware
impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            ApplicationError::Domain(_) => (
                StatusCode::BAD_REQUEST,
                "INVALID_INPUT",
                "The request contains invalid data",
            ),
            ApplicationError::NotFound { .. } => {
                (StatusCode::NOT_FOUND, "NOT_FOUND", "Resource not found")
            }
            ApplicationError::Configuration { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "CONFIGURATION_ERROR",
                "Service configuration error",
            ),
            ApplicationError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred",
            ),
        };

        let error_response = ErrorResponse {
            code: code.to_string(),
            message: message.to_string(),
            details: Some(serde_json::json!({ "error": self.to_string() })),
            request_id: current_request_id(),
            timestamp: Utc::now(),
        };

        if status.is_server_error() {
            tracing::error!(
                request_id = %error_response.request_id,
                error_type = self.error_type(),
                error = %self,
                "Request failed"
            );
        }

        (status, Json(error_response)).into_response()
    }
}

/// Request logging middleware with timing and request ID
pub async fn logging_middleware(request: Request<axum::body::Body>, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let request_id = Uuid::new_v4();
    let start_time = Instant::now();

    tracing::info!(
        request_id = %request_id,
        method = %method,
        uri = %uri,
        "Processing request"
    );

    let mut response = REQUEST_ID.scope(request_id, next.run(request)).await;
    if let Ok(value) = HeaderValue::from_str(&request_id.to_string()) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    tracing::info!(
        request_id = %request_id,
        method = %method,
        uri = %uri,
        status = %response.status(),
        duration_ms = start_time.elapsed().as_millis(),
        "Request completed"
    );

    response
}
