//! Error handler for converting AppError to HTTP responses.
//!
//! Provides consistent error response formatting for every surface except
//! the data endpoints, which answer with their own fixed bodies.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::api::dto::ErrorResponse;
use crate::error::AppError;

impl IntoResponse for AppError {
    /// # Status Code Mapping
    /// - NotFound → 404 NOT_FOUND
    /// - Upstream → 502 BAD_GATEWAY
    /// - Decode → 502 BAD_GATEWAY
    /// - Configuration → 500 INTERNAL_SERVER_ERROR
    /// - Internal → 500 INTERNAL_SERVER_ERROR
    fn into_response(self) -> Response {
        error_to_response_with_request_id(self, None)
    }
}

/// Maps an AppError variant to its corresponding HTTP status code.
pub fn error_to_status_code(error: &AppError) -> StatusCode {
    match error {
        AppError::NotFound { .. } => StatusCode::NOT_FOUND,
        AppError::Upstream { .. } => StatusCode::BAD_GATEWAY,
        AppError::Decode { .. } => StatusCode::BAD_GATEWAY,
        AppError::Configuration { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Maps an AppError variant to its error code string.
pub fn error_to_code(error: &AppError) -> &'static str {
    match error {
        AppError::NotFound { .. } => "NOT_FOUND",
        AppError::Upstream { .. } => "UPSTREAM_ERROR",
        AppError::Decode { .. } => "UPSTREAM_DECODE_ERROR",
        AppError::Configuration { .. } => "CONFIGURATION_ERROR",
        AppError::Internal { .. } => "INTERNAL_ERROR",
    }
}

/// Builds the JSON error response for `error`, tagged with `request_id`
/// when one is known.
///
/// Sources of internal errors are never echoed to the client.
pub fn error_to_response_with_request_id(error: AppError, request_id: Option<String>) -> Response {
    let code = error_to_code(&error);
    let mut error_response = match &error {
        AppError::NotFound { resource } => ErrorResponse::new(code, &error.to_string())
            .with_details(json!({ "resource": resource })),
        AppError::Upstream { service, status } => ErrorResponse::new(code, &error.to_string())
            .with_details(json!({ "service": service, "status": status })),
        AppError::Decode { service, .. } => ErrorResponse::new(code, &error.to_string())
            .with_details(json!({ "service": service })),
        AppError::Configuration { key, .. } => {
            ErrorResponse::new(code, &format!("Configuration error: {}", key))
                .with_details(json!({ "key": key }))
        }
        AppError::Internal { .. } => ErrorResponse::new(code, "An internal error occurred"),
    };

    if let Some(id) = request_id.as_deref() {
        error_response = error_response.with_request_id(id);
    }

    (error_to_status_code(&error), Json(error_response)).into_response()
}
