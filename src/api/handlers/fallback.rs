//! Response for requests that match no route.

use axum::{extract::Request, response::Response};

use crate::api::middleware::{RequestId, error_to_response_with_request_id};
use crate::error::AppError;

pub async fn not_found(request: Request) -> Response {
    let error = AppError::NotFound {
        resource: request.uri().path().to_string(),
    };
    let request_id = request.extensions().get::<RequestId>().map(|id| id.0.clone());

    error_to_response_with_request_id(error, request_id)
}
