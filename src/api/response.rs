//! Response writing for the data endpoints.
//!
//! The data endpoints answer with one of three shapes (a JSON value, a
//! bare 500, or the generic error body). [`write_outcome`] maps a model
//! outcome onto any [`ResponseWriter`]; [`JsonEnvelope`] is the writer the
//! axum handlers hand back.

use axum::{
    body::Body,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};

/// Media type set on every response that carries a JSON body.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Message returned to clients when the data model fails.
pub const UNKNOWN_ERROR_MESSAGE: &str = "unknown error";

/// Minimal response surface needed by the data endpoints.
pub trait ResponseWriter {
    fn set_status(&mut self, status: StatusCode);
    fn set_content_type(&mut self, content_type: &str);
    fn write_json(&mut self, body: &Value);
}

/// Body written when the model fails: `{"error":"unknown error"}`.
pub fn unknown_error_body() -> Value {
    json!({ "error": UNKNOWN_ERROR_MESSAGE })
}

/// Writes a model outcome.
///
/// - `Err(_)` → 500 with [`unknown_error_body`]
/// - `Ok(None)` or a JSON `null` → 500, nothing else written
/// - `Ok(Some(value))` → 200 with `value`
pub fn write_outcome<W, E>(outcome: Result<Option<Value>, E>, writer: &mut W)
where
    W: ResponseWriter + ?Sized,
{
    match outcome {
        Err(_) => {
            writer.set_status(StatusCode::INTERNAL_SERVER_ERROR);
            writer.set_content_type(JSON_CONTENT_TYPE);
            writer.write_json(&unknown_error_body());
        }
        Ok(None | Some(Value::Null)) => writer.set_status(StatusCode::INTERNAL_SERVER_ERROR),
        Ok(Some(value)) => {
            writer.set_status(StatusCode::OK);
            writer.set_content_type(JSON_CONTENT_TYPE);
            writer.write_json(&value);
        }
    }
}

/// Axum-backed [`ResponseWriter`].
///
/// Starts as an empty 200. A missing content type produces no
/// `Content-Type` header and a missing body produces an empty body.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonEnvelope {
    status: StatusCode,
    content_type: Option<String>,
    body: Option<Value>,
}

impl JsonEnvelope {
    pub fn new() -> Self {
        Self {
            status: StatusCode::OK,
            content_type: None,
            body: None,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    pub fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }
}

impl Default for JsonEnvelope {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponseWriter for JsonEnvelope {
    fn set_status(&mut self, status: StatusCode) {
        self.status = status;
    }

    fn set_content_type(&mut self, content_type: &str) {
        self.content_type = Some(content_type.to_string());
    }

    fn write_json(&mut self, body: &Value) {
        self.body = Some(body.clone());
    }
}

impl IntoResponse for JsonEnvelope {
    fn into_response(self) -> Response {
        let body = match self.body {
            Some(value) => Body::from(value.to_string()),
            None => Body::empty(),
        };

        let mut response = Response::new(body);
        *response.status_mut() = self.status;

        if let Some(value) = self
            .content_type
            .and_then(|ct| HeaderValue::from_str(&ct).ok())
        {
            response.headers_mut().insert(header::CONTENT_TYPE, value);
        }

        response
    }
}
