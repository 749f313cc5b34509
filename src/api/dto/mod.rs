//! Data Transfer Objects for API responses.
//!
//! - `error` - Common error response DTOs
//! - `health` - Health check DTOs

mod error;
mod health;

pub use error::ErrorResponse;
pub use health::{HealthResponse, HealthStatus};
