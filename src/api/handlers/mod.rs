//! HTTP request handlers for API endpoints.

pub mod data;
pub mod fallback;
pub mod health;
