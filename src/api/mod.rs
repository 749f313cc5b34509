//! API module for HTTP handlers, middleware, and DTOs.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
mod doc;

pub use doc::ApiDoc;
