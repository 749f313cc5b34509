//! Router configuration for the API.

use axum::{Router, middleware};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::doc::ApiDoc;
use crate::api::handlers;
use crate::api::middleware::{logging_middleware, request_id_middleware};
use crate::state::AppState;

pub const SWAGGER_UI_PATH: &str = "/swagger-ui";
pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

/// Creates the main application router with all routes and middleware.
///
/// # Middleware Order
/// Middleware is applied in reverse order of declaration (last added runs first):
/// 1. Request ID middleware (runs first) - generates/propagates request IDs
/// 2. Logging middleware (runs second) - logs requests with request IDs
/// 3. CORS (when enabled) and response compression
///
/// # Routes
/// - `POST /data/topics`, `POST /data/covid/world`, `POST /data/covid/barcelona`
/// - `GET /health`, `GET /health/live`
/// - `GET /swagger-ui`, `GET /api-docs/openapi.json`
pub fn create_router(state: AppState, cors_enabled: bool) -> Router {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(handlers::data::data_routes())
        .merge(handlers::health::health_routes())
        .split_for_parts();

    let mut router = router
        .merge(SwaggerUi::new(SWAGGER_UI_PATH).url(OPENAPI_JSON_PATH, api))
        .fallback(handlers::fallback::not_found)
        .layer(CompressionLayer::new());

    if cors_enabled {
        router = router.layer(CorsLayer::permissive());
    }

    router
        // Middleware is applied in reverse order - last added runs first
        // So logging runs after request_id has set the ID
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}
