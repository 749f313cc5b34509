//! Dataset endpoints.
//!
//! Each endpoint ignores the request body, awaits its model operation once
//! and writes the outcome with [`write_outcome`].

use axum::extract::State;
use serde_json::Value;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::DATA_TAG;
use crate::api::response::{JsonEnvelope, write_outcome};
use crate::error::AppResult;
use crate::external::soa::Dataset;
use crate::state::AppState;

/// Register the three dataset routes, all `POST`.
pub fn data_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(topics))
        .routes(routes!(covid_world))
        .routes(routes!(covid_barcelona))
}

/// POST /data/topics - Topic list.
#[utoipa::path(
    post,
    path = "/data/topics",
    tag = DATA_TAG,
    responses(
        (status = 200, description = "Topics", body = serde_json::Value, content_type = "application/json"),
        (status = 500, description = "No topics available (empty body) or `{\"error\":\"unknown error\"}`")
    )
)]
pub async fn topics(State(state): State<AppState>) -> JsonEnvelope {
    let outcome = state.services.data.topics().await;
    respond(Dataset::Topics, outcome)
}

/// POST /data/covid/world - Worldwide COVID statistics.
#[utoipa::path(
    post,
    path = "/data/covid/world",
    tag = DATA_TAG,
    responses(
        (status = 200, description = "Worldwide COVID statistics", body = serde_json::Value, content_type = "application/json"),
        (status = 500, description = "No statistics available (empty body) or `{\"error\":\"unknown error\"}`")
    )
)]
pub async fn covid_world(State(state): State<AppState>) -> JsonEnvelope {
    let outcome = state.services.data.covid().await;
    respond(Dataset::CovidWorld, outcome)
}

/// POST /data/covid/barcelona - Barcelona COVID statistics.
#[utoipa::path(
    post,
    path = "/data/covid/barcelona",
    tag = DATA_TAG,
    responses(
        (status = 200, description = "Barcelona COVID statistics", body = serde_json::Value, content_type = "application/json"),
        (status = 500, description = "No statistics available (empty body) or `{\"error\":\"unknown error\"}`")
    )
)]
pub async fn covid_barcelona(State(state): State<AppState>) -> JsonEnvelope {
    let outcome = state.services.data.covid_barcelona().await;
    respond(Dataset::CovidBarcelona, outcome)
}

fn respond(dataset: Dataset, outcome: AppResult<Option<Value>>) -> JsonEnvelope {
    match &outcome {
        Err(e) => tracing::error!(
            endpoint = dataset.route(),
            error = %e,
            details = ?e,
            "Data model failed"
        ),
        Ok(None | Some(Value::Null)) => {
            tracing::warn!(endpoint = dataset.route(), "Data model returned no result")
        }
        Ok(Some(_)) => {}
    }

    let mut envelope = JsonEnvelope::new();
    write_outcome(outcome, &mut envelope);
    envelope
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use axum::http::StatusCode;
    use serde_json::json;

    #[test]
    fn test_respond_maps_each_outcome() {
        let ok = respond(Dataset::Topics, Ok(Some(json!(["health"]))));
        assert_eq!(ok.status(), StatusCode::OK);
        assert_eq!(ok.body(), Some(&json!(["health"])));

        let absent = respond(Dataset::CovidWorld, Ok(None));
        assert_eq!(absent.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(absent.body().is_none());
        assert!(absent.content_type().is_none());

        let null = respond(Dataset::Topics, Ok(Some(Value::Null)));
        assert_eq!(null.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(null.body().is_none());

        let failed = respond(
            Dataset::CovidBarcelona,
            Err(AppError::internal("connection reset")),
        );
        assert_eq!(failed.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(failed.body(), Some(&json!({"error": "unknown error"})));
    }

    #[test]
    fn test_data_routes_document_three_post_paths() {
        let (_, api) = data_routes().split_for_parts();

        let mut paths: Vec<_> = api.paths.paths.keys().cloned().collect();
        paths.sort();
        assert_eq!(
            paths,
            vec!["/data/covid/barcelona", "/data/covid/world", "/data/topics"]
        );
        for item in api.paths.paths.values() {
            assert!(item.post.is_some());
            assert!(item.get.is_none());
        }
    }
}
