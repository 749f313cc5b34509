mod common;

use std::sync::Arc;

use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use common::{TestServer, app_state};
use serde_json::{Value, json};
use soa_data_rs::api::routes::create_router;
use soa_data_rs::config::UpstreamConfig;
use soa_data_rs::error::AppError;
use soa_data_rs::external::soa::{DataModel, Dataset, SoaDataClient};

/// Stand-in for the upstream data API.
fn stub_upstream() -> Router {
    Router::new()
        .route("/topics", get(|| async { Json(json!(["health", "economy"])) }))
        .route(
            "/covid/world",
            get(|| async { ([(header::CONTENT_TYPE, "application/json")], "null") }),
        )
        .route(
            "/covid/barcelona",
            get(|| async { StatusCode::SERVICE_UNAVAILABLE.into_response() }),
        )
        .route("/broken", get(|| async { "<html>oops</html>" }))
        .route("/empty", get(|| async { StatusCode::OK }))
}

fn config_for(upstream: &TestServer) -> UpstreamConfig {
    UpstreamConfig {
        base_url: upstream.base_url(),
        connect_timeout: 2,
        request_timeout: 5,
        ..UpstreamConfig::default()
    }
}

#[tokio::test]
async fn client_returns_upstream_json() {
    let upstream = TestServer::start(stub_upstream()).await;
    let client = SoaDataClient::new(config_for(&upstream)).unwrap();

    let topics = client.topics().await.unwrap();
    assert_eq!(topics, Some(json!(["health", "economy"])));
}

#[tokio::test]
async fn client_maps_null_body_to_absent() {
    let upstream = TestServer::start(stub_upstream()).await;
    let client = SoaDataClient::new(config_for(&upstream)).unwrap();

    assert_eq!(client.covid().await.unwrap(), None);
}

#[tokio::test]
async fn client_maps_empty_body_to_absent() {
    let upstream = TestServer::start(stub_upstream()).await;
    let config = UpstreamConfig {
        topics_path: "/empty".to_string(),
        ..config_for(&upstream)
    };
    let client = SoaDataClient::new(config).unwrap();

    assert_eq!(client.fetch(Dataset::Topics).await.unwrap(), None);
}

#[tokio::test]
async fn client_reports_upstream_status() {
    let upstream = TestServer::start(stub_upstream()).await;
    let client = SoaDataClient::new(config_for(&upstream)).unwrap();

    match client.covid_barcelona().await.unwrap_err() {
        AppError::Upstream { service, status } => {
            assert_eq!(service, "covid-barcelona");
            assert_eq!(status, 503);
        }
        other => panic!("Expected Upstream error, got {other:?}"),
    }
}

#[tokio::test]
async fn client_reports_undecodable_body() {
    let upstream = TestServer::start(stub_upstream()).await;
    let config = UpstreamConfig {
        covid_world_path: "/broken".to_string(),
        ..config_for(&upstream)
    };
    let client = SoaDataClient::new(config).unwrap();

    let err = client.covid().await.unwrap_err();
    assert!(matches!(err, AppError::Decode { .. }));
}

#[tokio::test]
async fn gateway_end_to_end_against_stub_upstream() {
    let upstream = TestServer::start(stub_upstream()).await;
    let model = Arc::new(SoaDataClient::new(config_for(&upstream)).unwrap());
    let gateway = TestServer::start(create_router(app_state(model), false)).await;
    let http = reqwest::Client::new();

    let topics = http.post(gateway.url("/data/topics")).send().await.unwrap();
    assert_eq!(topics.status(), reqwest::StatusCode::OK);
    let body: Value = topics.json().await.unwrap();
    assert_eq!(body, json!(["health", "economy"]));

    let world = http
        .post(gateway.url("/data/covid/world"))
        .send()
        .await
        .unwrap();
    assert_eq!(world.status(), reqwest::StatusCode::INTERNAL_SERVER_ERROR);
    assert!(world.bytes().await.unwrap().is_empty());

    let barcelona = http
        .post(gateway.url("/data/covid/barcelona"))
        .send()
        .await
        .unwrap();
    assert_eq!(barcelona.status(), reqwest::StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = barcelona.json().await.unwrap();
    assert_eq!(body, json!({"error": "unknown error"}));
}

#[tokio::test]
async fn fetch_command_prints_only_json_on_stdout() {
    let upstream = TestServer::start(stub_upstream()).await;

    let output = tokio::process::Command::new(env!("CARGO_BIN_EXE_soa-data-rs"))
        .current_dir(env!("CARGO_MANIFEST_DIR"))
        .args(["fetch", "topics", "--upstream-url"])
        .arg(upstream.base_url())
        .env_remove("SOA_APP_ENV")
        .env_remove("SOA_CONFIG_DIR")
        .env_remove("SOA_CONFIG_FILE")
        .env("SOA_LOGGER__LEVEL", "info")
        .env("SOA_LOGGER__CONSOLE__ENABLED", "true")
        .output()
        .await
        .unwrap();

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let printed: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(printed, json!(["health", "economy"]));

    let logs = String::from_utf8_lossy(&output.stderr);
    assert!(logs.contains("Fetching dataset"), "{logs}");
}
