use super::provider::DataModel;
use super::types::Dataset;
use crate::config::UpstreamConfig;
use crate::error::{AppError, AppResult};
use crate::external::client::build_http_client;
use async_trait::async_trait;
use serde_json::Value;

/// [`DataModel`] backed by the upstream data API.
///
/// Every dataset is a plain `GET` on `base_url` joined with the dataset's
/// configured path.
#[derive(Clone)]
pub struct SoaDataClient {
    http: reqwest::Client,
    config: UpstreamConfig,
}

impl SoaDataClient {
    pub fn new(config: UpstreamConfig) -> AppResult<Self> {
        let http = build_http_client(&config)?;
        Ok(Self::with_client(http, config))
    }

    pub fn with_client(http: reqwest::Client, config: UpstreamConfig) -> Self {
        Self { http, config }
    }

    pub fn url_for(&self, dataset: Dataset) -> String {
        let path = match dataset {
            Dataset::Topics => &self.config.topics_path,
            Dataset::CovidWorld => &self.config.covid_world_path,
            Dataset::CovidBarcelona => &self.config.covid_barcelona_path,
        };
        self.config.url_for(path)
    }

    pub async fn fetch(&self, dataset: Dataset) -> AppResult<Option<Value>> {
        let url = self.url_for(dataset);
        tracing::debug!(dataset = %dataset, url = %url, "Requesting upstream dataset");

        let resp = self.http.get(&url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(AppError::Upstream {
                service: dataset.to_string(),
                status: status.as_u16(),
            });
        }

        let body = resp.bytes().await?;
        decode_body(dataset, &body)
    }
}

/// Empty bodies and a literal `null` both mean "nothing to return".
fn decode_body(dataset: Dataset, body: &[u8]) -> AppResult<Option<Value>> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }

    let value: Value = serde_json::from_slice(body).map_err(|source| AppError::Decode {
        service: dataset.to_string(),
        source,
    })?;

    Ok((!value.is_null()).then_some(value))
}

#[async_trait]
impl DataModel for SoaDataClient {
    async fn topics(&self) -> AppResult<Option<Value>> {
        self.fetch(Dataset::Topics).await
    }

    async fn covid(&self) -> AppResult<Option<Value>> {
        self.fetch(Dataset::CovidWorld).await
    }

    async fn covid_barcelona(&self) -> AppResult<Option<Value>> {
        self.fetch(Dataset::CovidBarcelona).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_empty_body_is_absent() {
        assert!(decode_body(Dataset::Topics, b"").unwrap().is_none());
        assert!(decode_body(Dataset::Topics, b" \n").unwrap().is_none());
    }

    #[test]
    fn test_decode_null_is_absent() {
        assert!(decode_body(Dataset::CovidWorld, b"null").unwrap().is_none());
    }

    #[test]
    fn test_decode_value() {
        let value = decode_body(Dataset::Topics, br#"["health","economy"]"#).unwrap();
        assert_eq!(value, Some(json!(["health", "economy"])));
    }

    #[test]
    fn test_decode_invalid_json() {
        let err = decode_body(Dataset::CovidBarcelona, b"<html>").unwrap_err();
        match err {
            AppError::Decode { service, .. } => assert_eq!(service, "covid-barcelona"),
            other => panic!("Expected Decode error, got {other:?}"),
        }
    }

    #[test]
    fn test_url_for_uses_configured_paths() {
        let config = UpstreamConfig {
            base_url: "http://soa-api:5000/".to_string(),
            covid_barcelona_path: "/covid/bcn".to_string(),
            ..UpstreamConfig::default()
        };
        let client = SoaDataClient::with_client(reqwest::Client::new(), config);

        assert_eq!(client.url_for(Dataset::Topics), "http://soa-api:5000/topics");
        assert_eq!(
            client.url_for(Dataset::CovidWorld),
            "http://soa-api:5000/covid/world"
        );
        assert_eq!(
            client.url_for(Dataset::CovidBarcelona),
            "http://soa-api:5000/covid/bcn"
        );
    }

    #[tokio::test]
    async fn test_unreachable_upstream_is_internal_error() {
        let config = UpstreamConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            connect_timeout: 1,
            request_timeout: 2,
            ..UpstreamConfig::default()
        };
        let client = SoaDataClient::new(config).unwrap();

        let err = client.topics().await.unwrap_err();
        assert!(matches!(err, AppError::Internal { .. }));
    }
}
