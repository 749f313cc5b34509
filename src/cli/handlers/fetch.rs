//! Fetch command handler
//!
//! Requests one dataset from the upstream and prints it, as an operational
//! check of the configured upstream.

use std::io::Write;
use std::sync::Arc;

use serde_json::Value;

use crate::config::settings::Settings;
use crate::error::{AppError, AppResult};
use crate::external::soa::{Dataset, SoaDataClient};
use crate::services::DataService;

/// Handler for the fetch command
pub struct FetchCommandHandler {
    service: DataService,
}

impl FetchCommandHandler {
    /// Build a handler backed by the upstream configured in `config`.
    pub fn new(config: &Settings) -> AppResult<Self> {
        let client = SoaDataClient::new(config.upstream.clone())?;
        Ok(Self::with_service(DataService::new(Arc::new(client))))
    }

    pub fn with_service(service: DataService) -> Self {
        Self { service }
    }

    /// Fetch `dataset` and write it as pretty JSON to `out`.
    ///
    /// An absent result is an error so the process exits non-zero.
    pub async fn execute_to<W: Write>(&self, dataset: Dataset, out: &mut W) -> anyhow::Result<()> {
        let value = self.fetch(dataset).await?;
        write_pretty(&value, out)
    }

    pub async fn execute(&self, dataset: Dataset) -> anyhow::Result<()> {
        let value = self.fetch(dataset).await?;
        write_pretty(&value, &mut std::io::stdout().lock())
    }

    async fn fetch(&self, dataset: Dataset) -> AppResult<Value> {
        tracing::info!(dataset = %dataset, "Fetching dataset");

        self.service
            .fetch(dataset)
            .await?
            .ok_or_else(|| AppError::NotFound {
                resource: dataset.to_string(),
            })
    }
}

fn write_pretty<W: Write>(value: &Value, out: &mut W) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::external::soa::DataModel;
    use async_trait::async_trait;
    use serde_json::json;

    struct StaticModel;

    #[async_trait]
    impl DataModel for StaticModel {
        async fn topics(&self) -> AppResult<Option<Value>> {
            Ok(Some(json!(["health", "economy"])))
        }

        async fn covid(&self) -> AppResult<Option<Value>> {
            Ok(None)
        }

        async fn covid_barcelona(&self) -> AppResult<Option<Value>> {
            Err(AppError::Upstream {
                service: "covid-barcelona".into(),
                status: 503,
            })
        }
    }

    fn handler() -> FetchCommandHandler {
        FetchCommandHandler::with_service(DataService::new(Arc::new(StaticModel)))
    }

    #[tokio::test]
    async fn test_fetch_prints_value() {
        let mut out = Vec::new();
        handler().execute_to(Dataset::Topics, &mut out).await.unwrap();

        let printed: Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(printed, json!(["health", "economy"]));
    }

    #[tokio::test]
    async fn test_fetch_absent_is_error() {
        let mut out = Vec::new();
        let result = handler().execute_to(Dataset::CovidWorld, &mut out).await;

        assert!(result.is_err());
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_failure_is_error() {
        let mut out = Vec::new();
        let err = handler()
            .execute_to(Dataset::CovidBarcelona, &mut out)
            .await
            .unwrap_err();

        assert!(err.to_string().contains("503"));
    }
}
