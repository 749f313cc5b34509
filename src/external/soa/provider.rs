use crate::error::AppResult;
use async_trait::async_trait;
use serde_json::Value;

/// Source of the datasets served by the data routes.
///
/// Each operation resolves to `Ok(None)` when the source has nothing to
/// return for the dataset.
#[async_trait]
pub trait DataModel: Send + Sync {
    async fn topics(&self) -> AppResult<Option<Value>>;
    async fn covid(&self) -> AppResult<Option<Value>>;
    async fn covid_barcelona(&self) -> AppResult<Option<Value>>;
}
