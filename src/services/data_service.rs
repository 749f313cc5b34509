//! Dataset retrieval service.

use std::sync::Arc;

use serde_json::Value;
use tracing::instrument;

use crate::error::AppResult;
use crate::external::soa::{DataModel, Dataset};

/// Service fronting the shared [`DataModel`].
#[derive(Clone)]
pub struct DataService {
    model: Arc<dyn DataModel>,
}

impl DataService {
    pub fn new(model: Arc<dyn DataModel>) -> Self {
        Self { model }
    }

    #[instrument(skip(self))]
    pub async fn topics(&self) -> AppResult<Option<Value>> {
        self.model.topics().await
    }

    #[instrument(skip(self))]
    pub async fn covid(&self) -> AppResult<Option<Value>> {
        self.model.covid().await
    }

    #[instrument(skip(self))]
    pub async fn covid_barcelona(&self) -> AppResult<Option<Value>> {
        self.model.covid_barcelona().await
    }

    /// Dispatches to the model operation that serves `dataset`.
    pub async fn fetch(&self, dataset: Dataset) -> AppResult<Option<Value>> {
        match dataset {
            Dataset::Topics => self.topics().await,
            Dataset::CovidWorld => self.covid().await,
            Dataset::CovidBarcelona => self.covid_barcelona().await,
        }
    }
}
