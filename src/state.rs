//! Application state for Axum web framework.

use std::sync::Arc;

use crate::config::settings::ApplicationConfig;
use crate::external::soa::DataModel;
use crate::services::Services;

/// Shared state handed to every request handler.
///
/// Cloning is cheap since the data model sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// All business logic services
    pub services: Services,
    /// Name and version reported by the health endpoint
    pub application: ApplicationConfig,
}

impl AppState {
    /// # Example
    /// ```ignore
    /// let model = Arc::new(SoaDataClient::new(settings.upstream.clone())?);
    /// let state = AppState::new(model, settings.application.clone());
    /// ```
    pub fn new(model: Arc<dyn DataModel>, application: ApplicationConfig) -> Self {
        Self {
            services: Services::new(model),
            application,
        }
    }
}
