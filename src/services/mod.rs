//! Service layer for business logic operations.
//!
//! Services sit between the HTTP handlers and the data model.

mod data_service;

pub use data_service::DataService;

use crate::external::soa::DataModel;
use std::sync::Arc;

/// Aggregates all services for convenient access.
///
/// Cloning is cheap since the model is shared behind an `Arc`.
#[derive(Clone)]
pub struct Services {
    pub data: DataService,
}

impl Services {
    pub fn new(model: Arc<dyn DataModel>) -> Self {
        Self {
            data: DataService::new(model),
        }
    }
}
