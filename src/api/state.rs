//! Application state for the Materials Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::catalog::MaterialCatalog;
use crate::config::ConfigLoader;

/// Shared application state.
///
/// Contains resources that are shared across all request handlers: the
/// material catalog and the service that offers excavation estimates.
#[derive(Clone)]
pub struct AppState {
    /// The material catalog calculations read from.
    catalog: Arc<dyn MaterialCatalog>,
    /// The service for which excavation depth is offered.
    patio_service_config_id: String,
}

impl AppState {
    /// Creates a new application state over any catalog implementation.
    pub fn new(
        catalog: impl MaterialCatalog + 'static,
        patio_service_config_id: impl Into<String>,
    ) -> Self {
        Self {
            catalog: Arc::new(catalog),
            patio_service_config_id: patio_service_config_id.into(),
        }
    }

    /// Creates application state from loaded configuration.
    pub fn from_config(config: &ConfigLoader) -> Self {
        Self::new(
            config.catalog(),
            config.engine().patio_service_config_id.clone(),
        )
    }

    /// Returns a reference to the material catalog.
    pub fn catalog(&self) -> &dyn MaterialCatalog {
        self.catalog.as_ref()
    }

    /// Returns the service for which excavation depth is offered.
    pub fn patio_service_config_id(&self) -> &str {
        &self.patio_service_config_id
    }
}
