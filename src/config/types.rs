//! Configuration types for the materials engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::Deserialize;

use crate::models::{MaterialCategory, ServiceMaterial};

/// Metadata about the engine deployment.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineMetadata {
    /// The human-readable name of the engine.
    pub name: String,
    /// The version of the configuration.
    pub version: String,
    /// Socket address the HTTP server binds to.
    pub bind_address: String,
    /// The service for which an excavation depth estimate is offered.
    pub patio_service_config_id: String,
}

/// The categories and materials of one company's service.
///
/// Each file under `catalogs/` deserializes into one `ServiceCatalog`.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceCatalog {
    /// The company offering the service.
    pub company_id: String,
    /// The service identifier, unique per company.
    pub service_config_id: String,
    /// The human-readable name of the service.
    pub service_name: String,
    /// The material categories of the service.
    pub categories: Vec<MaterialCategory>,
    /// The purchasable materials of the service.
    pub materials: Vec<ServiceMaterial>,
}

/// The complete engine configuration.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    metadata: EngineMetadata,
    catalogs: Vec<ServiceCatalog>,
}

impl EngineConfig {
    /// Creates a new EngineConfig from its component parts.
    pub fn new(metadata: EngineMetadata, catalogs: Vec<ServiceCatalog>) -> Self {
        let mut sorted_catalogs = catalogs;
        sorted_catalogs.sort_by(|a, b| {
            (&a.company_id, &a.service_config_id).cmp(&(&b.company_id, &b.service_config_id))
        });
        Self {
            metadata,
            catalogs: sorted_catalogs,
        }
    }

    /// Returns the engine metadata.
    pub fn engine(&self) -> &EngineMetadata {
        &self.metadata
    }

    /// Returns all service catalogs ordered by company and service.
    pub fn catalogs(&self) -> &[ServiceCatalog] {
        &self.catalogs
    }
}
