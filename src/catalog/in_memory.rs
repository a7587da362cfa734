//! In-memory material catalog.
//!
//! This module provides [`InMemoryCatalog`], a [`MaterialCatalog`] backed by
//! service catalogs loaded from configuration.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::config::ServiceCatalog;
use crate::error::EngineResult;
use crate::models::{MaterialCategory, ServiceMaterial};

use super::MaterialCatalog;

/// A catalog held entirely in memory.
///
/// Categories are kept per `(company_id, service_config_id)` sorted by their
/// `sort_order`. Material ids are unique across the whole catalog.
///
/// # Example
///
/// ```no_run
/// use materials_engine::catalog::MaterialCatalog;
/// use materials_engine::config::ConfigLoader;
///
/// # async fn run() -> materials_engine::error::EngineResult<()> {
/// let loader = ConfigLoader::load("./config/default")?;
/// let catalog = loader.catalog();
/// let categories = catalog
///     .fetch_categories_for_service("acme_landscaping", "paver_patio")
///     .await?;
/// println!("{} categories", categories.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    services: HashMap<(String, String), ServiceEntry>,
    materials: HashMap<String, ServiceMaterial>,
}

#[derive(Debug, Clone)]
struct ServiceEntry {
    categories: Vec<MaterialCategory>,
    material_ids: Vec<String>,
}

impl InMemoryCatalog {
    /// Builds a catalog from service catalogs.
    ///
    /// A later service catalog with the same company and service replaces an
    /// earlier one.
    pub fn new(catalogs: impl IntoIterator<Item = ServiceCatalog>) -> Self {
        let mut services = HashMap::new();
        let mut materials = HashMap::new();

        for catalog in catalogs {
            let mut categories = catalog.categories;
            categories.sort_by_key(|c| c.sort_order);

            let material_ids = catalog.materials.iter().map(|m| m.id.clone()).collect();
            for material in catalog.materials {
                materials.insert(material.id.clone(), material);
            }

            services.insert(
                (catalog.company_id, catalog.service_config_id),
                ServiceEntry {
                    categories,
                    material_ids,
                },
            );
        }

        Self {
            services,
            materials,
        }
    }

    /// Returns the number of services in the catalog.
    pub fn service_count(&self) -> usize {
        self.services.len()
    }

    fn service(&self, company_id: &str, service_config_id: &str) -> Option<&ServiceEntry> {
        self.services
            .get(&(company_id.to_string(), service_config_id.to_string()))
    }
}

#[async_trait]
impl MaterialCatalog for InMemoryCatalog {
    async fn fetch_categories_for_service(
        &self,
        company_id: &str,
        service_config_id: &str,
    ) -> EngineResult<Vec<MaterialCategory>> {
        Ok(self
            .service(company_id, service_config_id)
            .map(|entry| entry.categories.clone())
            .unwrap_or_default())
    }

    async fn fetch_material_by_id(
        &self,
        material_id: &str,
    ) -> EngineResult<Option<ServiceMaterial>> {
        Ok(self.materials.get(material_id).cloned())
    }

    async fn fetch_default_material(
        &self,
        company_id: &str,
        service_config_id: &str,
        category_key: &str,
    ) -> EngineResult<Option<ServiceMaterial>> {
        let Some(entry) = self.service(company_id, service_config_id) else {
            return Ok(None);
        };

        Ok(entry
            .material_ids
            .iter()
            .filter_map(|id| self.materials.get(id))
            .find(|m| m.category_key == category_key && m.is_default)
            .cloned())
    }
}
