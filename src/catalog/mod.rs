//! Material catalog access.
//!
//! The calculators never read a store themselves. The cost orchestrator and
//! the excavation depth estimate read categories and materials through the
//! [`MaterialCatalog`] trait, so that they can run against any backing store.

mod in_memory;

use async_trait::async_trait;

use crate::error::EngineResult;
use crate::models::{MaterialCategory, ServiceMaterial};

pub use in_memory::InMemoryCatalog;

/// Read-only access to the categories and materials of a company's services.
///
/// Implementations report store failures as
/// [`EngineError::CatalogUnavailable`](crate::error::EngineError::CatalogUnavailable).
/// Retry and backoff, if any, belong to the implementation.
#[async_trait]
pub trait MaterialCatalog: Send + Sync {
    /// Returns the categories of a service in calculation order.
    async fn fetch_categories_for_service(
        &self,
        company_id: &str,
        service_config_id: &str,
    ) -> EngineResult<Vec<MaterialCategory>>;

    /// Returns a material by id, or `None` if it does not exist.
    async fn fetch_material_by_id(
        &self,
        material_id: &str,
    ) -> EngineResult<Option<ServiceMaterial>>;

    /// Returns the default material of a category, or `None` if it has none.
    async fn fetch_default_material(
        &self,
        company_id: &str,
        service_config_id: &str,
        category_key: &str,
    ) -> EngineResult<Option<ServiceMaterial>>;
}
