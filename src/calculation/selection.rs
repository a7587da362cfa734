//! Material selection resolution.

use std::collections::HashMap;

use tracing::warn;

use crate::catalog::MaterialCatalog;
use crate::error::EngineResult;
use crate::models::ServiceMaterial;

/// Resolves the material to use for a category.
///
/// The selected material wins when a selection exists for the category key
/// and the material is found under that same category. Otherwise the category's default material is
/// used. Returns `Ok(None)` when neither resolves.
///
/// # Errors
///
/// Propagates catalog errors from either lookup.
pub async fn resolve_material<C: MaterialCatalog + ?Sized>(
    catalog: &C,
    selected_materials: &HashMap<String, String>,
    company_id: &str,
    service_config_id: &str,
    category_key: &str,
) -> EngineResult<Option<ServiceMaterial>> {
    if let Some(material_id) = selected_materials.get(category_key) {
        match catalog.fetch_material_by_id(material_id).await? {
            Some(material) if material.category_key == category_key => {
                return Ok(Some(material));
            }
            Some(material) => warn!(
                category = %category_key,
                material_id = %material_id,
                material_category = %material.category_key,
                "Selected material belongs to another category, using category default"
            ),
            None => warn!(
                category = %category_key,
                material_id = %material_id,
                "Selected material not found, using category default"
            ),
        }
    }

    catalog
        .fetch_default_material(company_id, service_config_id, category_key)
        .await
}
