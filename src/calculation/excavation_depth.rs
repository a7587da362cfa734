//! Paver patio excavation depth.
//!
//! The excavation depth of a paver patio is the stacked depth of its base
//! rock, clean rock, and pavers plus a fixed buffer. Each depth comes from
//! the selected (or default) material of its category.

use std::collections::HashMap;

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::catalog::MaterialCatalog;
use crate::error::EngineResult;
use crate::models::{ExcavationDepth, ServiceMaterial};

use super::selection::resolve_material;

/// Category key of the base rock layer.
pub const BASE_ROCK_CATEGORY_KEY: &str = "base_rock";

/// Category key of the clean rock layer.
pub const CLEAN_ROCK_CATEGORY_KEY: &str = "clean_rock";

/// Category key of the paver layer.
pub const PAVER_CATEGORY_KEY: &str = "pavers";

/// Base rock depth in inches when no material provides one.
pub const DEFAULT_BASE_ROCK_INCHES: Decimal = Decimal::from_parts(6, 0, 0, false, 0);

/// Clean rock depth in inches when no material provides one.
pub const DEFAULT_CLEAN_ROCK_INCHES: Decimal = Decimal::from_parts(2, 0, 0, false, 0);

/// Paver thickness in inches when no material provides one.
pub const DEFAULT_PAVER_THICKNESS_INCHES: Decimal = Decimal::from_parts(1, 0, 0, false, 0);

/// Extra depth in inches added below the stacked layers.
pub const EXCAVATION_BUFFER_INCHES: Decimal = Decimal::from_parts(15, 0, 0, false, 1);

/// Estimates how deep to excavate for a paver patio.
///
/// Base and clean rock contribute their material's `coverage_depth_inches`,
/// pavers contribute their `thickness_inches`. A layer whose material does
/// not resolve, or does not carry the depth, uses its default. If any catalog
/// lookup fails, every layer uses its default.
///
/// This estimate never fails.
///
/// # Examples
///
/// ```
/// use materials_engine::calculation::calculate_patio_excavation_depth;
/// use materials_engine::catalog::InMemoryCatalog;
/// use rust_decimal::Decimal;
/// use std::collections::HashMap;
///
/// let runtime = tokio::runtime::Runtime::new().unwrap();
/// let catalog = InMemoryCatalog::default();
///
/// let depth = runtime.block_on(calculate_patio_excavation_depth(
///     &catalog,
///     &HashMap::new(),
///     "acme_landscaping",
///     "paver_patio",
/// ));
///
/// assert_eq!(depth.depth_inches, Decimal::new(105, 1));
/// assert_eq!(depth.breakdown, "Base rock 6\" + Clean rock 2\" + Pavers 1\" + Buffer 1.5\" = 10.5\"");
/// ```
pub async fn calculate_patio_excavation_depth<C: MaterialCatalog + ?Sized>(
    catalog: &C,
    selected_materials: &HashMap<String, String>,
    company_id: &str,
    service_config_id: &str,
) -> ExcavationDepth {
    let (base_rock_inches, clean_rock_inches, paver_thickness_inches) =
        match resolve_layer_depths(catalog, selected_materials, company_id, service_config_id)
            .await
        {
            Ok(depths) => depths,
            Err(err) => {
                warn!(
                    company_id = %company_id,
                    service_config_id = %service_config_id,
                    error = %err,
                    "Excavation depth lookup failed, using default depths"
                );
                (
                    DEFAULT_BASE_ROCK_INCHES,
                    DEFAULT_CLEAN_ROCK_INCHES,
                    DEFAULT_PAVER_THICKNESS_INCHES,
                )
            }
        };

    let depth_inches = base_rock_inches
        + clean_rock_inches
        + paver_thickness_inches
        + EXCAVATION_BUFFER_INCHES;

    let breakdown = format!(
        "Base rock {}\" + Clean rock {}\" + Pavers {}\" + Buffer {}\" = {}\"",
        base_rock_inches.normalize(),
        clean_rock_inches.normalize(),
        paver_thickness_inches.normalize(),
        EXCAVATION_BUFFER_INCHES.normalize(),
        depth_inches.normalize()
    );

    debug!(depth_inches = %depth_inches, "Calculated excavation depth");

    ExcavationDepth {
        depth_inches,
        breakdown,
        base_rock_inches,
        clean_rock_inches,
        paver_thickness_inches,
        buffer_inches: EXCAVATION_BUFFER_INCHES,
    }
}

async fn resolve_layer_depths<C: MaterialCatalog + ?Sized>(
    catalog: &C,
    selected_materials: &HashMap<String, String>,
    company_id: &str,
    service_config_id: &str,
) -> EngineResult<(Decimal, Decimal, Decimal)> {
    let base_rock = resolve_material(
        catalog,
        selected_materials,
        company_id,
        service_config_id,
        BASE_ROCK_CATEGORY_KEY,
    )
    .await?;
    let clean_rock = resolve_material(
        catalog,
        selected_materials,
        company_id,
        service_config_id,
        CLEAN_ROCK_CATEGORY_KEY,
    )
    .await?;
    let pavers = resolve_material(
        catalog,
        selected_materials,
        company_id,
        service_config_id,
        PAVER_CATEGORY_KEY,
    )
    .await?;

    Ok((
        layer_depth(base_rock, |m| m.coverage_depth_inches, DEFAULT_BASE_ROCK_INCHES),
        layer_depth(clean_rock, |m| m.coverage_depth_inches, DEFAULT_CLEAN_ROCK_INCHES),
        layer_depth(pavers, |m| m.thickness_inches, DEFAULT_PAVER_THICKNESS_INCHES),
    ))
}

fn layer_depth(
    material: Option<ServiceMaterial>,
    depth: impl Fn(&ServiceMaterial) -> Option<Decimal>,
    default: Decimal,
) -> Decimal {
    material.as_ref().and_then(depth).unwrap_or(default)
}
