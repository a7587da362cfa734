//! Material cost orchestration.
//!
//! This module calculates every material category of a service, dispatching
//! each category to the calculator matching its calculation method, and
//! aggregates the results into a single cost breakdown.

use std::collections::BTreeMap;
use std::time::Instant;

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::catalog::MaterialCatalog;
use crate::error::EngineResult;
use crate::models::{
    AuditStep, AuditTrace, AuditWarning, CalculationMethod, CategoryCalculationResult,
    CategoryDisplay, MaterialCalculationInput, MaterialCalculationResult, MaterialCategory,
    MaterialQuantityResult, ServiceMaterial,
};

use super::area::{AreaParameters, calculate_area_material};
use super::linear::{LinearParameters, calculate_linear_material};
use super::rounding::format_money;
use super::selection::resolve_material;
use super::volume::{VolumeParameters, calculate_volume_material};

/// Warning code for a category with neither a selected nor a default material.
pub const WARNING_MATERIAL_UNRESOLVED: &str = "MATERIAL_UNRESOLVED";

/// Warning code for a category whose calculation method is not supported.
pub const WARNING_UNKNOWN_CALCULATION_METHOD: &str = "UNKNOWN_CALCULATION_METHOD";

/// Warning code for a category whose material lookup failed.
pub const WARNING_MATERIAL_LOOKUP_FAILED: &str = "MATERIAL_LOOKUP_FAILED";

/// Calculates the quantity and cost of every material category of a service.
///
/// Categories are processed in catalog order. For each category the selected
/// material (or else the category default) is calculated with the category's
/// calculation method. A category is skipped, with a warning in the audit
/// trace, when:
/// - its calculation method is not recognized
/// - no material resolves for it
/// - its material lookup fails
///
/// # Arguments
///
/// * `catalog` - The catalog categories and materials are read from
/// * `input` - Project size, material selections, and optional measured perimeter
/// * `company_id` - The company owning the service
/// * `service_config_id` - The service being estimated
///
/// # Errors
///
/// Returns [`EngineError::CatalogUnavailable`](crate::error::EngineError::CatalogUnavailable)
/// when the category list cannot be fetched. No other failure aborts the
/// calculation.
///
/// # Examples
///
/// ```no_run
/// use materials_engine::calculation::calculate_all_material_costs;
/// use materials_engine::config::ConfigLoader;
/// use materials_engine::models::MaterialCalculationInput;
/// use rust_decimal::Decimal;
///
/// # async fn run() -> materials_engine::error::EngineResult<()> {
/// let catalog = ConfigLoader::load("./config/default")?.catalog();
/// let input = MaterialCalculationInput::new(Decimal::new(360, 0));
///
/// let result =
///     calculate_all_material_costs(&catalog, &input, "acme_landscaping", "paver_patio").await?;
/// println!("{}", result.breakdown);
/// # Ok(())
/// # }
/// ```
pub async fn calculate_all_material_costs<C: MaterialCatalog + ?Sized>(
    catalog: &C,
    input: &MaterialCalculationInput,
    company_id: &str,
    service_config_id: &str,
) -> EngineResult<MaterialCalculationResult> {
    let start_time = Instant::now();
    let square_footage = input.square_footage;

    let categories = catalog
        .fetch_categories_for_service(company_id, service_config_id)
        .await?;

    if categories.is_empty() {
        warn!(
            company_id = %company_id,
            service_config_id = %service_config_id,
            "Service has no material categories"
        );
    }

    let mut results: Vec<CategoryCalculationResult> = Vec::new();
    let mut steps: Vec<AuditStep> = Vec::new();
    let mut warnings: Vec<AuditWarning> = Vec::new();
    let mut step_number: u32 = 1;

    for category in categories {
        if let CalculationMethod::Unrecognized(method) = &category.calculation_method {
            warn!(
                category = %category.key,
                method = %method,
                "Unknown calculation method, skipping category"
            );
            warnings.push(AuditWarning {
                code: WARNING_UNKNOWN_CALCULATION_METHOD.to_string(),
                message: format!(
                    "Category '{}' uses unknown calculation method '{}'",
                    category.key, method
                ),
                severity: "medium".to_string(),
            });
            continue;
        }

        let material = match resolve_material(
            catalog,
            &input.selected_materials,
            company_id,
            service_config_id,
            &category.key,
        )
        .await
        {
            Ok(Some(material)) => material,
            Ok(None) => {
                warn!(category = %category.key, "No material resolved, skipping category");
                warnings.push(AuditWarning {
                    code: WARNING_MATERIAL_UNRESOLVED.to_string(),
                    message: format!(
                        "No selected or default material for category '{}'",
                        category.key
                    ),
                    severity: if category.required { "high" } else { "low" }.to_string(),
                });
                continue;
            }
            Err(err) => {
                warn!(
                    category = %category.key,
                    error = %err,
                    "Material lookup failed, skipping category"
                );
                warnings.push(AuditWarning {
                    code: WARNING_MATERIAL_LOOKUP_FAILED.to_string(),
                    message: format!("Material lookup for category '{}' failed: {}", category.key, err),
                    severity: "high".to_string(),
                });
                continue;
            }
        };

        let quantity = match &category.calculation_method {
            CalculationMethod::VolumeDepth => {
                calculate_volume_material(square_footage, &material, &category)
            }
            CalculationMethod::AreaCoverage => calculate_area_material(square_footage, &material),
            CalculationMethod::LinearPerimeter => {
                calculate_linear_material(square_footage, &material, input.custom_perimeter)
            }
            CalculationMethod::Unrecognized(_) => continue,
        };

        debug!(
            category = %category.key,
            material_id = %material.id,
            units = %quantity.purchase_units_rounded,
            total_cost = %quantity.total_cost,
            "Calculated material category"
        );

        steps.push(build_audit_step(
            step_number,
            square_footage,
            input.custom_perimeter,
            &category,
            &material,
            &quantity,
        ));
        step_number += 1;

        results.push(CategoryCalculationResult {
            subtotal: quantity.total_cost,
            category,
            material,
            quantity,
        });
    }

    let total_cost: Decimal = results.iter().map(|r| r.subtotal).sum();
    let cost_per_square_foot = if square_footage > Decimal::ZERO {
        total_cost / square_footage
    } else {
        Decimal::ZERO
    };

    let breakdown = results
        .iter()
        .map(|r| {
            format!(
                "{}: {} = ${}",
                r.category.label,
                r.quantity.display_text,
                format_money(r.subtotal)
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let category_displays: BTreeMap<String, CategoryDisplay> = results
        .iter()
        .map(|r| {
            (
                r.category.key.clone(),
                CategoryDisplay {
                    units_needed: r.quantity.purchase_units_rounded,
                    unit_label: r.quantity.unit_label.clone(),
                    display_text: r.quantity.display_text.clone(),
                },
            )
        })
        .collect();

    Ok(MaterialCalculationResult {
        square_footage,
        categories: results,
        total_cost,
        cost_per_square_foot,
        breakdown,
        category_displays,
        audit_trace: AuditTrace {
            steps,
            warnings,
            duration_us: start_time.elapsed().as_micros() as u64,
        },
    })
}

/// Records one category calculation with the parameters its calculator resolved.
fn build_audit_step(
    step_number: u32,
    square_footage: Decimal,
    custom_perimeter: Option<Decimal>,
    category: &MaterialCategory,
    material: &ServiceMaterial,
    quantity: &MaterialQuantityResult,
) -> AuditStep {
    let (rule_name, input) = match &category.calculation_method {
        CalculationMethod::VolumeDepth => {
            let params = VolumeParameters::resolve(material, category);
            (
                "Volume Material",
                serde_json::json!({
                    "square_footage": square_footage.normalize().to_string(),
                    "depth_inches": params.depth_inches.normalize().to_string(),
                    "compaction_factor_percentage": params.compaction_factor_percentage.normalize().to_string(),
                    "waste_factor_percentage": params.waste_factor_percentage.normalize().to_string(),
                    "price_per_unit": material.price_per_unit.normalize().to_string()
                }),
            )
        }
        CalculationMethod::AreaCoverage => {
            let params = AreaParameters::resolve(material);
            (
                "Area Material",
                serde_json::json!({
                    "square_footage": square_footage.normalize().to_string(),
                    "package_coverage": params.package_coverage.map(|c| c.normalize().to_string()),
                    "waste_factor_percentage": params.waste_factor_percentage.normalize().to_string(),
                    "price_per_unit": material.price_per_unit.normalize().to_string()
                }),
            )
        }
        CalculationMethod::LinearPerimeter => {
            let params = LinearParameters::resolve(material);
            (
                "Linear Material",
                serde_json::json!({
                    "square_footage": square_footage.normalize().to_string(),
                    "custom_perimeter": custom_perimeter.map(|p| p.normalize().to_string()),
                    "section_length_feet": params.section_length_feet.normalize().to_string(),
                    "waste_factor_percentage": params.waste_factor_percentage.normalize().to_string(),
                    "price_per_unit": material.price_per_unit.normalize().to_string()
                }),
            )
        }
        CalculationMethod::Unrecognized(_) => ("Unrecognized Material", serde_json::json!({})),
    };

    AuditStep {
        step_number,
        rule_id: category.calculation_method.as_str().to_string(),
        rule_name: rule_name.to_string(),
        category_key: category.key.clone(),
        input,
        output: serde_json::json!({
            "material_id": material.id,
            "purchase_units": quantity.purchase_units.normalize().to_string(),
            "purchase_units_rounded": quantity.purchase_units_rounded.normalize().to_string(),
            "total_cost": quantity.total_cost.normalize().to_string()
        }),
        reasoning: format!(
            "{} x ${} = ${}",
            quantity.display_text,
            quantity.unit_cost.normalize(),
            format_money(quantity.total_cost)
        ),
    }
}
