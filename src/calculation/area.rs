//! Area coverage material calculation.
//!
//! Surface materials must cover the whole project area. They are sold either
//! per square foot or in packages (rolls, pallets) that each cover a fixed
//! area. No compaction applies to surface materials.

use rust_decimal::Decimal;

use crate::models::{MaterialQuantityResult, ServiceMaterial};

use super::adjustments::{DEFAULT_WASTE_FACTOR_PERCENTAGE, apply_percentage};
use super::rounding::{round_up_to_tenth, settle_quantity};
use super::unit_label::unit_label;

/// The effective parameters of an area calculation after defaults are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AreaParameters {
    /// Square feet covered by one package, or `None` when sold per square foot.
    pub package_coverage: Option<Decimal>,
    /// Waste allowance as a percentage.
    pub waste_factor_percentage: Decimal,
}

impl AreaParameters {
    /// Resolves the effective parameters for a material.
    ///
    /// A coverage per unit greater than 1 marks a packaged good; anything
    /// else is sold per square foot. Waste defaults to 10%.
    pub fn resolve(material: &ServiceMaterial) -> Self {
        Self {
            package_coverage: material
                .coverage_per_unit
                .filter(|coverage| *coverage > Decimal::ONE),
            waste_factor_percentage: material
                .waste_factor_percentage
                .unwrap_or(DEFAULT_WASTE_FACTOR_PERCENTAGE),
        }
    }
}

/// Calculates the quantity and cost of a surface coverage material.
///
/// # Arguments
///
/// * `square_footage` - The project area in square feet
/// * `material` - The material being purchased
///
/// # Calculation
///
/// 1. `with_waste = square_footage * (1 + waste / 100)`
/// 2. Packaged goods: `purchase_units = with_waste / coverage_per_unit`;
///    otherwise `purchase_units = with_waste`.
/// 3. Purchase units are rounded up to the nearest tenth and priced per unit.
///
/// # Examples
///
/// ```
/// use materials_engine::calculation::calculate_area_material;
/// use materials_engine::models::ServiceMaterial;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let dec = |s: &str| Decimal::from_str(s).unwrap();
///
/// let fabric = ServiceMaterial {
///     id: "mat_fabric".to_string(),
///     category_key: "geotextile".to_string(),
///     name: "Weed Barrier Fabric".to_string(),
///     unit_type: "roll".to_string(),
///     price_per_unit: dec("199.66"),
///     coverage_per_unit: Some(dec("1800")),
///     coverage_depth_inches: None,
///     thickness_inches: None,
///     waste_factor_percentage: Some(dec("15")),
///     compaction_factor_percentage: None,
///     is_default: true,
/// };
///
/// let result = calculate_area_material(dec("100"), &fabric);
/// assert_eq!(result.purchase_units_rounded, dec("0.1"));
/// assert_eq!(result.display_text, "0.1 rolls (180 sqft coverage)");
/// ```
pub fn calculate_area_material(
    square_footage: Decimal,
    material: &ServiceMaterial,
) -> MaterialQuantityResult {
    let params = AreaParameters::resolve(material);

    let needed_sqft = square_footage;
    let with_waste = apply_percentage(needed_sqft, params.waste_factor_percentage);

    let purchase_units = match params.package_coverage {
        Some(coverage) => settle_quantity(with_waste / coverage),
        None => settle_quantity(with_waste),
    };
    let purchase_units_rounded = round_up_to_tenth(purchase_units);
    let total_cost = purchase_units_rounded * material.price_per_unit;

    let label = unit_label(&material.unit_type, material.coverage_per_unit);
    let display_text = match params.package_coverage {
        Some(coverage) => format!(
            "{} {} ({} sqft coverage)",
            purchase_units_rounded.normalize(),
            label,
            (purchase_units_rounded * coverage).normalize()
        ),
        None => format!("{} {}", purchase_units_rounded.normalize(), label),
    };

    MaterialQuantityResult {
        quantity_needed: needed_sqft,
        quantity_with_waste: with_waste,
        quantity_with_compaction: None,
        purchase_units,
        purchase_units_rounded,
        unit_cost: material.price_per_unit,
        total_cost,
        unit_label: label,
        display_text,
        waste_factor_percentage: params.waste_factor_percentage,
        compaction_factor_percentage: Decimal::ZERO,
    }
}
