//! Linear perimeter material calculation.
//!
//! Edging-type materials run along the project perimeter and are sold in
//! fixed-length sections. When no measured perimeter is supplied it is
//! estimated from the area assuming a roughly square footprint.

use rust_decimal::{Decimal, MathematicalOps};

use crate::models::{MaterialQuantityResult, ServiceMaterial};

use super::adjustments::{DEFAULT_WASTE_FACTOR_PERCENTAGE, apply_percentage};
use super::rounding::{round_up_to_tenth, settle_quantity};
use super::unit_label::unit_label;

/// Perimeter-to-sqrt(area) ratio used to estimate a perimeter.
///
/// A true square has a ratio of 4.0; the extra 0.15 pads for irregular shapes.
pub const PERIMETER_SHAPE_FACTOR: Decimal = Decimal::from_parts(415, 0, 0, false, 2);

/// Section length in linear feet used when a material does not specify one.
pub const DEFAULT_SECTION_LENGTH_FEET: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// The effective parameters of a linear calculation after defaults are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinearParameters {
    /// Length of one purchase section in linear feet.
    pub section_length_feet: Decimal,
    /// Waste allowance as a percentage.
    pub waste_factor_percentage: Decimal,
}

impl LinearParameters {
    /// Resolves the effective parameters for a material.
    ///
    /// The section length is the material's coverage per unit when positive,
    /// otherwise [`DEFAULT_SECTION_LENGTH_FEET`]. Waste defaults to 10%.
    pub fn resolve(material: &ServiceMaterial) -> Self {
        Self {
            section_length_feet: material
                .coverage_per_unit
                .filter(|length| *length > Decimal::ZERO)
                .unwrap_or(DEFAULT_SECTION_LENGTH_FEET),
            waste_factor_percentage: material
                .waste_factor_percentage
                .unwrap_or(DEFAULT_WASTE_FACTOR_PERCENTAGE),
        }
    }
}

/// Estimates a project perimeter in linear feet from its area.
///
/// `perimeter = sqrt(square_footage) * 4.15`. Non-positive areas have no
/// perimeter.
pub fn estimate_perimeter(square_footage: Decimal) -> Decimal {
    square_footage
        .sqrt()
        .map(|side| side * PERIMETER_SHAPE_FACTOR)
        .unwrap_or(Decimal::ZERO)
}

/// Calculates the sections and cost of a perimeter material.
///
/// # Arguments
///
/// * `square_footage` - The project area in square feet
/// * `material` - The material being purchased
/// * `custom_perimeter` - A measured perimeter that replaces the estimate
///
/// # Calculation
///
/// 1. `perimeter = custom_perimeter` or `sqrt(square_footage) * 4.15`
/// 2. `with_waste = perimeter * (1 + waste / 100)`
/// 3. `purchase_units = with_waste / section_length`
/// 4. Purchase units are rounded up to the nearest tenth and priced per section.
///
/// # Examples
///
/// ```
/// use materials_engine::calculation::calculate_linear_material;
/// use materials_engine::models::ServiceMaterial;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let dec = |s: &str| Decimal::from_str(s).unwrap();
///
/// let edging = ServiceMaterial {
///     id: "mat_edging".to_string(),
///     category_key: "edging".to_string(),
///     name: "Paver Edge Restraint".to_string(),
///     unit_type: "eight_foot_sections".to_string(),
///     price_per_unit: dec("1.24"),
///     coverage_per_unit: Some(dec("8")),
///     coverage_depth_inches: None,
///     thickness_inches: None,
///     waste_factor_percentage: Some(dec("10")),
///     compaction_factor_percentage: None,
///     is_default: true,
/// };
///
/// let result = calculate_linear_material(dec("360"), &edging, None);
/// assert_eq!(result.purchase_units_rounded, dec("10.9"));
/// assert_eq!(result.display_text, "10.9 8ft sections (87.2 linear feet)");
/// ```
pub fn calculate_linear_material(
    square_footage: Decimal,
    material: &ServiceMaterial,
    custom_perimeter: Option<Decimal>,
) -> MaterialQuantityResult {
    let params = LinearParameters::resolve(material);

    let perimeter = custom_perimeter.unwrap_or_else(|| estimate_perimeter(square_footage));
    let with_waste = apply_percentage(perimeter, params.waste_factor_percentage);

    let purchase_units = settle_quantity(with_waste / params.section_length_feet);
    let purchase_units_rounded = round_up_to_tenth(purchase_units);
    let total_cost = purchase_units_rounded * material.price_per_unit;

    let label = unit_label(&material.unit_type, material.coverage_per_unit);
    let display_text = format!(
        "{} {} ({} linear feet)",
        purchase_units_rounded.normalize(),
        label,
        (purchase_units_rounded * params.section_length_feet).normalize()
    );

    MaterialQuantityResult {
        quantity_needed: perimeter,
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
