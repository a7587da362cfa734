//! Volume material calculation.
//!
//! Bulk and base materials (base rock, sand, gravel) are installed to a depth
//! and sold by the cubic yard. Compaction is applied before waste: material
//! settles after placement, and the waste allowance covers the settled volume.

use rust_decimal::Decimal;

use crate::models::{MaterialCategory, MaterialQuantityResult, ServiceMaterial};

use super::adjustments::{DEFAULT_WASTE_FACTOR_PERCENTAGE, apply_percentage};
use super::rounding::{round_up_to_tenth, settle_quantity};
use super::unit_label::unit_label;

/// Depth used when neither the category nor the material specifies one.
pub const DEFAULT_VOLUME_DEPTH_INCHES: Decimal = Decimal::from_parts(6, 0, 0, false, 0);

const INCHES_PER_FOOT: Decimal = Decimal::from_parts(12, 0, 0, false, 0);
const CUBIC_FEET_PER_CUBIC_YARD: Decimal = Decimal::from_parts(27, 0, 0, false, 0);

/// The effective parameters of a volume calculation after defaults are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VolumeParameters {
    /// Installed depth in inches.
    pub depth_inches: Decimal,
    /// Compaction allowance as a percentage.
    pub compaction_factor_percentage: Decimal,
    /// Waste allowance as a percentage.
    pub waste_factor_percentage: Decimal,
}

impl VolumeParameters {
    /// Resolves the effective parameters for a material in a category.
    ///
    /// Depth precedence is the category default depth, then the material's
    /// coverage depth, then [`DEFAULT_VOLUME_DEPTH_INCHES`]. Compaction
    /// defaults to 0% and waste to 10%.
    pub fn resolve(material: &ServiceMaterial, category: &MaterialCategory) -> Self {
        Self {
            depth_inches: category
                .default_depth_inches
                .or(material.coverage_depth_inches)
                .unwrap_or(DEFAULT_VOLUME_DEPTH_INCHES),
            compaction_factor_percentage: material
                .compaction_factor_percentage
                .unwrap_or(Decimal::ZERO),
            waste_factor_percentage: material
                .waste_factor_percentage
                .unwrap_or(DEFAULT_WASTE_FACTOR_PERCENTAGE),
        }
    }
}

/// Calculates the cubic yards and cost of a depth-based bulk material.
///
/// # Arguments
///
/// * `square_footage` - The project area in square feet
/// * `material` - The material being purchased
/// * `category` - The material's category, which may carry a default depth
///
/// # Calculation
///
/// 1. `cubic_feet = square_footage * depth_inches / 12`
/// 2. `cubic_yards = cubic_feet / 27`
/// 3. `with_compaction = cubic_yards * (1 + compaction / 100)`
/// 4. `with_waste = with_compaction * (1 + waste / 100)`
/// 5. Purchase units are `with_waste` (sold per cubic yard), rounded up to
///    the nearest tenth.
///
/// # Examples
///
/// ```
/// use materials_engine::calculation::calculate_volume_material;
/// use materials_engine::models::{CalculationMethod, MaterialCategory, ServiceMaterial};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let dec = |s: &str| Decimal::from_str(s).unwrap();
///
/// let category = MaterialCategory {
///     key: "base_rock".to_string(),
///     label: "Base Rock".to_string(),
///     calculation_method: CalculationMethod::VolumeDepth,
///     default_depth_inches: None,
///     required: true,
///     sort_order: 1,
/// };
/// let material = ServiceMaterial {
///     id: "mat_base_rock".to_string(),
///     category_key: "base_rock".to_string(),
///     name: "Crushed Base".to_string(),
///     unit_type: "cubic_yard".to_string(),
///     price_per_unit: dec("36.75"),
///     coverage_per_unit: None,
///     coverage_depth_inches: Some(dec("6")),
///     thickness_inches: None,
///     waste_factor_percentage: Some(dec("10")),
///     compaction_factor_percentage: Some(dec("20")),
///     is_default: true,
/// };
///
/// let result = calculate_volume_material(dec("360"), &material, &category);
/// assert_eq!(result.purchase_units_rounded, dec("8.8"));
/// assert_eq!(result.total_cost, dec("323.40"));
/// assert_eq!(result.display_text, "8.8 cubic yards");
/// ```
pub fn calculate_volume_material(
    square_footage: Decimal,
    material: &ServiceMaterial,
    category: &MaterialCategory,
) -> MaterialQuantityResult {
    let params = VolumeParameters::resolve(material, category);

    let cubic_feet = square_footage * params.depth_inches / INCHES_PER_FOOT;
    let cubic_yards = cubic_feet / CUBIC_FEET_PER_CUBIC_YARD;
    let with_compaction = apply_percentage(cubic_yards, params.compaction_factor_percentage);
    let with_waste = apply_percentage(with_compaction, params.waste_factor_percentage);

    let purchase_units = settle_quantity(with_waste);
    let purchase_units_rounded = round_up_to_tenth(purchase_units);
    let total_cost = purchase_units_rounded * material.price_per_unit;

    let label = unit_label(&material.unit_type, material.coverage_per_unit);
    let display_text = format!("{} {}", purchase_units_rounded.normalize(), label);

    MaterialQuantityResult {
        quantity_needed: cubic_yards,
        quantity_with_waste: with_waste,
        quantity_with_compaction: Some(with_compaction),
        purchase_units,
        purchase_units_rounded,
        unit_cost: material.price_per_unit,
        total_cost,
        unit_label: label,
        display_text,
        waste_factor_percentage: params.waste_factor_percentage,
        compaction_factor_percentage: params.compaction_factor_percentage,
    }
}
