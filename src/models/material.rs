//! Service material model.
//!
//! This module defines [`ServiceMaterial`], a purchasable product within a
//! material category, together with its pricing and physical attributes.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A purchasable product within a material category.
///
/// All physical attributes are optional; each calculator resolves the
/// attributes it needs against its own defaults.
///
/// # Example
///
/// ```
/// use materials_engine::models::ServiceMaterial;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let material = ServiceMaterial {
///     id: "mat_base_rock".to_string(),
///     category_key: "base_rock".to_string(),
///     name: "3/4\" Crushed Base".to_string(),
///     unit_type: "cubic_yard".to_string(),
///     price_per_unit: Decimal::from_str("36.75").unwrap(),
///     coverage_per_unit: None,
///     coverage_depth_inches: Some(Decimal::from_str("6").unwrap()),
///     thickness_inches: None,
///     waste_factor_percentage: Some(Decimal::from_str("10").unwrap()),
///     compaction_factor_percentage: Some(Decimal::from_str("20").unwrap()),
///     is_default: true,
/// };
/// assert!(material.is_default);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceMaterial {
    /// Unique identifier for the material.
    pub id: String,
    /// The key of the category this material belongs to.
    pub category_key: String,
    /// Product name.
    pub name: String,
    /// Purchase unit code (e.g., "cubic_yard", "roll", "eight_foot_sections").
    pub unit_type: String,
    /// Price per purchase unit.
    pub price_per_unit: Decimal,
    /// Area or length one purchase unit covers. Absent or 1 means 1:1.
    #[serde(default)]
    pub coverage_per_unit: Option<Decimal>,
    /// Installed depth in inches for volume materials.
    #[serde(default)]
    pub coverage_depth_inches: Option<Decimal>,
    /// Product thickness in inches (pavers).
    #[serde(default)]
    pub thickness_inches: Option<Decimal>,
    /// Waste allowance as a percentage.
    #[serde(default)]
    pub waste_factor_percentage: Option<Decimal>,
    /// Compaction allowance as a percentage (volume materials only).
    #[serde(default)]
    pub compaction_factor_percentage: Option<Decimal>,
    /// Whether this is the category's default selection.
    #[serde(default)]
    pub is_default: bool,
}
