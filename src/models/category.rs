//! Material category model and calculation methods.
//!
//! A category describes one material need of a service (base rock, pavers,
//! edging, ...) and declares which physical calculation applies to it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The physical calculation a category's materials are quantified with.
///
/// Catalogs store the method as a string. Unknown strings are preserved in
/// [`CalculationMethod::Unrecognized`] so that the category can be skipped
/// with a warning naming the offending value.
///
/// # Example
///
/// ```
/// use materials_engine::models::CalculationMethod;
///
/// let method: CalculationMethod = serde_json::from_str("\"volume_depth\"").unwrap();
/// assert_eq!(method, CalculationMethod::VolumeDepth);
///
/// let method: CalculationMethod = serde_json::from_str("\"weight_tonnage\"").unwrap();
/// assert_eq!(method, CalculationMethod::Unrecognized("weight_tonnage".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CalculationMethod {
    /// Depth x area, sold by the cubic yard.
    VolumeDepth,
    /// Direct area coverage, sold per square foot or per package.
    AreaCoverage,
    /// Estimated perimeter, sold in fixed-length sections.
    LinearPerimeter,
    /// A method string this engine does not know how to calculate.
    Unrecognized(String),
}

impl CalculationMethod {
    /// Returns the catalog string for this method.
    pub fn as_str(&self) -> &str {
        match self {
            CalculationMethod::VolumeDepth => "volume_depth",
            CalculationMethod::AreaCoverage => "area_coverage",
            CalculationMethod::LinearPerimeter => "linear_perimeter",
            CalculationMethod::Unrecognized(raw) => raw,
        }
    }
}

impl From<String> for CalculationMethod {
    fn from(value: String) -> Self {
        match value.as_str() {
            "volume_depth" => CalculationMethod::VolumeDepth,
            "area_coverage" => CalculationMethod::AreaCoverage,
            "linear_perimeter" => CalculationMethod::LinearPerimeter,
            _ => CalculationMethod::Unrecognized(value),
        }
    }
}

impl From<CalculationMethod> for String {
    fn from(method: CalculationMethod) -> Self {
        method.as_str().to_string()
    }
}

/// A classification of material need for a service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialCategory {
    /// Stable identifier used as the selection key (e.g., "base_rock").
    pub key: String,
    /// Human-readable label (e.g., "Base Rock").
    pub label: String,
    /// How quantities are calculated for this category.
    pub calculation_method: CalculationMethod,
    /// Default depth in inches for depth-based categories.
    #[serde(default)]
    pub default_depth_inches: Option<Decimal>,
    /// Whether the service needs a material from this category.
    #[serde(default)]
    pub required: bool,
    /// Display and calculation order within the service.
    #[serde(default)]
    pub sort_order: u32,
}
