//! Calculation logic for the Materials Engine.
//!
//! This module contains the quantity and cost calculations for landscaping
//! materials: the round-up-to-tenth purchase rounding, unit label resolution,
//! the volume, area and linear calculators, the cost orchestrator that runs
//! every category of a service, and the paver patio excavation depth estimate.

mod adjustments;
mod area;
mod cost_breakdown;
mod excavation_depth;
mod linear;
mod rounding;
mod selection;
mod unit_label;
mod volume;

pub use adjustments::{DEFAULT_WASTE_FACTOR_PERCENTAGE, apply_percentage};
pub use area::{AreaParameters, calculate_area_material};
pub use cost_breakdown::{
    WARNING_MATERIAL_LOOKUP_FAILED, WARNING_MATERIAL_UNRESOLVED,
    WARNING_UNKNOWN_CALCULATION_METHOD, calculate_all_material_costs,
};
pub use excavation_depth::{
    BASE_ROCK_CATEGORY_KEY, CLEAN_ROCK_CATEGORY_KEY, DEFAULT_BASE_ROCK_INCHES,
    DEFAULT_CLEAN_ROCK_INCHES, DEFAULT_PAVER_THICKNESS_INCHES, EXCAVATION_BUFFER_INCHES,
    PAVER_CATEGORY_KEY, calculate_patio_excavation_depth,
};
pub use linear::{
    DEFAULT_SECTION_LENGTH_FEET, LinearParameters, PERIMETER_SHAPE_FACTOR,
    calculate_linear_material, estimate_perimeter,
};
pub use rounding::{QUANTITY_PRECISION_DP, format_money, round_up_to_tenth, settle_quantity};
pub use selection::resolve_material;
pub use unit_label::unit_label;
pub use volume::{DEFAULT_VOLUME_DEPTH_INCHES, VolumeParameters, calculate_volume_material};
