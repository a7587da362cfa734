//! Core data models for the Materials Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod calculation_input;
mod calculation_result;
mod category;
mod excavation;
mod material;

pub use calculation_input::{MAX_CUSTOM_PERIMETER, MAX_SQUARE_FOOTAGE, MaterialCalculationInput};
pub use calculation_result::{
    AuditStep, AuditTrace, AuditWarning, CategoryCalculationResult, CategoryDisplay,
    MaterialCalculationResult, MaterialQuantityResult,
};
pub use category::{CalculationMethod, MaterialCategory};
pub use excavation::ExcavationDepth;
pub use material::ServiceMaterial;
