//! Request types for the Materials Engine API.
//!
//! This module defines the JSON request structures for the
//! `/materials/calculate` and `/materials/excavation-depth` endpoints.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::MaterialCalculationInput;

/// Request body for the `/materials/calculate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaterialCalculationRequest {
    /// The company offering the service.
    pub company_id: String,
    /// The service being estimated.
    pub service_config_id: String,
    /// The project area in square feet.
    pub square_footage: Decimal,
    /// Selected material id per category key.
    #[serde(default)]
    pub selected_materials: HashMap<String, String>,
    /// A measured perimeter in linear feet.
    #[serde(default)]
    pub custom_perimeter: Option<Decimal>,
}

/// Request body for the `/materials/excavation-depth` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExcavationDepthRequest {
    /// The company offering the service.
    pub company_id: String,
    /// The paver patio service.
    pub service_config_id: String,
    /// Selected material id per category key.
    #[serde(default)]
    pub selected_materials: HashMap<String, String>,
}

impl MaterialCalculationRequest {
    /// Splits the request into its routing ids and the calculation input.
    pub fn into_parts(self) -> (String, String, MaterialCalculationInput) {
        (
            self.company_id,
            self.service_config_id,
            MaterialCalculationInput {
                square_footage: self.square_footage,
                selected_materials: self.selected_materials,
                custom_perimeter: self.custom_perimeter,
            },
        )
    }
}
