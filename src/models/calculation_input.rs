//! Calculation input model.
//!
//! Defines the project parameters a material cost calculation is made for.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Largest project size accepted, in square feet.
pub const MAX_SQUARE_FOOTAGE: Decimal = Decimal::from_parts(10_000_000, 0, 0, false, 0);

/// Largest custom perimeter accepted, in linear feet.
pub const MAX_CUSTOM_PERIMETER: Decimal = Decimal::from_parts(10_000_000, 0, 0, false, 0);

/// Project parameters for a full material cost calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialCalculationInput {
    /// Project size in square feet.
    pub square_footage: Decimal,
    /// Selected material id per category key. Missing keys use the category default.
    #[serde(default)]
    pub selected_materials: HashMap<String, String>,
    /// Measured perimeter in linear feet, overriding the estimate for linear materials.
    #[serde(default)]
    pub custom_perimeter: Option<Decimal>,
}

impl MaterialCalculationInput {
    /// Creates an input with no selections and no custom perimeter.
    pub fn new(square_footage: Decimal) -> Self {
        Self {
            square_footage,
            selected_materials: HashMap::new(),
            custom_perimeter: None,
        }
    }

    /// Checks that the project size and custom perimeter are positive and
    /// no larger than [`MAX_SQUARE_FOOTAGE`] and [`MAX_CUSTOM_PERIMETER`].
    ///
    /// # Example
    ///
    /// ```
    /// use materials_engine::models::MaterialCalculationInput;
    /// use rust_decimal::Decimal;
    ///
    /// assert!(MaterialCalculationInput::new(Decimal::new(360, 0)).validate().is_ok());
    /// assert!(MaterialCalculationInput::new(Decimal::ZERO).validate().is_err());
    /// ```
    pub fn validate(&self) -> EngineResult<()> {
        if self.square_footage <= Decimal::ZERO {
            return Err(EngineError::InvalidInput {
                field: "square_footage".to_string(),
                message: format!("must be greater than zero, got {}", self.square_footage),
            });
        }

        if self.square_footage > MAX_SQUARE_FOOTAGE {
            return Err(EngineError::InvalidInput {
                field: "square_footage".to_string(),
                message: format!(
                    "must not exceed {}, got {}",
                    MAX_SQUARE_FOOTAGE, self.square_footage
                ),
            });
        }

        if let Some(perimeter) = self.custom_perimeter {
            if perimeter <= Decimal::ZERO {
                return Err(EngineError::InvalidInput {
                    field: "custom_perimeter".to_string(),
                    message: format!("must be greater than zero, got {}", perimeter),
                });
            }

            if perimeter > MAX_CUSTOM_PERIMETER {
                return Err(EngineError::InvalidInput {
                    field: "custom_perimeter".to_string(),
                    message: format!("must not exceed {}, got {}", MAX_CUSTOM_PERIMETER, perimeter),
                });
            }
        }

        Ok(())
    }
}
