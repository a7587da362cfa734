//! Excavation depth model for paver patio estimates.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Total excavation depth and the four depths it is made of.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExcavationDepth {
    /// Total depth to excavate in inches.
    pub depth_inches: Decimal,
    /// Human-readable sum of the addends.
    pub breakdown: String,
    /// Base rock coverage depth in inches.
    pub base_rock_inches: Decimal,
    /// Clean rock coverage depth in inches.
    pub clean_rock_inches: Decimal,
    /// Paver thickness in inches.
    pub paver_thickness_inches: Decimal,
    /// Fixed buffer in inches.
    pub buffer_inches: Decimal,
}
