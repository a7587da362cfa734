//! Calculation result models for the Materials Engine.
//!
//! This module contains the [`MaterialQuantityResult`] produced by each
//! calculator and the aggregate [`MaterialCalculationResult`] produced by the
//! cost orchestrator, including its audit trace.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{MaterialCategory, ServiceMaterial};

/// The quantity and cost of one material, as produced by a calculator.
///
/// `purchase_units_rounded` is always at least `purchase_units`, and
/// `total_cost` is exactly `purchase_units_rounded * unit_cost`.
///
/// # Example
///
/// ```
/// use materials_engine::models::MaterialQuantityResult;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let result = MaterialQuantityResult {
///     quantity_needed: Decimal::from_str("360").unwrap(),
///     quantity_with_waste: Decimal::from_str("396").unwrap(),
///     quantity_with_compaction: None,
///     purchase_units: Decimal::from_str("396").unwrap(),
///     purchase_units_rounded: Decimal::from_str("396").unwrap(),
///     unit_cost: Decimal::from_str("4.25").unwrap(),
///     total_cost: Decimal::from_str("1683.00").unwrap(),
///     unit_label: "square feet".to_string(),
///     display_text: "396 square feet".to_string(),
///     waste_factor_percentage: Decimal::from_str("10").unwrap(),
///     compaction_factor_percentage: Decimal::ZERO,
/// };
/// assert_eq!(result.total_cost, result.purchase_units_rounded * result.unit_cost);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialQuantityResult {
    /// Raw quantity before adjustments (cubic yards, square feet, or linear feet).
    pub quantity_needed: Decimal,
    /// Quantity after the waste allowance.
    pub quantity_with_waste: Decimal,
    /// Quantity after compaction, before waste. Volume materials only.
    pub quantity_with_compaction: Option<Decimal>,
    /// Purchase units needed, unrounded.
    pub purchase_units: Decimal,
    /// Purchase units rounded up to the nearest tenth.
    pub purchase_units_rounded: Decimal,
    /// Price per purchase unit.
    pub unit_cost: Decimal,
    /// Total cost (`purchase_units_rounded * unit_cost`).
    pub total_cost: Decimal,
    /// Pluralized purchase unit label (e.g., "cubic yards").
    pub unit_label: String,
    /// Human-readable quantity (e.g., "8.8 cubic yards").
    pub display_text: String,
    /// Waste percentage actually applied.
    pub waste_factor_percentage: Decimal,
    /// Compaction percentage actually applied.
    pub compaction_factor_percentage: Decimal,
}

/// One category's resolved material and its calculated quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryCalculationResult {
    /// The category that was calculated.
    pub category: MaterialCategory,
    /// The material used for the category.
    pub material: ServiceMaterial,
    /// The calculator output.
    pub quantity: MaterialQuantityResult,
    /// Cost contributed by this category.
    pub subtotal: Decimal,
}

/// Short per-category display data keyed by category key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDisplay {
    /// Purchase units rounded up to the nearest tenth.
    pub units_needed: Decimal,
    /// Pluralized purchase unit label.
    pub unit_label: String,
    /// Human-readable quantity.
    pub display_text: String,
}

/// A single step in the audit trace recording one category calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The calculation rule that was applied (the calculation method).
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The category this step calculated.
    pub category_key: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the calculation.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings record categories that were skipped without failing the whole
/// calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// The complete material cost breakdown for a service.
///
/// `total_cost` is always the sum of the `subtotal` of every entry in
/// `categories`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialCalculationResult {
    /// The project size the calculation was made for.
    pub square_footage: Decimal,
    /// Calculated categories, in catalog order.
    pub categories: Vec<CategoryCalculationResult>,
    /// Sum of all category subtotals.
    pub total_cost: Decimal,
    /// `total_cost / square_footage`.
    pub cost_per_square_foot: Decimal,
    /// Newline-joined `"<label>: <display> = $<subtotal>"` lines.
    pub breakdown: String,
    /// Display data keyed by category key.
    pub category_displays: BTreeMap<String, CategoryDisplay>,
    /// Audit trace of calculated and skipped categories.
    pub audit_trace: AuditTrace,
}
