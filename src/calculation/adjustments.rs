//! Percentage allowances shared by the calculators.

use rust_decimal::Decimal;

/// Waste allowance applied when a material does not specify one.
pub const DEFAULT_WASTE_FACTOR_PERCENTAGE: Decimal = Decimal::from_parts(10, 0, 0, false, 0);

/// Increases a quantity by a percentage: `quantity * (1 + percentage / 100)`.
///
/// # Examples
///
/// ```
/// use materials_engine::calculation::apply_percentage;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let with_waste = apply_percentage(Decimal::from_str("100").unwrap(), Decimal::from_str("15").unwrap());
/// assert_eq!(with_waste, Decimal::from_str("115").unwrap());
/// ```
pub fn apply_percentage(quantity: Decimal, percentage: Decimal) -> Decimal {
    quantity * (Decimal::ONE + percentage / Decimal::ONE_HUNDRED)
}
