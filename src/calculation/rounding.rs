//! Purchase quantity rounding.
//!
//! Purchase quantities are ordered in tenths of a unit and are always rounded
//! up so that an estimate never under-supplies a job.

use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places quantities are settled to before rounding.
///
/// Divisions such as `/ 27` leave a residue in the last of Decimal's 28
/// digits (`6.666...667 * 1.2 = 8.000...0004`); the residue must not push an
/// exact tenth up to the next one.
pub const QUANTITY_PRECISION_DP: u32 = 6;

/// Rounds a quantity to [`QUANTITY_PRECISION_DP`] places, half away from zero.
///
/// # Examples
///
/// ```
/// use materials_engine::calculation::settle_quantity;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let residue = Decimal::from_str("8.0000000000000000000000004").unwrap();
/// assert_eq!(settle_quantity(residue), Decimal::from_str("8").unwrap());
/// ```
pub fn settle_quantity(x: Decimal) -> Decimal {
    x.round_dp_with_strategy(QUANTITY_PRECISION_DP, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds a quantity up to the nearest tenth.
///
/// The quantity is first settled to [`QUANTITY_PRECISION_DP`] places (see
/// [`settle_quantity`]), so the result is the smallest multiple of 0.1 that is
/// greater than or equal to `x` only for inputs with at most that many decimal
/// places. Digits beyond it are dropped, so `8.0000001` rounds to `8.0`.
/// Values that are already exact tenths are returned unchanged.
///
/// # Examples
///
/// ```
/// use materials_engine::calculation::round_up_to_tenth;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let dec = |s: &str| Decimal::from_str(s).unwrap();
///
/// assert_eq!(round_up_to_tenth(dec("10.82")), dec("10.9"));
/// assert_eq!(round_up_to_tenth(dec("0.0639")), dec("0.1"));
/// assert_eq!(round_up_to_tenth(dec("8.0")), dec("8.0"));
/// assert_eq!(round_up_to_tenth(Decimal::ZERO), Decimal::ZERO);
/// ```
pub fn round_up_to_tenth(x: Decimal) -> Decimal {
    (settle_quantity(x) * Decimal::TEN).ceil() / Decimal::TEN
}

/// Formats a monetary amount with two decimal places, rounding half away from zero.
pub fn format_money(amount: Decimal) -> String {
    format!(
        "{:.2}",
        amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    )
}
