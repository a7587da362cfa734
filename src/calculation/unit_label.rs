//! Purchase unit display labels.

use rust_decimal::Decimal;

/// Known unit type codes and their pluralized labels.
const UNIT_LABELS: &[(&str, &str)] = &[
    ("cubic_yard", "cubic yards"),
    ("square_foot", "square feet"),
    ("linear_foot", "linear feet"),
    ("piece", "pieces"),
    ("bag", "bags"),
    ("pallet", "pallets"),
    ("roll", "rolls"),
    ("section", "sections"),
    ("eight_foot_sections", "8ft sections"),
    ("ten_foot_sections", "10ft sections"),
    ("twelve_foot_sections", "12ft sections"),
    ("sqft_pallet", "pallets"),
    ("piece_pallet", "pallets"),
];

/// Returns the pluralized display label for a unit type code.
///
/// Unknown codes are returned with underscores replaced by spaces. The
/// coverage per unit is accepted for callers that have it but does not
/// currently change the label.
///
/// # Examples
///
/// ```
/// use materials_engine::calculation::unit_label;
///
/// assert_eq!(unit_label("cubic_yard", None), "cubic yards");
/// assert_eq!(unit_label("eight_foot_sections", None), "8ft sections");
/// assert_eq!(unit_label("half_pallet_bundle", None), "half pallet bundle");
/// ```
pub fn unit_label(unit_type: &str, _coverage_per_unit: Option<Decimal>) -> String {
    UNIT_LABELS
        .iter()
        .find(|(code, _)| *code == unit_type)
        .map(|(_, label)| label.to_string())
        .unwrap_or_else(|| unit_type.replace('_', " "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_known_code_resolves() {
        let expected = [
            ("cubic_yard", "cubic yards"),
            ("square_foot", "square feet"),
            ("linear_foot", "linear feet"),
            ("piece", "pieces"),
            ("bag", "bags"),
            ("pallet", "pallets"),
            ("roll", "rolls"),
            ("section", "sections"),
            ("eight_foot_sections", "8ft sections"),
            ("ten_foot_sections", "10ft sections"),
            ("twelve_foot_sections", "12ft sections"),
            ("sqft_pallet", "pallets"),
            ("piece_pallet", "pallets"),
        ];

        for (code, label) in expected {
            assert_eq!(unit_label(code, None), label, "label for {}", code);
        }
    }

    #[test]
    fn test_unknown_code_falls_back_to_spaced_code() {
        assert_eq!(unit_label("ton", None), "ton");
        assert_eq!(unit_label("super_sack_bag", None), "super sack bag");
    }

    #[test]
    fn test_coverage_does_not_change_label() {
        assert_eq!(unit_label("roll", Some(Decimal::new(1800, 0))), "rolls");
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(unit_label("Cubic_Yard", None), "Cubic Yard");
    }
}
