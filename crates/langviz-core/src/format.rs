// File: crates/langviz-core/src/format.rs
// Summary: Compact value formatting for bar labels and axis ticks (K/M abbreviations).

use crate::stats::StatValue;

/// Format a value for display next to a bar or wedge.
///
/// Scores keep three decimals; counts abbreviate at a thousand (`K`) and
/// a million (`M`) with one decimal.
pub fn format_value(value: &StatValue) -> String {
    match *value {
        StatValue::Score(s) => format!("{s:.3}"),
        StatValue::Count(n) if n >= 1_000_000 => format!("{:.1}M", n as f64 / 1_000_000.0),
        StatValue::Count(n) if n >= 1_000 => format!("{:.1}K", n as f64 / 1_000.0),
        StatValue::Count(n) => n.to_string(),
    }
}

/// Format an axis tick. Fractional axes keep one decimal; count axes reuse
/// the K/M abbreviations.
pub fn format_tick(value: f64, fractional: bool) -> String {
    if fractional {
        format!("{value:.1}")
    } else {
        format_value(&StatValue::Count(value.round() as u64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_below_a_thousand_stay_plain() {
        assert_eq!(format_value(&StatValue::Count(999)), "999");
        assert_eq!(format_value(&StatValue::Count(0)), "0");
    }

    #[test]
    fn thousands_abbreviate_with_one_decimal() {
        assert_eq!(format_value(&StatValue::Count(1_500)), "1.5K");
        assert_eq!(format_value(&StatValue::Count(1_000)), "1.0K");
        assert_eq!(format_value(&StatValue::Count(999_949)), "999.9K");
    }

    #[test]
    fn millions_abbreviate_with_one_decimal() {
        assert_eq!(format_value(&StatValue::Count(2_500_000)), "2.5M");
        assert_eq!(format_value(&StatValue::Count(1_000_000)), "1.0M");
    }

    #[test]
    fn scores_keep_three_decimals() {
        assert_eq!(format_value(&StatValue::Score(3.14159)), "3.142");
        assert_eq!(format_value(&StatValue::Score(2.0)), "2.000");
    }

    #[test]
    fn ticks_follow_axis_kind() {
        assert_eq!(format_tick(20_000.0, false), "20.0K");
        assert_eq!(format_tick(150.0, false), "150");
        assert_eq!(format_tick(0.75, true), "0.8");
    }
}
