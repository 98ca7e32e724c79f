//! Tick-label text production.
//!
//! Scale values are quantized before printing so accumulated float noise
//! (`0.30000000000000004`) never leaks into axis labels.

/// Formats one tick value, optionally compressing large magnitudes to
/// `1.5k` / `2m` / `3b` shorthand.
#[must_use]
pub fn format_tick_value(value: f64, shorthand: bool) -> String {
    if shorthand {
        let magnitude = value.abs();
        for (threshold, suffix) in [(1e9, "b"), (1e6, "m"), (1e3, "k")] {
            if magnitude >= threshold {
                return format!("{}{suffix}", format_minimal(value / threshold));
            }
        }
    }

    format_minimal(value)
}

/// Prints a value with no trailing zeros and no negative zero.
#[must_use]
pub fn format_minimal(value: f64) -> String {
    let quantized = (value * 1e9).round() / 1e9;
    if quantized == 0.0 {
        return "0".to_owned();
    }
    if quantized == quantized.trunc() && quantized.abs() < 1e15 {
        return format!("{}", quantized as i64);
    }

    let mut text = format!("{quantized:.9}");
    while text.ends_with('0') {
        text.pop();
    }
    if text.ends_with('.') {
        text.pop();
    }
    text
}

#[cfg(test)]
mod tests {
    use super::{format_minimal, format_tick_value};

    #[test]
    fn negative_zero_prints_as_zero() {
        assert_eq!(format_minimal(-0.0), "0");
    }

    #[test]
    fn float_noise_is_quantized_away() {
        assert_eq!(format_minimal(0.1 + 0.2), "0.3");
    }

    #[test]
    fn integers_print_without_decimals() {
        assert_eq!(format_minimal(40.0), "40");
        assert_eq!(format_minimal(-12.0), "-12");
    }

    #[test]
    fn shorthand_compresses_thousands_and_millions() {
        assert_eq!(format_tick_value(1_500.0, true), "1.5k");
        assert_eq!(format_tick_value(2_000_000.0, true), "2m");
        assert_eq!(format_tick_value(3_000_000_000.0, true), "3b");
        assert_eq!(format_tick_value(-4_500.0, true), "-4.5k");
    }

    #[test]
    fn shorthand_leaves_small_values_alone() {
        assert_eq!(format_tick_value(999.0, true), "999");
        assert_eq!(format_tick_value(0.25, true), "0.25");
    }
}
