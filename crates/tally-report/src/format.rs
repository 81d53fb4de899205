//! Canonical text rendering for report values.
//!
//! Every numeric cell in a tally report goes through [`format_number`]:
//! values indistinguishable from an integer print without a decimal point,
//! everything else prints with up to ten fractional digits and no trailing
//! zeros. Absent values resolve to the [`NOT_AVAILABLE`] sentinel only here,
//! at the formatting boundary, never earlier in the pipelines.

/// Sentinel rendered for an absent or undefined computed value.
pub const NOT_AVAILABLE: &str = "#N/A";

/// Sentinel rendered for an input token that could not be parsed.
pub const INVALID_VALUE: &str = "#VALUE!";

/// Absolute tolerance within which a value is rendered as a plain integer.
const INTEGER_SNAP_TOLERANCE: f64 = 1e-9;

/// Fractional digits used before trailing zeros are stripped.
const FRACTION_DIGITS: usize = 10;

/// Renders a numeric value, or the `#N/A` sentinel when absent.
///
/// Values within `1e-9` of the nearest integer render as that integer with
/// no decimal point. Everything else renders with ten fractional digits,
/// then trailing zeros (and a dangling decimal point) are stripped.
///
/// # Examples
///
/// ```
/// use tally_report::format::format_number;
///
/// assert_eq!(format_number(Some(2.0)), "2");
/// assert_eq!(format_number(Some(1.25)), "1.25");
/// assert_eq!(format_number(Some(-0.5)), "-0.5");
/// assert_eq!(format_number(None), "#N/A");
/// ```
#[must_use]
pub fn format_number(value: Option<f64>) -> String {
    let Some(value) = value else {
        return NOT_AVAILABLE.to_string();
    };
    let rounded = value.round();
    if (value - rounded).abs() < INTEGER_SNAP_TOLERANCE {
        // Integer cast also normalizes -0.0 so near-zero values print "0".
        #[expect(clippy::cast_possible_truncation)]
        return (rounded as i64).to_string();
    }
    let text = format!("{value:.FRACTION_DIGITS$}");
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Renders a mode list as comma-joined values, or `#N/A` when absent.
///
/// # Examples
///
/// ```
/// use tally_report::format::format_mode;
///
/// assert_eq!(format_mode(Some(&[1.0, 2.5])), "1,2.5");
/// assert_eq!(format_mode(None), "#N/A");
/// ```
#[must_use]
pub fn format_mode(values: Option<&[f64]>) -> String {
    let Some(values) = values else {
        return NOT_AVAILABLE.to_string();
    };
    values
        .iter()
        .map(|&value| format_number(Some(value)))
        .collect::<Vec<_>>()
        .join(",")
}

/// Renders an elapsed-seconds measurement with fixed six-digit precision.
///
/// Timing cells are presentation artifacts and keep their full fixed width
/// instead of the trailing-zero stripping applied to computed values.
#[must_use]
pub fn format_elapsed(seconds: f64) -> String {
    format!("{seconds:.6}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_values_render_without_decimal_point() {
        assert_eq!(format_number(Some(2.0)), "2");
        assert_eq!(format_number(Some(-7.0)), "-7");
        assert_eq!(format_number(Some(0.0)), "0");
    }

    #[test]
    fn test_near_integer_values_snap_to_integer() {
        assert_eq!(format_number(Some(2.0000000001)), "2");
        assert_eq!(format_number(Some(1.9999999999)), "2");
        assert_eq!(format_number(Some(-0.0000000001)), "0");
    }

    #[test]
    fn test_fractional_values_strip_trailing_zeros() {
        assert_eq!(format_number(Some(1.25)), "1.25");
        assert_eq!(format_number(Some(1.5)), "1.5");
        assert_eq!(format_number(Some(0.1)), "0.1");
    }

    #[test]
    fn test_fractional_values_keep_ten_digits_at_most() {
        // 1/3 = 0.3333333333... truncated at ten fractional digits
        assert_eq!(format_number(Some(1.0 / 3.0)), "0.3333333333");
    }

    #[test]
    fn test_absent_value_renders_sentinel() {
        assert_eq!(format_number(None), NOT_AVAILABLE);
    }

    #[test]
    fn test_mode_list_joins_with_commas() {
        assert_eq!(format_mode(Some(&[1.0, 2.0, 3.5])), "1,2,3.5");
        assert_eq!(format_mode(Some(&[4.0])), "4");
    }

    #[test]
    fn test_absent_mode_renders_sentinel_not_empty_string() {
        assert_eq!(format_mode(None), "#N/A");
    }

    #[test]
    fn test_elapsed_uses_fixed_six_digit_precision() {
        assert_eq!(format_elapsed(0.5), "0.500000");
        assert_eq!(format_elapsed(1.2345678), "1.234568");
    }
}
