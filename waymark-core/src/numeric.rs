//! Numeric helpers shared by the match and projection engines.
//!
//! All helpers are total: inputs outside their domain produce `NaN` rather
//! than an error, and callers are expected to guard the edge cases noted on
//! each function.

use std::fmt;
use std::str::FromStr;

use geo::Coord;
use thiserror::Error;

const METRES_PER_MILE: f64 = 1609.34;
const METRES_PER_YARD: f64 = 0.9144;
const METRES_PER_FOOT: f64 = 0.3048;
const METRES_PER_KILOMETRE: f64 = 1000.0;

/// Median of `values`.
///
/// Even-length input yields the mean of the two middle values. Empty input
/// yields `NaN`. The input is not reordered.
///
/// # Examples
/// ```
/// use waymark_core::median;
///
/// assert_eq!(median(&[1.0, 3.0, 2.0]), 2.0);
/// assert_eq!(median(&[1.0, 2.0, 3.0, 4.0]), 2.5);
/// assert!(median(&[]).is_nan());
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    clippy::integer_division,
    clippy::integer_division_remainder_used,
    reason = "locating the middle halves the length and averaging needs floats"
)]
pub fn median(values: &[f64]) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        return sorted.get(mid).copied().unwrap_or(f64::NAN);
    }
    match (mid.checked_sub(1).and_then(|i| sorted.get(i)), sorted.get(mid)) {
        (Some(low), Some(high)) => (low + high) / 2.0,
        _ => f64::NAN,
    }
}

/// Round `x` to `digits` significant digits.
///
/// Undefined for `x <= 0` because the decimal magnitude comes from
/// `log10(x)`; such input yields `NaN` or an infinity.
///
/// # Examples
/// ```
/// use waymark_core::siground;
///
/// assert_eq!(siground(1234.0, 2), 1200.0);
/// assert_eq!(siground(0.00456, 1), 0.005);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "significant-digit rounding scales by a power of ten"
)]
pub fn siground(x: f64, digits: i32) -> f64 {
    let exponent = f64::from(digits) - x.log10().floor() - 1.0;
    let mult = 10.0_f64.powf(exponent);
    (x * mult).round() / mult
}

/// Planar distance between two coordinates, in their own units.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use waymark_core::euclidean_distance;
///
/// let d = euclidean_distance(Coord { x: 0.0, y: 0.0 }, Coord { x: 3.0, y: 4.0 });
/// assert_eq!(d, 5.0);
/// ```
#[must_use]
#[expect(clippy::float_arithmetic, reason = "distance is a coordinate difference")]
pub fn euclidean_distance(a: Coord<f64>, b: Coord<f64>) -> f64 {
    (b.x - a.x).hypot(b.y - a.y)
}

/// Unit system used when rounding distances for display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Units {
    /// Kilometres and metres.
    #[default]
    Metric,
    /// Miles and feet.
    American,
    /// Miles and yards.
    British,
}

impl Units {
    /// Return the unit system as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Metric => "metric",
            Self::American => "american",
            Self::British => "british",
        }
    }

    /// Metres per (large unit, small unit) of this system.
    const fn scales(self) -> (f64, f64) {
        match self {
            Self::Metric => (METRES_PER_KILOMETRE, 1.0),
            Self::American => (METRES_PER_MILE, METRES_PER_FOOT),
            Self::British => (METRES_PER_MILE, METRES_PER_YARD),
        }
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown unit system.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown unit system '{0}'")]
pub struct UnitsParseError(pub String);

impl FromStr for Units {
    type Err = UnitsParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "metric" => Ok(Self::Metric),
            "american" => Ok(Self::American),
            "british" => Ok(Self::British),
            _ => Err(UnitsParseError(s.to_owned())),
        }
    }
}

/// Round a distance in metres to `digits` significant digits of `units`.
///
/// Distances of at least one large unit (kilometre or mile) are rounded in
/// that unit. Shorter distances are rounded in the small unit (metre, foot or
/// yard) with `digits` capped at the number of integer digits, so `12.3 m`
/// never gains a decimal. The result is converted back to metres.
///
/// # Examples
/// ```
/// use waymark_core::{Units, round_distance};
///
/// assert_eq!(round_distance(1234.56, 2, Units::Metric), 1200.0);
/// assert_eq!(round_distance(12.3456, 1, Units::Metric), 10.0);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    clippy::cast_possible_truncation,
    reason = "unit scaling is floating-point and the digit cap is a small integer"
)]
pub fn round_distance(meters: f64, digits: i32, units: Units) -> f64 {
    let (large, small) = units.scales();
    if meters >= large {
        return siground(meters / large, digits) * large;
    }
    let value = meters / small;
    let integer_digits = value.log10().ceil();
    let capped = if integer_digits.is_finite() {
        digits.min(integer_digits as i32)
    } else {
        digits
    };
    siground(value, capped) * small
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const TOLERANCE: f64 = 1e-9;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= TOLERANCE * expected.abs().max(1.0),
            "expected {expected}, got {actual}"
        );
    }

    #[rstest]
    #[case(&[1.0, 3.0, 2.0], 2.0)]
    #[case(&[1.0, 2.0, 3.0, 4.0], 2.5)]
    #[case(&[7.0], 7.0)]
    #[case(&[4.0, -1.0], 1.5)]
    fn median_of_values(#[case] values: &[f64], #[case] expected: f64) {
        assert_close(median(values), expected);
    }

    #[rstest]
    fn median_of_empty_is_nan() {
        assert!(median(&[]).is_nan());
    }

    #[rstest]
    fn median_leaves_input_untouched() {
        let values = [3.0, 1.0, 2.0];
        assert_close(median(&values), 2.0);
        assert_eq!(values, [3.0, 1.0, 2.0]);
    }

    #[rstest]
    #[case(1234.0, 2, 1200.0)]
    #[case(0.00456, 1, 0.005)]
    #[case(123.456, 1, 100.0)]
    #[case(123.456, 2, 120.0)]
    #[case(123.456, 3, 123.0)]
    #[case(123.456, 4, 123.5)]
    #[case(123.456, 5, 123.46)]
    #[case(123.456, 6, 123.456)]
    fn siground_keeps_significant_digits(
        #[case] x: f64,
        #[case] digits: i32,
        #[case] expected: f64,
    ) {
        assert_close(siground(x, digits), expected);
    }

    #[rstest]
    fn siground_of_zero_is_not_finite() {
        assert!(!siground(0.0, 2).is_finite());
    }

    #[rstest]
    #[case(1234.56, 1, 1000.0)]
    #[case(1234.56, 2, 1200.0)]
    #[case(123.456, 1, 100.0)]
    #[case(123.456, 2, 120.0)]
    #[case(12.3456, 1, 10.0)]
    #[case(12.3456, 2, 12.0)]
    #[case(1.23456, 1, 1.0)]
    #[case(1.23456, 2, 1.0)]
    fn round_distance_metric(#[case] meters: f64, #[case] digits: i32, #[case] expected: f64) {
        assert_close(round_distance(meters, digits, Units::Metric), expected);
    }

    #[rstest]
    fn round_distance_american_uses_miles_and_feet() {
        assert_close(round_distance(123.0, 2, Units::American), 400.0 * METRES_PER_FOOT);
        assert_close(round_distance(6000.0, 1, Units::American), 4.0 * METRES_PER_MILE);
    }

    #[rstest]
    fn round_distance_british_uses_yards() {
        assert_close(round_distance(123.0, 2, Units::British), 130.0 * METRES_PER_YARD);
        assert_close(round_distance(2000.0, 1, Units::British), METRES_PER_MILE);
    }

    #[rstest]
    #[case("metric", Units::Metric)]
    #[case("American", Units::American)]
    #[case("BRITISH", Units::British)]
    fn units_parse_case_insensitively(#[case] raw: &str, #[case] expected: Units) {
        assert_eq!(raw.parse::<Units>(), Ok(expected));
    }

    #[rstest]
    fn units_reject_unknown_names() {
        let err = "imperial".parse::<Units>().unwrap_err();
        assert!(err.to_string().contains("imperial"));
    }

    #[rstest]
    fn distance_is_symmetric() {
        let a = Coord { x: 24.94, y: 60.17 };
        let b = Coord { x: 25.0, y: 60.0 };
        assert_close(euclidean_distance(a, b), euclidean_distance(b, a));
    }
}
