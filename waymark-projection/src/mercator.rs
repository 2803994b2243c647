//! Angle conversion and the spherical Mercator latitude projection.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

/// Largest latitude, in degrees, that keeps a square Mercator world.
///
/// Beyond `±MAX_LATITUDE` the projection is still computed but no longer
/// fits standard map tiles; at `±90°` it diverges.
pub const MAX_LATITUDE: f64 = 85.051_128_779_806_59;

/// Southern counterpart of [`MAX_LATITUDE`].
pub const MIN_LATITUDE: f64 = -85.051_128_779_806_59;

/// Convert degrees to radians.
#[must_use]
pub const fn degrees_to_radians(degrees: f64) -> f64 {
    degrees.to_radians()
}

/// Convert radians to degrees.
#[must_use]
pub const fn radians_to_degrees(radians: f64) -> f64 {
    radians.to_degrees()
}

/// Project a latitude in degrees to Mercator `y` in radians.
///
/// Computes `ln(tan(π/4 + φ/2))`. The poles diverge: `-90°` yields negative
/// infinity and `90°` a huge finite value, since `π/2` is not exact.
///
/// # Examples
/// ```
/// use waymark_projection::latitude_to_mercator_y;
///
/// assert!(latitude_to_mercator_y(0.0).abs() < 1e-12);
/// assert!(latitude_to_mercator_y(60.0) > 1.0);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "the Mercator projection is floating-point trigonometry"
)]
pub fn latitude_to_mercator_y(latitude: f64) -> f64 {
    (FRAC_PI_4 + degrees_to_radians(latitude) / 2.0).tan().ln()
}

/// Invert [`latitude_to_mercator_y`], returning degrees.
///
/// Computes `2·atan(exp(y)) − π/2`.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "the inverse Mercator projection is floating-point trigonometry"
)]
pub fn mercator_y_to_latitude(y: f64) -> f64 {
    radians_to_degrees(2.0 * y.exp().atan() - FRAC_PI_2)
}
