//! Conversions between coordinates and pixel positions within a viewport.
//!
//! Each function takes the viewport's extent along one axis in degrees and
//! its size in pixels. Pixel results are rounded to whole pixels, with halves
//! rounding towards positive infinity, but carried as `f64`, so out-of-range
//! input and degenerate extents surface as out-of-bounds values, `NaN` or
//! infinities instead of panics.

use crate::mercator::{latitude_to_mercator_y, mercator_y_to_latitude};

/// Round to the nearest whole pixel, halves going towards positive infinity.
///
/// `f64::round` sends negative halves away from zero, which would shift
/// off-screen positions west of or above the viewport by one pixel.
#[expect(clippy::float_arithmetic, reason = "half-up rounding offsets by 0.5")]
fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Convert a longitude to a pixel column.
///
/// Computes `round((x − xmin)·width/(xmax − xmin))`, rounding halves up.
///
/// # Examples
/// ```
/// use waymark_projection::longitude_to_pixel_x;
///
/// assert_eq!(longitude_to_pixel_x(25.0, 24.0, 26.0, 800.0), 400.0);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "pixel columns interpolate linearly in longitude"
)]
pub fn longitude_to_pixel_x(x: f64, xmin: f64, xmax: f64, width: f64) -> f64 {
    round_half_up((x - xmin) * (width / (xmax - xmin)))
}

/// Convert a pixel column to a longitude.
///
/// Inverts [`longitude_to_pixel_x`] up to its rounding.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "pixel columns interpolate linearly in longitude"
)]
pub fn pixel_x_to_longitude(px: f64, xmin: f64, xmax: f64, width: f64) -> f64 {
    xmin + px / (width / (xmax - xmin))
}

/// Convert a latitude to a pixel row counted down from the northern edge.
///
/// The edges and `y` are projected with
/// [`latitude_to_mercator_y`](crate::latitude_to_mercator_y) and the row is
/// interpolated in projected space.
///
/// # Examples
/// ```
/// use waymark_projection::latitude_to_pixel_y;
///
/// assert_eq!(latitude_to_pixel_y(61.0, 60.0, 61.0, 600.0), 0.0);
/// assert_eq!(latitude_to_pixel_y(60.0, 60.0, 61.0, 600.0), 600.0);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "pixel rows interpolate linearly in projected latitude"
)]
pub fn latitude_to_pixel_y(y: f64, ymin: f64, ymax: f64, height: f64) -> f64 {
    let south = latitude_to_mercator_y(ymin);
    let north = latitude_to_mercator_y(ymax);
    round_half_up((north - latitude_to_mercator_y(y)) * (height / (north - south)))
}

/// Convert a pixel row counted down from the northern edge to a latitude.
///
/// Inverts [`latitude_to_pixel_y`] up to its rounding.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "pixel rows interpolate linearly in projected latitude"
)]
pub fn pixel_y_to_latitude(py: f64, ymin: f64, ymax: f64, height: f64) -> f64 {
    let south = latitude_to_mercator_y(ymin);
    let north = latitude_to_mercator_y(ymax);
    mercator_y_to_latitude(north - py / (height / (north - south)))
}
