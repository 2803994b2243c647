//! Validated viewports for whole-coordinate conversions.

use geo::{Coord, Rect};
use thiserror::Error;

use crate::mercator::{MAX_LATITUDE, MIN_LATITUDE};
use crate::pixel::{
    latitude_to_pixel_y, longitude_to_pixel_x, pixel_x_to_longitude, pixel_y_to_latitude,
};

/// Errors returned by [`ProjectionFrame::new`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FrameError {
    /// Width or height was not a finite, positive number of pixels.
    #[error("viewport size {width}x{height} must be finite and positive")]
    InvalidSize {
        /// Requested width in pixels.
        width: f64,
        /// Requested height in pixels.
        height: f64,
    },
    /// The western edge was not strictly west of the eastern edge.
    #[error("longitude extent {xmin}..{xmax} must be finite and increasing")]
    InvalidLongitudeRange {
        /// Western edge in degrees.
        xmin: f64,
        /// Eastern edge in degrees.
        xmax: f64,
    },
    /// The southern edge was not strictly south of the northern edge.
    #[error("latitude extent {ymin}..{ymax} must be finite and increasing")]
    InvalidLatitudeRange {
        /// Southern edge in degrees.
        ymin: f64,
        /// Northern edge in degrees.
        ymax: f64,
    },
}

/// A viewport of known pixel size showing a known bounding box.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use waymark_projection::ProjectionFrame;
///
/// # fn main() -> Result<(), waymark_projection::FrameError> {
/// let frame = ProjectionFrame::new(
///     400.0,
///     400.0,
///     Coord { x: -10.0, y: -10.0 },
///     Coord { x: 10.0, y: 10.0 },
/// )?;
/// assert_eq!(frame.to_pixel(Coord { x: 0.0, y: 0.0 }), Coord { x: 200.0, y: 200.0 });
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionFrame {
    width: f64,
    height: f64,
    min: Coord<f64>,
    max: Coord<f64>,
}

impl ProjectionFrame {
    /// Validate and construct a frame.
    ///
    /// `min` is the south-western corner and `max` the north-eastern one.
    /// Edges beyond [`MIN_LATITUDE`] or [`MAX_LATITUDE`] are accepted, but
    /// conversions near them lose meaning, so a warning is logged.
    ///
    /// # Errors
    /// Returns [`FrameError`] when the size is not finite and positive or an
    /// extent is empty, inverted or not finite.
    pub fn new(
        width: f64,
        height: f64,
        min: Coord<f64>,
        max: Coord<f64>,
    ) -> Result<Self, FrameError> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(FrameError::InvalidSize { width, height });
        }
        if !(min.x.is_finite() && max.x.is_finite() && min.x < max.x) {
            return Err(FrameError::InvalidLongitudeRange {
                xmin: min.x,
                xmax: max.x,
            });
        }
        if !(min.y.is_finite() && max.y.is_finite() && min.y < max.y) {
            return Err(FrameError::InvalidLatitudeRange {
                ymin: min.y,
                ymax: max.y,
            });
        }
        if min.y < MIN_LATITUDE || max.y > MAX_LATITUDE {
            log::warn!(
                "latitude extent {}..{} leaves the Mercator range {MIN_LATITUDE}..{MAX_LATITUDE}",
                min.y,
                max.y
            );
        }
        Ok(Self {
            width,
            height,
            min,
            max,
        })
    }

    /// Viewport width in pixels.
    #[must_use]
    pub const fn width(&self) -> f64 {
        self.width
    }

    /// Viewport height in pixels.
    #[must_use]
    pub const fn height(&self) -> f64 {
        self.height
    }

    /// Geographic bounding box shown by the viewport.
    #[must_use]
    pub fn bounds(&self) -> Rect<f64> {
        Rect::new(self.min, self.max)
    }

    /// Convert a coordinate to a whole-pixel position.
    ///
    /// Coordinates outside the bounds yield positions outside the viewport.
    #[must_use]
    pub fn to_pixel(&self, coord: Coord<f64>) -> Coord<f64> {
        Coord {
            x: longitude_to_pixel_x(coord.x, self.min.x, self.max.x, self.width),
            y: latitude_to_pixel_y(coord.y, self.min.y, self.max.y, self.height),
        }
    }

    /// Convert a pixel position to a coordinate.
    #[must_use]
    pub fn to_coordinate(&self, pixel: Coord<f64>) -> Coord<f64> {
        Coord {
            x: pixel_x_to_longitude(pixel.x, self.min.x, self.max.x, self.width),
            y: pixel_y_to_latitude(pixel.y, self.min.y, self.max.y, self.height),
        }
    }

    /// Report whether `pixel` lies within `[0, width) × [0, height)`.
    #[must_use]
    pub fn contains_pixel(&self, pixel: Coord<f64>) -> bool {
        (0.0..self.width).contains(&pixel.x) && (0.0..self.height).contains(&pixel.y)
    }
}
