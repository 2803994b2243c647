//! Spherical Mercator projection between coordinates and screen pixels.
//!
//! Coordinates are WGS84 degrees with `x = longitude` and `y = latitude`.
//! Pixel positions count from the top-left corner of the viewport, so pixel
//! `y` grows southward.
//!
//! Screen position is linear in longitude but only linear in *projected*
//! latitude. Every vertical conversion therefore projects the viewport edges
//! and the queried latitude with [`latitude_to_mercator_y`], interpolates in
//! that space, and projects back.
//!
//! The free functions perform no validation: degenerate extents and
//! latitudes at the poles produce `NaN` or infinities. [`ProjectionFrame`]
//! validates a viewport once and then converts whole coordinates.
//!
//! # Examples
//!
//! ```
//! use geo::Coord;
//! use waymark_projection::ProjectionFrame;
//!
//! # fn main() -> Result<(), waymark_projection::FrameError> {
//! let frame = ProjectionFrame::new(
//!     800.0,
//!     600.0,
//!     Coord { x: 24.0, y: 60.0 },
//!     Coord { x: 26.0, y: 61.0 },
//! )?;
//! let pixel = frame.to_pixel(Coord { x: 25.0, y: 60.5 });
//! assert_eq!(pixel.x, 400.0);
//! # Ok(())
//! # }
//! ```
//!
//! See <https://wiki.openstreetmap.org/wiki/Mercator> for background.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod closest;
mod frame;
mod mercator;
mod pixel;

pub use closest::find_closest;
pub use frame::{FrameError, ProjectionFrame};
pub use mercator::{
    MAX_LATITUDE, MIN_LATITUDE, degrees_to_radians, latitude_to_mercator_y,
    mercator_y_to_latitude, radians_to_degrees,
};
pub use pixel::{
    latitude_to_pixel_y, longitude_to_pixel_x, pixel_x_to_longitude, pixel_y_to_latitude,
};
