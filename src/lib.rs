//! Facade crate for the Waymark engines.
//!
//! This crate re-exports the shared types from `waymark-core` and exposes the
//! match engine and the Mercator projection engine behind the `matching` and
//! `projection` feature flags.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub use waymark_core::{
    ColorParseError, FieldValue, HighlightColor, Highlighter, ListModel, MarkupHighlighter,
    MatchResult, PropertyValue, Provider, Record, Units, UnitsParseError, append_all,
    euclidean_distance, find_ignore_case, inject_matches, mark_default, median, round_distance,
    siground, sort_default_first, with_property,
};

#[cfg(feature = "test-support")]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub use waymark_core::test_support;

#[cfg(feature = "matching")]
#[cfg_attr(docsrs, doc(cfg(feature = "matching")))]
pub use waymark_match::{
    DEFAULT_MAX_RESULTS, MatchKind, MatchOptions, Matcher, find_matches,
    find_matches_with_completions, match_records,
};

#[cfg(feature = "projection")]
#[cfg_attr(docsrs, doc(cfg(feature = "projection")))]
pub use waymark_projection::{
    FrameError, MAX_LATITUDE, MIN_LATITUDE, ProjectionFrame, degrees_to_radians, find_closest,
    latitude_to_mercator_y, latitude_to_pixel_y, longitude_to_pixel_x, mercator_y_to_latitude,
    pixel_x_to_longitude, pixel_y_to_latitude, radians_to_degrees,
};
