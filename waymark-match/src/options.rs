//! Configuration for autocomplete matching.

use waymark_core::HighlightColor;

/// Result limit used when none is configured.
pub const DEFAULT_MAX_RESULTS: usize = 10;

/// Tunable settings for a [`Matcher`](crate::Matcher).
///
/// With the `serde` feature the options deserialize from a configuration
/// document; missing fields fall back to [`MatchOptions::default`].
///
/// # Examples
/// ```
/// use waymark_match::{DEFAULT_MAX_RESULTS, MatchOptions};
///
/// let options = MatchOptions::default();
/// assert_eq!(options.max_results, DEFAULT_MAX_RESULTS);
/// assert_eq!(options.highlight_color.to_string(), "#0077ff");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct MatchOptions {
    /// Maximum number of results returned per query.
    pub max_results: usize,
    /// Colour applied to highlighted spans.
    pub highlight_color: HighlightColor,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            max_results: DEFAULT_MAX_RESULTS,
            highlight_color: HighlightColor::default(),
        }
    }
}
