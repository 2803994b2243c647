//! Highlighting collaborators for match results.
//!
//! The match engine never formats markup itself. It hands each surviving
//! candidate and the raw query to a [`Highlighter`], which the UI layer
//! supplies. [`MarkupHighlighter`] is the stock implementation producing
//! rich-text `font` tags.
//!
//! # Examples
//! ```
//! use waymark_core::{HighlightColor, Highlighter, MarkupHighlighter};
//!
//! let color: HighlightColor = "#ff8000".parse().unwrap();
//! let highlighter = MarkupHighlighter::new(color);
//! assert_eq!(
//!     highlighter.highlight("Helsinki", "hel"),
//!     "<font color=\"#ff8000\">Hel</font>sinki"
//! );
//! ```

use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use thiserror::Error;

/// Wrap the part of `text` that matches `query` for display.
///
/// Implementations decide how the span is located and decorated. They must
/// return `text` unchanged when no span is found; a missing span is never an
/// error.
pub trait Highlighter {
    /// Return `text` with the span matching `query` decorated.
    fn highlight(&self, text: &str, query: &str) -> String;
}

impl<H: Highlighter + ?Sized> Highlighter for &H {
    fn highlight(&self, text: &str, query: &str) -> String {
        (**self).highlight(text, query)
    }
}

/// Locate the first case-insensitive occurrence of `needle` in `haystack`.
///
/// The returned range indexes `haystack` in bytes and always falls on
/// character boundaries, so slicing the original-case text is safe even when
/// lower-casing changes byte lengths. An empty needle never matches.
///
/// # Examples
/// ```
/// use waymark_core::find_ignore_case;
///
/// assert_eq!(find_ignore_case("New York", "YORK"), Some(4..8));
/// assert_eq!(find_ignore_case("New York", "new  york"), None);
/// ```
#[must_use]
pub fn find_ignore_case(haystack: &str, needle: &str) -> Option<Range<usize>> {
    let lowered: Vec<char> = needle.chars().flat_map(char::to_lowercase).collect();
    if lowered.is_empty() {
        return None;
    }
    haystack.char_indices().find_map(|(start, _)| {
        let rest = haystack.get(start..)?;
        matched_len(rest, &lowered).map(|len| start..start + len)
    })
}

/// Byte length of the prefix of `haystack` whose lower-case form is `needle`.
fn matched_len(haystack: &str, needle: &[char]) -> Option<usize> {
    let mut remaining = needle;
    for (offset, ch) in haystack.char_indices() {
        if remaining.is_empty() {
            return Some(offset);
        }
        for lower in ch.to_lowercase() {
            match remaining.split_first() {
                Some((&expected, rest)) if expected == lower => remaining = rest,
                _ => return None,
            }
        }
    }
    remaining.is_empty().then_some(haystack.len())
}

/// An sRGB colour used to tint highlighted spans.
///
/// Parsed from and displayed as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct HighlightColor {
    /// Red channel.
    pub red: u8,
    /// Green channel.
    pub green: u8,
    /// Blue channel.
    pub blue: u8,
}

impl HighlightColor {
    /// Construct a colour from its channels.
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }
}

impl Default for HighlightColor {
    fn default() -> Self {
        Self::new(0x00, 0x77, 0xff)
    }
}

impl fmt::Display for HighlightColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

/// Errors returned when parsing a [`HighlightColor`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    /// The value did not start with `#`.
    #[error("colour '{value}' must start with '#'")]
    MissingHash {
        /// Rejected input.
        value: String,
    },
    /// The value did not contain exactly six hex digits.
    #[error("colour '{value}' must have six hex digits")]
    InvalidLength {
        /// Rejected input.
        value: String,
    },
    /// A channel was not valid hexadecimal.
    #[error("colour '{value}' contains non-hex digits")]
    InvalidDigit {
        /// Rejected input.
        value: String,
    },
}

impl FromStr for HighlightColor {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError::MissingHash {
                value: trimmed.to_owned(),
            })?;
        if digits.len() != 6 {
            return Err(ColorParseError::InvalidLength {
                value: trimmed.to_owned(),
            });
        }
        let channel = |range: Range<usize>| {
            digits
                .get(range)
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
                .ok_or_else(|| ColorParseError::InvalidDigit {
                    value: trimmed.to_owned(),
                })
        };
        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl TryFrom<String> for HighlightColor {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<HighlightColor> for String {
    fn from(color: HighlightColor) -> Self {
        color.to_string()
    }
}

/// Rich-text highlighter wrapping the matched span in a `font` tag.
///
/// The whole query is searched as one contiguous run. A query whose
/// components match at different offsets therefore leaves the text
/// unhighlighted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MarkupHighlighter {
    color: HighlightColor,
}

impl MarkupHighlighter {
    /// Create a highlighter tinting spans with `color`.
    #[must_use]
    pub const fn new(color: HighlightColor) -> Self {
        Self { color }
    }

    /// Colour applied to highlighted spans.
    #[must_use]
    pub const fn color(&self) -> HighlightColor {
        self.color
    }
}

impl Highlighter for MarkupHighlighter {
    fn highlight(&self, text: &str, query: &str) -> String {
        let Some(span) = find_ignore_case(text, query) else {
            return text.to_owned();
        };
        match (text.get(..span.start), text.get(span.clone()), text.get(span.end..)) {
            (Some(before), Some(matched), Some(after)) => {
                format!(
                    "{before}<font color=\"{color}\">{matched}</font>{after}",
                    color = self.color
                )
            }
            _ => text.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Helsinki", "hel", Some(0..3))]
    #[case("Helsinki", "SINK", Some(3..7))]
    #[case("Helsinki", "turku", None)]
    #[case("Helsinki", "", None)]
    #[case("Åbo Akademi", "åbo", Some(0..4))]
    #[case("Straße", "SSE", None)]
    fn finds_case_insensitive_spans(
        #[case] haystack: &str,
        #[case] needle: &str,
        #[case] expected: Option<Range<usize>>,
    ) {
        assert_eq!(find_ignore_case(haystack, needle), expected);
    }

    #[rstest]
    #[case("#0077ff", HighlightColor::new(0x00, 0x77, 0xff))]
    #[case(" #FFFFFF ", HighlightColor::new(0xff, 0xff, 0xff))]
    fn parses_hex_colours(#[case] raw: &str, #[case] expected: HighlightColor) {
        assert_eq!(raw.parse::<HighlightColor>(), Ok(expected));
    }

    #[rstest]
    fn colour_displays_as_lowercase_hex() {
        assert_eq!(HighlightColor::new(0xab, 0x01, 0xff).to_string(), "#ab01ff");
    }

    #[rstest]
    #[case("0077ff")]
    #[case("#07f")]
    #[case("#gg77ff")]
    #[case("#00é7f")]
    fn rejects_malformed_colours(#[case] raw: &str) {
        assert!(raw.parse::<HighlightColor>().is_err());
    }

    #[rstest]
    fn markup_wraps_first_occurrence() {
        let highlighter = MarkupHighlighter::new(HighlightColor::new(0, 0, 0));
        assert_eq!(
            highlighter.highlight("Banana", "AN"),
            "B<font color=\"#000000\">an</font>ana"
        );
    }

    #[rstest]
    fn markup_uses_the_configured_colour() {
        let color: HighlightColor = "#ff8000".parse().expect("valid colour");
        let highlighter = MarkupHighlighter::new(color);

        assert_eq!(highlighter.color(), color);
        assert_eq!(MarkupHighlighter::default().color(), HighlightColor::default());
        assert_eq!(
            highlighter.highlight("Oulu", "ou"),
            "<font color=\"#ff8000\">Ou</font>lu"
        );
    }

    #[rstest]
    fn markup_leaves_non_contiguous_query_untouched() {
        let highlighter = MarkupHighlighter::default();
        assert_eq!(highlighter.highlight("York New", "new york"), "York New");
    }
}
