//! Autocomplete matching and record ranking for Waymark search boxes.
//!
//! The crate offers two complementary capabilities:
//! - **Candidate matching** ranks plain strings against a typed query.
//!   Candidates containing every query component are kept; those where some
//!   component starts the candidate come before those matching only further
//!   in. Input order breaks every tie. See [`find_matches`] and
//!   [`find_matches_with_completions`].
//! - **Record ranking** filters records whose chosen fields contain every
//!   query component and orders them by those fields, nulls last. See
//!   [`match_records`].
//!
//! Comparison is always case-insensitive and locale-agnostic.
//!
//! # Examples
//!
//! ```
//! use waymark_core::MarkupHighlighter;
//! use waymark_match::find_matches;
//!
//! let places = ["banana", "ant", "anchor"];
//! let found = find_matches("an", &places, 10, &MarkupHighlighter::default());
//! let texts: Vec<_> = found.iter().map(|m| m.text.as_str()).collect();
//! assert_eq!(texts, ["ant", "anchor", "banana"]);
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod matcher;
mod options;
mod query;
mod records;

pub use matcher::{Matcher, find_matches, find_matches_with_completions};
pub use options::{DEFAULT_MAX_RESULTS, MatchOptions};
pub use query::{MatchKind, classify, components};
pub use records::match_records;
