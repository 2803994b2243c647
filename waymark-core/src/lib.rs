//! Shared types and helpers for the Waymark engines.
//!
//! The crate holds the pieces both the match engine and the projection engine
//! lean on: result and record types, the collaborator traits the UI layer
//! implements ([`Highlighter`] and [`ListModel`]), and a handful of numeric
//! helpers such as [`median`] and [`siground`].
//!
//! Nothing here keeps state between calls. Collection helpers such as
//! [`sort_default_first`] return fresh values; only [`inject_matches`] writes
//! through a caller's [`ListModel`].

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod highlight;
pub mod list_model;
pub mod numeric;
pub mod provider;
pub mod record;
mod result;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use highlight::{
    ColorParseError, HighlightColor, Highlighter, MarkupHighlighter, find_ignore_case,
};
pub use list_model::{ListModel, PropertyValue, append_all, inject_matches};
pub use numeric::{Units, UnitsParseError, euclidean_distance, median, round_distance, siground};
pub use provider::{Provider, mark_default, sort_default_first};
pub use record::{FieldValue, Record, with_property};
pub use result::MatchResult;
