//! Population helpers for UI list models.
//!
//! Virtualised list views keep a fixed pool of rows and toggle their
//! visibility rather than inserting and removing items. [`inject_matches`]
//! writes match results into such a pool through the [`ListModel`] trait.

use crate::MatchResult;

/// Name of the row property toggled by [`inject_matches`].
pub const VISIBLE_PROPERTY: &str = "visible";

/// Value written into a list model row property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyValue {
    /// A text property.
    Text(String),
    /// A boolean flag.
    Flag(bool),
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

/// The slice of a UI list model the engine writes into.
///
/// Implementations are owned by the UI layer. The engine only ever reads
/// [`ListModel::count`], appends items, and overwrites properties of rows
/// that already exist.
pub trait ListModel {
    /// Item type accepted by [`ListModel::append`].
    type Item;

    /// Number of rows currently in the model.
    fn count(&self) -> usize;

    /// Append a row to the end of the model.
    fn append(&mut self, item: Self::Item);

    /// Overwrite `field` on the row at `index`.
    ///
    /// Callers never pass an `index` at or beyond [`ListModel::count`].
    fn set_property(&mut self, index: usize, field: &str, value: PropertyValue);
}

/// Append every item to `model`, preserving order.
pub fn append_all<M, I>(model: &mut M, items: I)
where
    M: ListModel + ?Sized,
    I: IntoIterator<Item = M::Item>,
{
    for item in items {
        model.append(item);
    }
}

/// Write `found` into the existing rows of `model`.
///
/// Rows are overwritten from the top, at most [`ListModel::count`] of them.
/// Each written row gets `text_field`, `markup_field` and `visible = true`;
/// every remaining row is marked `visible = false`. Rows are never added or
/// removed. Returns the number of rows that received a result.
pub fn inject_matches<M>(
    model: &mut M,
    found: &[MatchResult],
    text_field: &str,
    markup_field: &str,
) -> usize
where
    M: ListModel + ?Sized,
{
    let count = model.count();
    let shown = found.len().min(count);
    for (index, result) in found.iter().take(shown).enumerate() {
        model.set_property(index, text_field, result.text.as_str().into());
        model.set_property(index, markup_field, result.markup.as_str().into());
        model.set_property(index, VISIBLE_PROPERTY, true.into());
    }
    for index in shown..count {
        model.set_property(index, VISIBLE_PROPERTY, false.into());
    }
    log::debug!(
        "injected {shown} of {} matches into a list model of {count} rows",
        found.len()
    );
    shown
}
