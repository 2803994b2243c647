//! Test-only collaborators used by unit and behaviour tests.

use std::collections::BTreeMap;

use crate::{Highlighter, ListModel, PropertyValue, find_ignore_case};

/// A single row of a [`MemoryListModel`], keyed by property name.
pub type Row = BTreeMap<String, PropertyValue>;

/// In-memory `ListModel` backed by a vector of property maps.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct MemoryListModel {
    rows: Vec<Row>,
}

impl MemoryListModel {
    /// Create a model holding `rows` empty rows.
    #[must_use]
    pub fn with_rows(rows: usize) -> Self {
        Self {
            rows: vec![Row::new(); rows],
        }
    }

    /// Text stored in `field` of the row at `index`, if any.
    #[must_use]
    pub fn text(&self, index: usize, field: &str) -> Option<&str> {
        match self.rows.get(index)?.get(field)? {
            PropertyValue::Text(text) => Some(text.as_str()),
            PropertyValue::Flag(_) => None,
        }
    }

    /// Flag stored in `field` of the row at `index`, if any.
    #[must_use]
    pub fn flag(&self, index: usize, field: &str) -> Option<bool> {
        match self.rows.get(index)?.get(field)? {
            PropertyValue::Flag(flag) => Some(*flag),
            PropertyValue::Text(_) => None,
        }
    }
}

impl ListModel for MemoryListModel {
    type Item = Row;

    fn count(&self) -> usize {
        self.rows.len()
    }

    fn append(&mut self, item: Self::Item) {
        self.rows.push(item);
    }

    fn set_property(&mut self, index: usize, field: &str, value: PropertyValue) {
        if let Some(row) = self.rows.get_mut(index) {
            row.insert(field.to_owned(), value);
        }
    }
}

/// `Highlighter` wrapping the matched span in square brackets.
///
/// Keeps assertions readable without spelling out rich-text tags.
#[derive(Debug, Default, Clone, Copy)]
pub struct BracketHighlighter;

impl Highlighter for BracketHighlighter {
    fn highlight(&self, text: &str, query: &str) -> String {
        find_ignore_case(text, query)
            .and_then(|span| {
                Some(format!(
                    "{}[{}]{}",
                    text.get(..span.start)?,
                    text.get(span.clone())?,
                    text.get(span.end..)?
                ))
            })
            .unwrap_or_else(|| text.to_owned())
    }
}
