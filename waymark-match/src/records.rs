//! Multi-field record search.

use std::cmp::Ordering;

use waymark_core::{FieldValue, Record};

use crate::query::components;

/// Filter `records` by `query` and order them by `keys`.
///
/// A non-empty query keeps only records whose `keys` fields, lower-cased and
/// joined with spaces, contain every query component. Unlike
/// [`find_matches`](crate::find_matches) the match position plays no part in
/// the order.
///
/// Survivors are sorted lexicographically over `keys`: for each key a
/// non-null value sorts before a null one, otherwise values compare by
/// [`FieldValue::natural_cmp`]. The sort is stable, so records equal on every
/// key keep their input order. References into `records` are returned.
///
/// # Examples
/// ```
/// use waymark_core::Record;
/// use waymark_match::match_records;
///
/// let records = [
///     Record::new().with("name", "Bob"),
///     Record::new().with("name", "Alice"),
/// ];
/// let found = match_records("alice", &records, &["name"]);
/// assert_eq!(found, [&records[1]]);
/// ```
#[must_use]
pub fn match_records<'a>(query: &str, records: &'a [Record], keys: &[&str]) -> Vec<&'a Record> {
    let mut order: Vec<usize> = (0..records.len()).collect();

    if !query.trim().is_empty() {
        let parts = components(query);
        order.retain(|&index| {
            records.get(index).is_some_and(|record| {
                let haystack = haystack(record, keys);
                parts.iter().all(|part| haystack.contains(part.as_str()))
            })
        });
    }

    order.sort_by(|&a, &b| match (records.get(a), records.get(b)) {
        (Some(left), Some(right)) => compare_by_keys(left, right, keys),
        _ => Ordering::Equal,
    });

    log::debug!(
        "{} of {} records match '{query}' on {keys:?}",
        order.len(),
        records.len()
    );
    order.into_iter().filter_map(|index| records.get(index)).collect()
}

/// Lower-cased `keys` field values joined with single spaces.
fn haystack(record: &Record, keys: &[&str]) -> String {
    keys.iter()
        .map(|key| record.get(key).map(FieldValue::to_string).unwrap_or_default())
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

fn compare_by_keys(left: &Record, right: &Record, keys: &[&str]) -> Ordering {
    keys.iter()
        .map(|key| match (left.get(key), right.get(key)) {
            (Some(a), Some(b)) => a.natural_cmp(b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        })
        .find(|ordering| ordering.is_ne())
        .unwrap_or(Ordering::Equal)
}
