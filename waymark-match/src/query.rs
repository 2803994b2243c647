//! Query splitting and per-candidate classification.

/// Where a candidate matched the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MatchKind {
    /// Some component occurs at the very start of the candidate.
    Prefix,
    /// Every component occurs, none at the start.
    Later,
}

/// Split a query into lower-cased, whitespace-separated components.
///
/// An empty or blank query yields a single empty component, which matches
/// every candidate at offset zero.
///
/// # Examples
/// ```
/// use waymark_match::components;
///
/// assert_eq!(components("New  York"), ["new", "york"]);
/// assert_eq!(components("   "), [""]);
/// ```
#[must_use]
pub fn components(query: &str) -> Vec<String> {
    let lowered = query.to_lowercase();
    let parts: Vec<String> = lowered.split_whitespace().map(str::to_owned).collect();
    if parts.is_empty() {
        vec![String::new()]
    } else {
        parts
    }
}

/// Classify a lower-cased candidate against lower-cased query components.
///
/// Returns `None` when any component is absent. Otherwise the smallest
/// first-occurrence offset decides: zero is a [`MatchKind::Prefix`] match and
/// anything further in is a [`MatchKind::Later`] match.
///
/// # Examples
/// ```
/// use waymark_match::{MatchKind, classify};
///
/// let parts = ["an".to_owned()];
/// assert_eq!(classify("ant", &parts), Some(MatchKind::Prefix));
/// assert_eq!(classify("banana", &parts), Some(MatchKind::Later));
/// assert_eq!(classify("bee", &parts), None);
/// ```
#[must_use]
pub fn classify<S: AsRef<str>>(lowered_candidate: &str, components: &[S]) -> Option<MatchKind> {
    let mut first = usize::MAX;
    for component in components {
        let offset = lowered_candidate.find(component.as_ref())?;
        first = first.min(offset);
    }
    match first {
        0 => Some(MatchKind::Prefix),
        usize::MAX => None,
        _ => Some(MatchKind::Later),
    }
}
