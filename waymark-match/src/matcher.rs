//! Prefix-first autocomplete matching over flat candidate lists.

use std::collections::HashSet;

use waymark_core::{Highlighter, MarkupHighlighter, MatchResult};

use crate::MatchOptions;
use crate::query::{MatchKind, classify, components};

/// Rank `candidates` against `query` and highlight the survivors.
///
/// Candidates containing every query component are kept. Those where some
/// component starts the candidate come first, then those matching only
/// further in; each group keeps input order. Case-insensitive duplicates
/// collapse onto their first occurrence before the list is cut to
/// `max_results`.
///
/// Each survivor's markup comes from `highlighter`, which receives the whole
/// query. A multi-word query whose words are not adjacent in the candidate
/// typically leaves that candidate's markup unhighlighted.
///
/// # Examples
/// ```
/// use waymark_core::MarkupHighlighter;
/// use waymark_match::find_matches;
///
/// let found = find_matches("", &["b", "a"], 10, &MarkupHighlighter::default());
/// assert_eq!(found[0].text, "b");
/// assert_eq!(found[1].text, "a");
/// ```
#[must_use]
pub fn find_matches<S, H>(
    query: &str,
    candidates: &[S],
    max_results: usize,
    highlighter: &H,
) -> Vec<MatchResult>
where
    S: AsRef<str>,
    H: Highlighter + ?Sized,
{
    find_matches_with_completions::<S, &str, H>(query, candidates, &[], max_results, highlighter)
}

/// Rank candidates as [`find_matches`] does, guaranteeing `completions` a
/// place.
///
/// Completions are strings already known to satisfy the query, such as
/// server-side suggestions. They join the candidate pool for matching and are
/// appended once more after all ranked matches, so a completion that does
/// not literally contain the query still appears if room remains.
#[must_use]
pub fn find_matches_with_completions<S, C, H>(
    query: &str,
    candidates: &[S],
    completions: &[C],
    max_results: usize,
    highlighter: &H,
) -> Vec<MatchResult>
where
    S: AsRef<str>,
    C: AsRef<str>,
    H: Highlighter + ?Sized,
{
    let parts = components(query);
    let pool: Vec<&str> = candidates
        .iter()
        .map(AsRef::as_ref)
        .chain(completions.iter().map(AsRef::as_ref))
        .collect();

    let mut prefix = Vec::new();
    let mut later = Vec::new();
    for &candidate in &pool {
        match classify(&candidate.to_lowercase(), &parts) {
            Some(MatchKind::Prefix) => prefix.push(candidate),
            Some(MatchKind::Later) => later.push(candidate),
            None => log::trace!("'{candidate}' does not match '{query}'"),
        }
    }

    let mut seen = HashSet::new();
    let found: Vec<MatchResult> = prefix
        .into_iter()
        .chain(later)
        .chain(completions.iter().map(AsRef::as_ref))
        .filter(|text| seen.insert(text.to_lowercase()))
        .take(max_results)
        .map(|text| MatchResult::new(text, highlighter.highlight(text, query)))
        .collect();

    log::debug!(
        "matched {} of {} candidates against '{query}'",
        found.len(),
        pool.len()
    );
    found
}

/// A highlighter paired with a result limit.
///
/// # Examples
/// ```
/// use waymark_match::{MatchOptions, Matcher};
///
/// let matcher = Matcher::from_options(&MatchOptions::default());
/// let found = matcher.find("hel", &["Espoo", "Helsinki"]);
/// assert_eq!(found.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Matcher<H> {
    highlighter: H,
    max_results: usize,
}

impl<H: Highlighter> Matcher<H> {
    /// Create a matcher returning at most `max_results` results.
    #[must_use]
    pub const fn new(highlighter: H, max_results: usize) -> Self {
        Self {
            highlighter,
            max_results,
        }
    }

    /// Result limit applied by this matcher.
    #[must_use]
    pub const fn max_results(&self) -> usize {
        self.max_results
    }

    /// Run [`find_matches`] with this matcher's highlighter and limit.
    #[must_use]
    pub fn find<S: AsRef<str>>(&self, query: &str, candidates: &[S]) -> Vec<MatchResult> {
        find_matches(query, candidates, self.max_results, &self.highlighter)
    }

    /// Run [`find_matches_with_completions`] with this matcher's highlighter
    /// and limit.
    #[must_use]
    pub fn find_with_completions<S, C>(
        &self,
        query: &str,
        candidates: &[S],
        completions: &[C],
    ) -> Vec<MatchResult>
    where
        S: AsRef<str>,
        C: AsRef<str>,
    {
        find_matches_with_completions(
            query,
            candidates,
            completions,
            self.max_results,
            &self.highlighter,
        )
    }
}

impl Matcher<MarkupHighlighter> {
    /// Build a rich-text matcher from configuration.
    #[must_use]
    pub const fn from_options(options: &MatchOptions) -> Self {
        Self::new(
            MarkupHighlighter::new(options.highlight_color),
            options.max_results,
        )
    }
}
