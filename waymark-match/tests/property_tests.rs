//! Property-based tests for candidate matching.
//!
//! # Invariants tested
//!
//! - **Limit:** never more than `max_results` results.
//! - **No duplicates:** results are unique ignoring case.
//! - **Provenance:** every result comes from the candidates.
//! - **Prefix first:** no later match precedes a prefix match.
//! - **Empty query:** every distinct candidate is kept in input order.

use std::collections::HashSet;

use proptest::prelude::*;
use waymark_core::test_support::BracketHighlighter;
use waymark_match::{classify, components, find_matches};

fn candidate_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-cA-C ]{0,8}", 0..20)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn results_respect_limit_and_uniqueness(
        candidates in candidate_strategy(),
        query in "[a-c]{0,2}",
        max_results in 0_usize..12,
    ) {
        let found = find_matches(&query, &candidates, max_results, &BracketHighlighter);
        prop_assert!(found.len() <= max_results);

        let mut seen = HashSet::new();
        for result in &found {
            prop_assert!(seen.insert(result.text.to_lowercase()), "duplicate {}", result.text);
            prop_assert!(candidates.contains(&result.text));
        }
    }

    #[test]
    fn prefix_matches_precede_later_matches(
        candidates in candidate_strategy(),
        query in "[a-c]{1,2}( [a-c])?",
    ) {
        let parts = components(&query);
        let found = find_matches(&query, &candidates, usize::MAX, &BracketHighlighter);
        let kinds: Vec<_> = found
            .iter()
            .map(|result| classify(&result.text.to_lowercase(), &parts))
            .collect();

        prop_assert!(kinds.iter().all(Option::is_some));
        prop_assert!(kinds.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn empty_query_keeps_distinct_candidates_in_order(candidates in candidate_strategy()) {
        let found = find_matches("", &candidates, usize::MAX, &BracketHighlighter);

        let mut seen = HashSet::new();
        let expected: Vec<&String> = candidates
            .iter()
            .filter(|candidate| seen.insert(candidate.to_lowercase()))
            .collect();
        let texts: Vec<&String> = found.iter().map(|result| &result.text).collect();
        prop_assert_eq!(texts, expected);
    }
}
