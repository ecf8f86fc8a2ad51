//! Grouping invariants over random result lists.

use super::common::area_names;
use folio::{
    compare_titles, group_results, verify_grouping, GroupingOptions, ResultGrouper, SearchResult,
    SearchResults,
};
use proptest::prelude::*;
use std::cmp::Ordering;

// ============================================================================
// STRATEGIES
// ============================================================================

/// Paths drawn from a small alphabet so folders and top-level pages collide.
fn path_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => "(guide|api|news)",
        6 => "(guide|api|news)/[a-e]{1,2}",
        2 => "(guide|api)/[a-e]{1,2}/[a-e]{1,2}",
        1 => Just(String::new()),
        1 => "(guide|news)/",
    ]
}

fn title_strategy() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        8 => "[A-Za-z][A-Za-z ]{0,10}".prop_map(Some),
        1 => Just(Some(String::new())),
        1 => Just(None),
    ]
}

fn result_strategy() -> impl Strategy<Value = SearchResult> {
    (path_strategy(), title_strategy()).prop_map(|(path, title)| SearchResult {
        path,
        title,
        kind: String::new(),
        keywords: String::new(),
        title_words: String::new(),
    })
}

fn results_strategy() -> impl Strategy<Value = SearchResults> {
    prop::collection::vec(result_strategy(), 0..50)
        .prop_map(|results| SearchResults::new("query", results))
}

fn options_strategy() -> impl Strategy<Value = GroupingOptions> {
    (1usize..8).prop_map(|priority_count| GroupingOptions {
        priority_count,
        ..GroupingOptions::default()
    })
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Whatever the grouper produces passes the full invariant check.
    #[test]
    fn prop_grouping_verifies(input in results_strategy(), options in options_strategy()) {
        let grouper = ResultGrouper::new(options.clone());
        let areas = grouper.group(&input);
        prop_assert_eq!(verify_grouping(&input, &areas, &options), Ok(()));
    }

    /// Only titled results appear, and all of them do.
    #[test]
    fn prop_titled_results_conserved(input in results_strategy()) {
        let areas = group_results(&input);
        let shown: usize = areas.iter().map(|a| a.count()).sum();
        let titled = input.results.iter().filter(|r| r.is_displayable()).count();
        prop_assert_eq!(shown, titled);
        for page in areas.iter().flat_map(|a| a.iter()) {
            prop_assert!(page.is_displayable());
        }
    }

    /// No area shows more than `priority_count` priority pages, and overflow
    /// only starts once they are full.
    #[test]
    fn prop_priority_bound(input in results_strategy(), options in options_strategy()) {
        let areas = ResultGrouper::new(options.clone()).group(&input);
        for area in &areas {
            prop_assert!(area.priority_pages.len() <= options.priority_count);
            if !area.pages.is_empty() {
                prop_assert_eq!(area.priority_pages.len(), options.priority_count);
            }
            prop_assert!(area.count() > 0);
        }
    }

    /// Areas are strictly ascending by name.
    #[test]
    fn prop_areas_sorted(input in results_strategy()) {
        let areas = group_results(&input);
        let names = area_names(&areas);
        for pair in names.windows(2) {
            prop_assert!(pair[0] < pair[1], "{:?}", names);
        }
    }

    /// Overflow pages are ordered by title, ignoring case.
    #[test]
    fn prop_overflow_sorted(input in results_strategy()) {
        for area in group_results(&input) {
            for pair in area.pages.windows(2) {
                prop_assert_ne!(compare_titles(&pair[0], &pair[1]), Ordering::Greater);
            }
        }
    }

    /// Grouping the same input twice gives the same areas.
    #[test]
    fn prop_grouping_deterministic(input in results_strategy()) {
        prop_assert_eq!(group_results(&input), group_results(&input));
    }

    /// Untitled results never change how titled ones are grouped.
    #[test]
    fn prop_untitled_results_are_invisible(input in results_strategy()) {
        let titled: Vec<SearchResult> = input
            .results
            .iter()
            .filter(|r| r.is_displayable())
            .cloned()
            .collect();
        let filtered = SearchResults::new(input.query.clone(), titled);
        prop_assert_eq!(group_results(&input), group_results(&filtered));
    }
}
