//! Shared test utilities and fixtures.

#![allow(dead_code)]

use folio::{SearchArea, SearchResult, SearchResults};

// Re-export canonical test utilities from folio::testing
pub use folio::testing::{docs_fixture, make_result, make_results, make_untitled, primary_click};

// ============================================================================
// FIXTURES
// ============================================================================

/// Five `api` pages followed by ten `guide` pages.
///
/// Guide titles are ranked so the three alphabetically earliest (A, B, C) sit
/// in the top five, and the remaining five arrive out of title order.
pub fn scenario_results() -> SearchResults {
    let mut results: Vec<SearchResult> = ["v", "w", "x", "y", "z"]
        .iter()
        .map(|l| make_result(&format!("api/{}", l), &format!("API {}", l.to_uppercase())))
        .collect();
    results.extend(
        ["C", "A", "J", "B", "H", "F", "D", "I", "E", "G"]
            .iter()
            .map(|l| make_result(&format!("guide/{}", l.to_lowercase()), &format!("Guide {}", l))),
    );
    make_results("", results)
}

// ============================================================================
// ASSERTION HELPERS
// ============================================================================

pub fn area_names(areas: &[SearchArea]) -> Vec<&str> {
    areas.iter().map(|a| a.name.as_str()).collect()
}

pub fn titles(pages: &[SearchResult]) -> Vec<&str> {
    pages
        .iter()
        .map(|p| p.title.as_deref().unwrap_or(""))
        .collect()
}

pub fn find_area<'a>(areas: &'a [SearchArea], name: &str) -> &'a SearchArea {
    areas
        .iter()
        .find(|a| a.name == name)
        .unwrap_or_else(|| panic!("no area named '{}' in {:?}", name, area_names(areas)))
}
