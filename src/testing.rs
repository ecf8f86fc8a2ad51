//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::selection::PointerActivation;
use crate::types::{SearchResult, SearchResults};

/// Create a titled result with empty metadata fields.
///
/// This is the canonical implementation used across all tests.
pub fn make_result(path: &str, title: &str) -> SearchResult {
    SearchResult::new(path, title)
}

/// Create a result the index emitted without a title.
pub fn make_untitled(path: &str) -> SearchResult {
    SearchResult {
        path: path.to_string(),
        title: None,
        kind: "marketing".to_string(),
        keywords: String::new(),
        title_words: String::new(),
    }
}

/// The fifteen-result fixture used by the browser component's own tests.
///
/// Two `api` pages, three hand-written `guide` pages (one nested), then ten
/// more `guide` pages titled `Guide n` down to `Guide e`.
pub fn docs_fixture() -> Vec<SearchResult> {
    let mut results = vec![
        make_result("guide/a", "Guide A"),
        make_result("api/d", "API D"),
        make_result("guide/b", "Guide B"),
        make_result("guide/a/c", "Guide A - C"),
        make_result("api/c", "API C"),
    ];
    results.extend(
        "nmlkjihgfe"
            .chars()
            .map(|l| make_result(&format!("guide/{}", l), &format!("Guide {}", l))),
    );
    results
}

/// Wrap results in a `SearchResults` with the given query.
pub fn make_results(query: &str, results: Vec<SearchResult>) -> SearchResults {
    SearchResults::new(query, results)
}

/// A primary-button click with no modifiers.
pub fn primary_click() -> PointerActivation {
    PointerActivation::new(0, false, false)
}
