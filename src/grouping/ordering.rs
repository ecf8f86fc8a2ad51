// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Orderings used by grouping.
//!
//! Two of them, deliberately simple: areas sort by name with plain `str`
//! ordering, overflow pages sort by title with both sides uppercased. No
//! locale collation. Overflow sorting must be stable so that titles equal
//! after uppercasing keep their relevance order.

use crate::types::{SearchArea, SearchResult};
use std::cmp::Ordering;

/// Compare two results by title, case-insensitively.
///
/// Missing titles compare as empty; grouping never sorts untitled results, but
/// the function stays total.
///
/// # Example
///
/// ```ignore
/// let a = SearchResult::new("guide/a", "apple");
/// let b = SearchResult::new("guide/b", "Banana");
///
/// assert_eq!(compare_titles(&a, &b), Ordering::Less);
/// ```
pub fn compare_titles(a: &SearchResult, b: &SearchResult) -> Ordering {
    let a_title = a.title.as_deref().unwrap_or("");
    let b_title = b.title.as_deref().unwrap_or("");
    a_title
        .chars()
        .flat_map(char::to_uppercase)
        .cmp(b_title.chars().flat_map(char::to_uppercase))
}

/// Compare two areas by name.
#[inline]
pub fn compare_areas(a: &SearchArea, b: &SearchArea) -> Ordering {
    a.name.cmp(&b.name)
}

/// Stable in-place sort of overflow pages.
pub fn sort_overflow(pages: &mut [SearchResult]) {
    // INVARIANT: OVERFLOW_SORTED_BY_TITLE
    pages.sort_by(compare_titles);
}
