// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for grouping passes.
//!
//! Debug-mode assertions over the areas a grouping pass just produced:
//!
//! 1. Are **zero-cost in release builds** (use `debug_assert!`)
//! 2. Provide **early failure detection** during development
//! 3. Mirror the checks in `verify_grouping`, minus the input comparison
//!
//! | Contract Function          | Property                                      |
//! |----------------------------|-----------------------------------------------|
//! | `check_areas_sorted`       | Area names strictly ascending                 |
//! | `check_priority_bound`     | `priority_pages.len() <= priority_count`      |
//! | `check_overflow_sorted`    | Overflow pages in case-insensitive title order|
//! | `check_no_empty_areas`     | Every area holds at least one page            |
//! | `check_grouping`           | All of the above plus the page total          |

use crate::config::PRIORITY_COUNT;
use crate::grouping::ordering::{compare_areas, compare_titles};
use crate::types::SearchArea;
use std::cmp::Ordering;

// Default options must be able to hold at least one priority page.
const _: () = assert!(PRIORITY_COUNT > 0);

/// Check that area names are strictly ascending (and therefore unique).
#[inline]
pub fn check_areas_sorted(areas: &[SearchArea]) {
    for i in 1..areas.len() {
        debug_assert!(
            compare_areas(&areas[i - 1], &areas[i]) == Ordering::Less,
            "Contract violation: areas[{}] '{}' >= areas[{}] '{}'",
            i - 1,
            areas[i - 1].name,
            i,
            areas[i].name
        );
    }
}

/// Check the priority bound, and that overflow only exists once priority is full.
#[inline]
pub fn check_priority_bound(areas: &[SearchArea], priority_count: usize) {
    for area in areas {
        debug_assert!(
            area.priority_pages.len() <= priority_count,
            "Contract violation: area '{}' has {} priority pages, limit {}",
            area.name,
            area.priority_pages.len(),
            priority_count
        );
        debug_assert!(
            area.pages.is_empty() || area.priority_pages.len() == priority_count,
            "Contract violation: area '{}' overflows with only {} priority pages",
            area.name,
            area.priority_pages.len()
        );
    }
}

/// Check that overflow pages are sorted by title.
#[inline]
pub fn check_overflow_sorted(areas: &[SearchArea]) {
    for area in areas {
        for pair in area.pages.windows(2) {
            debug_assert!(
                compare_titles(&pair[0], &pair[1]) != Ordering::Greater,
                "Contract violation: area '{}' overflow unsorted at '{}'",
                area.name,
                pair[1].path
            );
        }
    }
}

/// Check that no area is empty.
#[inline]
pub fn check_no_empty_areas(areas: &[SearchArea]) {
    for area in areas {
        debug_assert!(
            area.count() > 0,
            "Contract violation: area '{}' is empty",
            area.name
        );
    }
}

/// Run every grouping contract.
///
/// `expected_total` is the number of results that survived the title filter.
#[inline]
pub fn check_grouping(areas: &[SearchArea], expected_total: usize, priority_count: usize) {
    check_areas_sorted(areas);
    check_priority_bound(areas, priority_count);
    check_overflow_sorted(areas);
    check_no_empty_areas(areas);

    let total: usize = areas.iter().map(SearchArea::count).sum();
    debug_assert_eq!(
        total, expected_total,
        "Contract violation: grouped {} pages from {} titled results",
        total, expected_total
    );
}
