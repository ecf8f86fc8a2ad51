// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A grouping you can trust, and the errors explaining why one can't be.
//!
//! `verify_grouping` re-derives what a grouping pass should have produced from
//! its input and compares. It is intentionally independent of the grouper's
//! bucketing code: it only shares folder classification and title ordering.
//!
//! # Checked properties
//!
//! | Property          | Violation                                  |
//! |-------------------|--------------------------------------------|
//! | Title filter      | `UntitledResult`                           |
//! | Completeness      | `MissingResult`, `DuplicatedResult`        |
//! | Classification    | `WrongArea`                                |
//! | Area ordering     | `UnsortedAreas`, `EmptyArea`               |
//! | Priority bound    | `PriorityOverflow`, `PrematureOverflow`    |
//! | Priority order    | `PriorityMismatch`                         |
//! | Overflow sort     | `UnsortedOverflow`                         |
//!
//! # Example
//!
//! ```ignore
//! let areas = grouper.group(&input);
//! let verified = VerifiedGrouping::new(&input, areas, grouper.options())?;
//! ```

use crate::config::GroupingOptions;
use crate::grouping::folder::{FolderIndex, FolderKey};
use crate::grouping::ordering::compare_titles;
use crate::types::{SearchArea, SearchResult, SearchResults};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;

/// Error type for grouping invariant violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantError {
    /// A result without a title made it into an area.
    UntitledResult { area: String, path: String },
    /// A titled input result is absent from every area.
    MissingResult { path: String },
    /// A result appears more often than it was given.
    DuplicatedResult { path: String },
    /// A result sits in an area other than its folder key.
    WrongArea {
        path: String,
        area: String,
        expected: String,
    },
    /// Area names are not strictly ascending.
    UnsortedAreas { position: usize },
    /// An area has no pages.
    EmptyArea { area: String },
    /// More priority pages than allowed.
    PriorityOverflow {
        area: String,
        len: usize,
        limit: usize,
    },
    /// Overflow pages exist while priority pages are not full.
    PrematureOverflow { area: String, priority_len: usize },
    /// Priority pages are not the area's top-ranked results in engine order.
    PriorityMismatch { area: String },
    /// Overflow pages are not sorted by title.
    UnsortedOverflow { area: String, position: usize },
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantError::UntitledResult { area, path } => {
                write!(f, "untitled result '{}' in area '{}'", path, area)
            }
            InvariantError::MissingResult { path } => {
                write!(f, "result '{}' missing from every area", path)
            }
            InvariantError::DuplicatedResult { path } => {
                write!(f, "result '{}' appears more than once", path)
            }
            InvariantError::WrongArea {
                path,
                area,
                expected,
            } => {
                write!(
                    f,
                    "result '{}' in area '{}', expected '{}'",
                    path, area, expected
                )
            }
            InvariantError::UnsortedAreas { position } => {
                write!(f, "areas not sorted by name at position {}", position)
            }
            InvariantError::EmptyArea { area } => write!(f, "area '{}' is empty", area),
            InvariantError::PriorityOverflow { area, len, limit } => {
                write!(
                    f,
                    "area '{}' has {} priority pages, limit {}",
                    area, len, limit
                )
            }
            InvariantError::PrematureOverflow { area, priority_len } => {
                write!(
                    f,
                    "area '{}' has overflow pages but only {} priority pages",
                    area, priority_len
                )
            }
            InvariantError::PriorityMismatch { area } => {
                write!(f, "area '{}' priority pages are not its top results", area)
            }
            InvariantError::UnsortedOverflow { area, position } => {
                write!(
                    f,
                    "area '{}' overflow not sorted by title at position {}",
                    area, position
                )
            }
        }
    }
}

impl std::error::Error for InvariantError {}

/// Check `areas` against the `input` they were grouped from.
///
/// Returns the first violation found.
pub fn verify_grouping(
    input: &SearchResults,
    areas: &[SearchArea],
    options: &GroupingOptions,
) -> Result<(), InvariantError> {
    check_area_shape(areas, options)?;
    check_completeness(input, areas)?;

    let survivors: Vec<&SearchResult> = input
        .results
        .iter()
        .filter(|r| r.is_displayable())
        .collect();
    let folders = FolderIndex::from_results(survivors.iter().copied());
    let expected_area = |result: &SearchResult| -> String {
        match folders.classify(&result.path) {
            FolderKey::Folder(folder) => folder.to_string(),
            FolderKey::Default => options.default_area.clone(),
        }
    };

    for area in areas {
        for page in area.iter() {
            let expected = expected_area(page);
            if expected != area.name {
                return Err(InvariantError::WrongArea {
                    path: page.path.clone(),
                    area: area.name.clone(),
                    expected,
                });
            }
        }

        // Priority pages must be exactly the first results of this bucket
        let bucket_head: Vec<&SearchResult> = survivors
            .iter()
            .copied()
            .filter(|r| expected_area(r) == area.name)
            .take(options.priority_count)
            .collect();
        let matches_head = bucket_head.len() == area.priority_pages.len()
            && bucket_head
                .iter()
                .zip(&area.priority_pages)
                .all(|(expected, actual)| *expected == actual);
        if !matches_head {
            return Err(InvariantError::PriorityMismatch {
                area: area.name.clone(),
            });
        }
    }

    Ok(())
}

/// Structural checks that need no input.
fn check_area_shape(areas: &[SearchArea], options: &GroupingOptions) -> Result<(), InvariantError> {
    for (i, pair) in areas.windows(2).enumerate() {
        if pair[0].name >= pair[1].name {
            return Err(InvariantError::UnsortedAreas { position: i + 1 });
        }
    }

    for area in areas {
        if area.count() == 0 {
            return Err(InvariantError::EmptyArea {
                area: area.name.clone(),
            });
        }
        if let Some(page) = area.iter().find(|p| !p.is_displayable()) {
            return Err(InvariantError::UntitledResult {
                area: area.name.clone(),
                path: page.path.clone(),
            });
        }
        if area.priority_pages.len() > options.priority_count {
            return Err(InvariantError::PriorityOverflow {
                area: area.name.clone(),
                len: area.priority_pages.len(),
                limit: options.priority_count,
            });
        }
        if !area.pages.is_empty() && area.priority_pages.len() < options.priority_count {
            return Err(InvariantError::PrematureOverflow {
                area: area.name.clone(),
                priority_len: area.priority_pages.len(),
            });
        }
        for (i, pair) in area.pages.windows(2).enumerate() {
            if compare_titles(&pair[0], &pair[1]) == Ordering::Greater {
                return Err(InvariantError::UnsortedOverflow {
                    area: area.name.clone(),
                    position: i + 1,
                });
            }
        }
    }

    Ok(())
}

/// Every titled input appears exactly as often as it was given.
fn check_completeness(input: &SearchResults, areas: &[SearchArea]) -> Result<(), InvariantError> {
    let mut balance: HashMap<&SearchResult, i64> = HashMap::new();
    for result in input.results.iter().filter(|r| r.is_displayable()) {
        *balance.entry(result).or_insert(0) += 1;
    }
    for page in areas.iter().flat_map(SearchArea::iter) {
        let count = balance.entry(page).or_insert(0);
        *count -= 1;
        if *count < 0 {
            return Err(InvariantError::DuplicatedResult {
                path: page.path.clone(),
            });
        }
    }

    // Report the first missing result in input order
    for result in &input.results {
        if balance.get(result).is_some_and(|&count| count > 0) {
            return Err(InvariantError::MissingResult {
                path: result.path.clone(),
            });
        }
    }

    Ok(())
}

/// Areas that passed `verify_grouping` against their input.
///
/// # Invariants (enforced at construction)
/// - Every titled input result appears exactly once
/// - Areas sorted by name, none empty
/// - Priority pages are each area's top results; overflow sorted by title
#[derive(Debug, Clone)]
pub struct VerifiedGrouping {
    areas: Vec<SearchArea>,
}

impl VerifiedGrouping {
    /// Verify `areas` against `input`, taking ownership on success.
    pub fn new(
        input: &SearchResults,
        areas: Vec<SearchArea>,
        options: &GroupingOptions,
    ) -> Result<Self, InvariantError> {
        verify_grouping(input, &areas, options)?;
        Ok(Self { areas })
    }

    pub fn areas(&self) -> &[SearchArea] {
        &self.areas
    }

    /// Total number of pages across all areas.
    pub fn page_count(&self) -> usize {
        self.areas.iter().map(SearchArea::count).sum()
    }

    pub fn into_areas(self) -> Vec<SearchArea> {
        self.areas
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grouping::ResultGrouper;
    use crate::testing::{make_result, make_untitled};

    fn fixture() -> SearchResults {
        let mut results: Vec<SearchResult> = (0..8)
            .map(|i| make_result(&format!("guide/{}", i), &format!("Guide {}", 8 - i)))
            .collect();
        results.push(make_result("tutorial", "Tutorial"));
        results.push(make_result("tutorial/a", "Part A"));
        results.push(make_untitled("api/x"));
        SearchResults::new("q", results)
    }

    #[test]
    fn grouper_output_verifies() {
        let input = fixture();
        let grouper = ResultGrouper::default();
        let verified = VerifiedGrouping::new(&input, grouper.group(&input), grouper.options())
            .expect("grouping should verify");
        assert_eq!(verified.page_count(), 10);
    }

    #[test]
    fn dropped_result_is_missing() {
        let input = fixture();
        let mut areas = ResultGrouper::default().group(&input);
        areas[0].pages.pop();
        assert!(matches!(
            verify_grouping(&input, &areas, &GroupingOptions::default()),
            Err(InvariantError::MissingResult { .. })
        ));
    }

    #[test]
    fn duplicated_result_is_reported() {
        let input = fixture();
        let mut areas = ResultGrouper::default().group(&input);
        let dup = areas[1].priority_pages[0].clone();
        areas[1].priority_pages.push(dup);
        assert!(matches!(
            verify_grouping(&input, &areas, &GroupingOptions::default()),
            Err(InvariantError::DuplicatedResult { .. })
        ));
    }

    #[test]
    fn untitled_result_is_reported() {
        let input = fixture();
        let mut areas = ResultGrouper::default().group(&input);
        areas[0].priority_pages[0].title = None;
        assert!(matches!(
            verify_grouping(&input, &areas, &GroupingOptions::default()),
            Err(InvariantError::UntitledResult { .. })
        ));
    }

    #[test]
    fn reversed_overflow_is_unsorted() {
        let input = fixture();
        let mut areas = ResultGrouper::default().group(&input);
        areas[0].pages.reverse();
        assert_eq!(
            verify_grouping(&input, &areas, &GroupingOptions::default()),
            Err(InvariantError::UnsortedOverflow {
                area: "guide".to_string(),
                position: 1
            })
        );
    }

    #[test]
    fn swapped_priority_is_mismatch() {
        let input = fixture();
        let mut areas = ResultGrouper::default().group(&input);
        areas[0].priority_pages.swap(0, 1);
        assert!(matches!(
            verify_grouping(&input, &areas, &GroupingOptions::default()),
            Err(InvariantError::PriorityMismatch { .. })
        ));
    }

    #[test]
    fn moved_result_is_wrong_area() {
        let input = SearchResults::new(
            "",
            vec![make_result("api/a", "A"), make_result("guide/b", "B")],
        );
        let areas = vec![SearchArea {
            name: "api".to_string(),
            priority_pages: vec![make_result("api/a", "A"), make_result("guide/b", "B")],
            pages: vec![],
        }];
        assert!(matches!(
            verify_grouping(&input, &areas, &GroupingOptions::default()),
            Err(InvariantError::WrongArea { .. })
        ));
    }

    #[test]
    fn error_messages_name_the_area() {
        let err = InvariantError::PriorityOverflow {
            area: "guide".to_string(),
            len: 6,
            limit: 5,
        };
        assert_eq!(err.to_string(), "area 'guide' has 6 priority pages, limit 5");
    }
}
