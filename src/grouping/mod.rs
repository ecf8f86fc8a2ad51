// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result grouping: flat ranked hits in, named areas out.
//!
//! ```text
//! SearchResults ──► filter ──► classify ──► bucket ──► split ──► Vec<SearchArea>
//!                  (titles)   (folder key)  (BTreeMap,  (priority in rank order,
//!                                            by name)    overflow by title)
//! ```
//!
//! Each pass is pure and starts from scratch. Nothing carries over between
//! queries, so the same input always produces the same areas.

pub mod folder;
pub mod ordering;

use crate::config::GroupingOptions;
use crate::types::{SearchArea, SearchResult, SearchResults};
use crate::verify::contracts::check_grouping;
use folder::{FolderIndex, FolderKey};
use std::collections::BTreeMap;

/// Groups flat search results into areas.
#[derive(Debug, Clone, Default)]
pub struct ResultGrouper {
    options: GroupingOptions,
}

impl ResultGrouper {
    pub fn new(options: GroupingOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &GroupingOptions {
        &self.options
    }

    /// Group `input` into areas sorted by name.
    ///
    /// Untitled results are dropped. Every other result lands in exactly one
    /// area, either among its first `priority_count` pages (engine order) or in
    /// the overflow list (title order).
    pub fn group(&self, input: &SearchResults) -> Vec<SearchArea> {
        let survivors: Vec<&SearchResult> = input
            .results
            .iter()
            .filter(|result| {
                let keep = result.is_displayable();
                if !keep {
                    tracing::trace!(path = %result.path, "dropping search result without title");
                }
                keep
            })
            .collect();
        let dropped = input.results.len() - survivors.len();

        let folders = FolderIndex::from_results(survivors.iter().copied());

        // INVARIANT: AREAS_SORTED_BY_NAME
        // BTreeMap keeps area names in ascending `str` order
        let mut buckets: BTreeMap<&str, Vec<&SearchResult>> = BTreeMap::new();
        for &result in &survivors {
            let name = match folders.classify(&result.path) {
                FolderKey::Folder(folder) => folder,
                FolderKey::Default => self.options.default_area.as_str(),
            };
            buckets.entry(name).or_default().push(result);
        }

        let areas: Vec<SearchArea> = buckets
            .into_iter()
            .map(|(name, bucket)| self.split_area(name, &bucket))
            .collect();

        check_grouping(&areas, survivors.len(), self.options.priority_count);

        tracing::debug!(
            query = %input.query,
            results = input.results.len(),
            dropped,
            areas = areas.len(),
            "grouped search results"
        );

        areas
    }

    /// Split one bucket into priority and overflow pages.
    fn split_area(&self, name: &str, bucket: &[&SearchResult]) -> SearchArea {
        // INVARIANT: PRIORITY_IN_RANK_ORDER
        let split = bucket.len().min(self.options.priority_count);
        let (priority, overflow) = bucket.split_at(split);

        let priority_pages = priority.iter().map(|r| (*r).clone()).collect();
        let mut pages: Vec<SearchResult> = overflow.iter().map(|r| (*r).clone()).collect();
        ordering::sort_overflow(&mut pages);

        SearchArea {
            name: name.to_string(),
            priority_pages,
            pages,
        }
    }
}

/// Group with the default options (5 priority pages, `other` catch-all).
pub fn group_results(input: &SearchResults) -> Vec<SearchArea> {
    ResultGrouper::default().group(input)
}
