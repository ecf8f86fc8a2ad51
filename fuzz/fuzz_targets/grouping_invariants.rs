// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for grouping invariants.
//!
//! Generates ranked result lists whose paths mix folders, nested pages,
//! top-level pages and malformed paths (empty, leading or trailing slash),
//! then checks the grouped areas against their input.

#![no_main]

use folio::{
    verify_grouping, GroupingOptions, PointerActivation, ResultGrouper, ResultLink, SearchResult,
    SearchResults,
};
use libfuzzer_sys::fuzz_target;
use std::cell::Cell;
use std::rc::Rc;

/// Fuzz input structure for grouping tests.
#[derive(Debug, Clone)]
struct GroupingInput {
    results: Vec<SearchResult>,
    priority_count: usize,
}

const FOLDERS: &[&str] = &["guide", "api", "Guide", "news", "other", "ä"];
const LEAVES: &[&str] = &["a", "b", "router", "Forms", "ß"];

fn arbitrary_path(u: &mut arbitrary::Unstructured<'_>) -> arbitrary::Result<String> {
    let folder = FOLDERS[u.int_in_range(0..=FOLDERS.len() - 1)?];
    let leaf = LEAVES[u.int_in_range(0..=LEAVES.len() - 1)?];
    Ok(match u.int_in_range(0..=7)? {
        0 => String::new(),
        1 => format!("/{}", folder),
        2 => format!("{}/", folder),
        3 => folder.to_string(),
        4 => format!("{}/{}/{}", folder, leaf, leaf),
        5 => noisy_path(u)?,
        _ => format!("{}/{}", folder, leaf),
    })
}

/// Short strings over an alphabet that includes the separator.
fn noisy_path(u: &mut arbitrary::Unstructured<'_>) -> arbitrary::Result<String> {
    let len = u.int_in_range(0..=12)?;
    (0..len)
        .map(|_| Ok(['a', 'B', '/', ' ', 'é'][u.int_in_range(0..=4)?]))
        .collect()
}

impl<'a> arbitrary::Arbitrary<'a> for GroupingInput {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        let count = u.int_in_range(0..=64)?;
        let mut results = Vec::with_capacity(count);
        for _ in 0..count {
            let path = arbitrary_path(u)?;
            let title = match u.int_in_range(0..=9)? {
                0 => None,
                1 => Some(String::new()),
                _ => Some(<String as arbitrary::Arbitrary>::arbitrary(u)?),
            };
            results.push(SearchResult {
                path,
                title,
                kind: String::new(),
                keywords: String::new(),
                title_words: String::new(),
            });
        }

        // Vary priority counts to test edge cases
        let priority_count = match u.int_in_range(0..=3)? {
            0 => 1,
            1 => 5,
            2 => u.int_in_range(2..=10)?,
            _ => u.int_in_range(1..=100)?,
        };

        Ok(GroupingInput {
            results,
            priority_count,
        })
    }
}

/// Tests critical invariants:
/// - Grouping passes `verify_grouping` against its own input
/// - Grouping is deterministic
/// - Selecting any shown result with a primary click notifies exactly once
fuzz_target!(|input: GroupingInput| {
    let options = GroupingOptions {
        priority_count: input.priority_count,
        ..GroupingOptions::default()
    };
    let grouper = ResultGrouper::new(options.clone());
    let results = SearchResults::new("fuzz", input.results);

    let areas = grouper.group(&results);
    if let Err(err) = verify_grouping(&results, &areas, &options) {
        panic!("grouping invariant violated: {} for {:?}", err, results.results);
    }

    assert_eq!(areas, grouper.group(&results), "grouping is not deterministic");

    let selected = Rc::new(Cell::new(0usize));
    let mut link = ResultLink::new();
    let counter = Rc::clone(&selected);
    link.on_result_selected(move |_| counter.set(counter.get() + 1));
    for page in areas.iter().flat_map(|a| a.iter()) {
        assert!(link.activate(PointerActivation::new(0, false, false), page));
    }
    let shown: usize = areas.iter().map(|a| a.count()).sum();
    assert_eq!(selected.get(), shown);
});
