// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for results JSON coming from the search worker.
//!
//! Any payload that deserializes must group cleanly, and the resulting view
//! state must serialize back to JSON.

#![no_main]

use folio::{verify_grouping, GroupingOptions, ResultsView, SearchResults};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(results) = serde_json::from_slice::<SearchResults>(data) else {
        return;
    };

    let mut view = ResultsView::default();
    let state = view.push(&results).clone();

    if results.is_not_found() {
        assert!(state.is_not_found());
        return;
    }

    let options = GroupingOptions::default();
    if let Err(err) = verify_grouping(&results, state.areas(), &options) {
        panic!("grouping invariant violated: {}", err);
    }
    assert!(serde_json::to_string(&state).is_ok());
});
