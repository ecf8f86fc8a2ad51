// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The grouped view the presentation layer binds to.
//!
//! The search engine pushes complete `SearchResults` values; each one replaces
//! the view wholesale. There is no merging and no reordering: if the upstream
//! can deliver stale queries out of order, discarding them is the caller's job.
//!
//! Three states matter to the page:
//!
//! ```text
//! NotSearched ──push──► NoResults { query }     (query typed, engine found nothing)
//!      ▲        │
//!      │        └─────► Grouped { query, areas } (anything else)
//!      └── push(empty query, no results)
//! ```
//!
//! `NoResults` is decided on the raw list, before untitled results are dropped.
//! A query whose hits are all untitled is `Grouped` with zero areas.

use crate::config::GroupingOptions;
use crate::grouping::ResultGrouper;
use crate::types::{AreaHeading, SearchArea, SearchResults};
use serde::Serialize;
use std::fmt::Write;

/// Message shown when a query found nothing.
pub const NOT_FOUND_MESSAGE: &str = "No results found.";

/// What the results pane should show.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum ResultsState {
    /// No query has produced results yet.
    #[default]
    NotSearched,
    /// A query was submitted and the engine returned nothing.
    NoResults { query: String },
    /// Grouped results for a query.
    Grouped {
        query: String,
        areas: Vec<SearchArea>,
    },
}

impl ResultsState {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ResultsState::NoResults { .. })
    }

    pub fn areas(&self) -> &[SearchArea] {
        match self {
            ResultsState::Grouped { areas, .. } => areas,
            _ => &[],
        }
    }
}

/// Holds the current grouped view and replaces it on every push.
#[derive(Debug, Clone, Default)]
pub struct ResultsView {
    grouper: ResultGrouper,
    state: ResultsState,
    pushes: u64,
}

impl ResultsView {
    pub fn new(options: GroupingOptions) -> Self {
        Self {
            grouper: ResultGrouper::new(options),
            ..Self::default()
        }
    }

    /// Replace the view with one computed from `results`.
    pub fn push(&mut self, results: &SearchResults) -> &ResultsState {
        self.state = if results.is_not_found() {
            ResultsState::NoResults {
                query: results.query.clone(),
            }
        } else if results.query.is_empty() && results.results.is_empty() {
            ResultsState::NotSearched
        } else {
            ResultsState::Grouped {
                query: results.query.clone(),
                areas: self.grouper.group(results),
            }
        };
        self.pushes += 1;
        &self.state
    }

    /// Drain a stream of results (a channel receiver, an iterator, ...).
    ///
    /// Only the last value is grouped. Returns how many earlier values were
    /// superseded without being shown.
    pub fn consume<I>(&mut self, stream: I) -> usize
    where
        I: IntoIterator<Item = SearchResults>,
    {
        let mut superseded = 0;
        let mut latest = None;
        for results in stream {
            if latest.replace(results).is_some() {
                superseded += 1;
            }
        }
        if let Some(results) = latest {
            self.push(&results);
        }
        if superseded > 0 {
            tracing::debug!(superseded, "skipped stale search results");
        }
        superseded
    }

    pub fn state(&self) -> &ResultsState {
        &self.state
    }

    pub fn areas(&self) -> &[SearchArea] {
        self.state.areas()
    }

    /// Number of values pushed so far.
    pub fn pushes(&self) -> u64 {
        self.pushes
    }

    pub fn headings(&self) -> Vec<AreaHeading> {
        self.areas().iter().map(SearchArea::heading).collect()
    }

    /// Plain-text rendering: each heading, then priority pages, then overflow.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        match &self.state {
            ResultsState::NotSearched => {}
            ResultsState::NoResults { .. } => {
                out.push_str(NOT_FOUND_MESSAGE);
                out.push('\n');
            }
            ResultsState::Grouped { areas, .. } => {
                for area in areas {
                    let _ = writeln!(out, "{}", area.heading());
                    for page in area.iter() {
                        let title = page.display_title().unwrap_or_default();
                        let _ = writeln!(out, "  {} <{}>", title, page.path);
                    }
                }
            }
        }
        out
    }
}
