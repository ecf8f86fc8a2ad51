// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The values that flow through folio.
//!
//! The search engine hands us `SearchResults` (a query plus a flat, ranked list
//! of `SearchResult`s). Grouping turns that list into `SearchArea`s. Field names
//! on the wire match what the browser side already speaks (`titleWords`,
//! `priorityPages`, `type`), so these types round-trip through JSON and
//! `serde-wasm-bindgen` unchanged.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **SearchResult**: a result is only displayable when `title` is present and
//!   non-empty. Untitled results never reach a `SearchArea`.
//!
//! - **SearchArea**: `priority_pages.len() <= priority_count` and
//!   `pages` is non-empty only when `priority_pages` is full.
//!   `pages` is sorted by title, case-insensitively. Areas are never empty.
//!
//! Use `verify::verify_grouping` to check a grouped view against its input.

use serde::{Deserialize, Serialize};

/// One hit from the search engine.
///
/// `title` is optional because the index occasionally emits pages without one.
/// Those are filtered out before grouping rather than rejected as errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    /// Site-relative page path, e.g. `guide/router`
    pub path: String,
    /// Display title. `None` or empty means the result is not displayable.
    #[serde(default)]
    pub title: Option<String>,
    /// Page type as reported by the index (`guide`, `marketing`, ...)
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub keywords: String,
    #[serde(default)]
    pub title_words: String,
}

impl SearchResult {
    /// Create a titled result with empty metadata fields.
    pub fn new(path: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            title: Some(title.into()),
            kind: String::new(),
            keywords: String::new(),
            title_words: String::new(),
        }
    }

    /// Set the page type.
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    /// The title, if this result can be displayed.
    #[inline]
    pub fn display_title(&self) -> Option<&str> {
        self.title.as_deref().filter(|t| !t.is_empty())
    }

    /// Whether this result survives the title filter.
    #[inline]
    pub fn is_displayable(&self) -> bool {
        self.display_title().is_some()
    }
}

/// One completed query: the query text and its ranked results.
///
/// Each value replaces whatever was shown before. It is never a delta.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResults {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub results: Vec<SearchResult>,
}

impl SearchResults {
    pub fn new(query: impl Into<String>, results: Vec<SearchResult>) -> Self {
        Self {
            query: query.into(),
            results,
        }
    }

    /// True when a query was submitted and the engine found nothing.
    ///
    /// Checked against the raw list, before titles are filtered.
    pub fn is_not_found(&self) -> bool {
        !self.query.is_empty() && self.results.is_empty()
    }
}

/// A named group of results sharing a top-level folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchArea {
    pub name: String,
    /// Highest-ranked results of the area, in engine order.
    pub priority_pages: Vec<SearchResult>,
    /// Remaining results, sorted by title.
    pub pages: Vec<SearchResult>,
}

impl SearchArea {
    /// Total number of results in the area (shown in its heading).
    #[inline]
    pub fn count(&self) -> usize {
        self.priority_pages.len() + self.pages.len()
    }

    /// Priority pages followed by overflow pages, in display order.
    pub fn iter(&self) -> impl Iterator<Item = &SearchResult> {
        self.priority_pages.iter().chain(self.pages.iter())
    }

    pub fn heading(&self) -> AreaHeading {
        AreaHeading {
            name: self.name.clone(),
            count: self.count(),
        }
    }
}

/// Heading shown above each area: its name and how many pages it holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaHeading {
    pub name: String,
    pub count: usize,
}

impl std::fmt::Display for AreaHeading {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.count)
    }
}
