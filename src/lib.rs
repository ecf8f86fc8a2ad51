// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Grouped search result presentation for documentation sites.
//!
//! A search engine hands back a flat, ranked list of pages. Nobody wants to
//! scan forty links in relevance order, so folio groups them by top-level
//! folder (`guide`, `api`, `tutorial`, ...) and shows the best few of each area
//! first, then the rest alphabetically. It also decides which clicks on a
//! result link are in-app navigation and which belong to the browser.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  types.rs   │────▶│  grouping/   │────▶│   view.rs    │
//! │(SearchResult│     │ (folder key, │     │ (ResultsState│
//! │ SearchArea) │     │  split, sort)│     │  last wins)  │
//! └─────────────┘     └──────────────┘     └──────────────┘
//!        │                   │
//!        ▼                   ▼
//! ┌─────────────┐     ┌──────────────────────────────────┐
//! │ selection/  │     │            verify/               │
//! │ (ClickGate, │     │ (VerifiedGrouping, contracts)    │
//! │  notifier)  │     └──────────────────────────────────┘
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use folio::{group_results, SearchResult, SearchResults};
//!
//! let input = SearchResults::new("router", vec![
//!     SearchResult::new("guide/router", "Routing"),
//!     SearchResult::new("api/router", "Router"),
//! ]);
//! let areas = group_results(&input);
//! assert_eq!(areas[0].name, "api");
//! assert_eq!(areas[1].name, "guide");
//! ```

pub mod config;
pub mod grouping;
pub mod logging;
pub mod selection;
pub mod testing;
mod types;
pub mod verify;
pub mod view;

#[cfg(feature = "wasm")]
mod wasm;

// Re-exports for public API
pub use config::{ConfigError, ConfigFile, GroupingOptions, DEFAULT_AREA, PRIORITY_COUNT};
pub use grouping::folder::{FolderIndex, FolderKey};
pub use grouping::ordering::compare_titles;
pub use grouping::{group_results, ResultGrouper};
pub use selection::{
    should_select, PointerActivation, ResultLink, SelectionNotifier, SubscriptionId,
};
pub use types::{AreaHeading, SearchArea, SearchResult, SearchResults};
pub use verify::{verify_grouping, InvariantError, VerifiedGrouping};
pub use view::{ResultsState, ResultsView, NOT_FOUND_MESSAGE};
