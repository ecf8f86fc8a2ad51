// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Folder classification: which area does a path belong to?
//!
//! Paths with a separator belong to their first segment (`guide/router/params`
//! lands in `guide`). Slash-free paths are trickier. `tutorial` on its own is
//! just a stray page and goes to the default area, but `tutorial` next to
//! `tutorial/toh-pt1` is the index page of that folder and joins it.
//!
//! Deciding that needs the whole result set, so classification is two-phase:
//! build a `FolderIndex` of every folder that has children, then classify.
//!
//! # Malformed paths
//!
//! Trailing separators are stripped before classification (`guide/` is treated
//! as `guide`). A path that is empty, or whose first segment is empty
//! (`/guide`), never names a folder and goes to the default area.

use crate::types::SearchResult;
use std::collections::HashSet;

/// Path segment separator.
pub const SEPARATOR: char = '/';

/// Where a result should be bucketed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FolderKey<'a> {
    /// A real top-level folder.
    Folder(&'a str),
    /// The synthetic catch-all area.
    Default,
}

/// Strip trailing separators.
#[inline]
pub fn normalize_path(path: &str) -> &str {
    path.trim_end_matches(SEPARATOR)
}

/// First segment of a path that has children, e.g. `guide` for `guide/a/c`.
///
/// Returns `None` for slash-free paths and for paths with an empty first segment.
pub fn parent_folder(path: &str) -> Option<&str> {
    normalize_path(path)
        .split_once(SEPARATOR)
        .map(|(folder, _)| folder)
        .filter(|folder| !folder.is_empty())
}

/// Set of top-level folders that contain at least one result.
#[derive(Debug, Default)]
pub struct FolderIndex<'a> {
    parents: HashSet<&'a str>,
}

impl<'a> FolderIndex<'a> {
    /// Collect the parent folders of `results`.
    ///
    /// Pass only results that survived filtering: an untitled child must not
    /// promote its slash-free sibling into a folder index page.
    pub fn from_results<I>(results: I) -> Self
    where
        I: IntoIterator<Item = &'a SearchResult>,
    {
        let parents = results
            .into_iter()
            .filter_map(|result| parent_folder(&result.path))
            .collect();
        Self { parents }
    }

    /// Whether some result lives under `folder/`.
    #[inline]
    pub fn has_children(&self, folder: &str) -> bool {
        self.parents.contains(folder)
    }

    /// Classify a path into its folder key. The key borrows from `path`.
    pub fn classify<'p>(&self, path: &'p str) -> FolderKey<'p> {
        let path = normalize_path(path);
        match path.split_once(SEPARATOR) {
            Some((folder, _)) if !folder.is_empty() => FolderKey::Folder(folder),
            Some(_) => FolderKey::Default,
            None if !path.is_empty() && self.has_children(path) => FolderKey::Folder(path),
            None => FolderKey::Default,
        }
    }
}
