// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the folio command-line interface.
//!
//! Three subcommands: `group` to print a grouped view of a results file,
//! `verify` to check grouping invariants against it, and `click` to ask the
//! click gate about a pointer activation. Results files are the JSON the
//! search worker posts: `{ "query": ..., "results": [...] }`. Pass `-` to
//! read from stdin.

pub mod display;

use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "folio",
    about = "Group documentation search results into areas",
    version
)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to a folio.toml config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Overrides for grouping options.
#[derive(Args, Debug, Default)]
pub struct GroupingArgs {
    /// Results shown per area in relevance order (default: 5)
    #[arg(long)]
    pub priority_count: Option<usize>,

    /// Area for top-level pages without children (default: "other")
    #[arg(long)]
    pub default_area: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Group a search results file and print the areas
    Group {
        /// Path to results JSON, or `-` for stdin
        file: String,

        /// Print the view state as JSON instead of a table
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        grouping: GroupingArgs,
    },

    /// Group a search results file and check every area invariant
    Verify {
        /// Path to results JSON, or `-` for stdin
        file: String,

        #[command(flatten)]
        grouping: GroupingArgs,
    },

    /// Decide whether a click on a result link selects it
    Click {
        /// `MouseEvent.button` (0 = primary, 1 = middle, 2 = secondary)
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        button: i16,

        /// Ctrl key held
        #[arg(long)]
        ctrl: bool,

        /// Meta (cmd) key held
        #[arg(long)]
        meta: bool,
    },
}
