// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The verification layer: checked groupings and runtime contracts.
//!
//! Two complementary approaches to catching bugs:
//!
//! 1. **Checked wrapper** (`VerifiedGrouping`) that only exists for a grouping
//!    that satisfies every area invariant against its input. Used by the CLI
//!    `verify` command, property tests, and the fuzz target.
//!
//! 2. **Runtime contracts** that panic in debug builds when a grouping pass
//!    produces something malformed. Zero-cost in release.

mod types;
pub mod contracts;

pub use types::*;
