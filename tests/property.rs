//! Property-based tests using proptest.
//!
//! These tests verify that grouping invariants hold for randomly generated
//! result lists.

mod common;

#[path = "property/invariants.rs"]
mod invariants;
