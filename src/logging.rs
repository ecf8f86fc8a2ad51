// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Tracing subscriber initialization for the CLI.
//!
//! The library only emits events; installing a subscriber is the binary's
//! call. Logs go to stderr so `folio group --json` output stays pipeable.

use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Error type for logging initialization failures.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// `RUST_LOG` is set but cannot be parsed.
    #[error("Invalid RUST_LOG filter: {0}")]
    InvalidFilter(String),

    /// Tracing subscriber already initialized
    #[error("Tracing subscriber already initialized")]
    SubscriberAlreadySet,
}

/// Default filter directive for a `-v` count.
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}

/// Build the filter: `RUST_LOG` wins, otherwise the verbosity default.
pub fn env_filter(verbosity: u8) -> Result<EnvFilter, LoggingError> {
    match std::env::var("RUST_LOG") {
        Ok(spec) if !spec.is_empty() => {
            EnvFilter::try_new(&spec).map_err(|e| LoggingError::InvalidFilter(e.to_string()))
        }
        _ => Ok(EnvFilter::new(default_directive(verbosity))),
    }
}

/// Install a stderr fmt subscriber.
pub fn init(verbosity: u8) -> Result<(), LoggingError> {
    let filter = env_filter(verbosity)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|_| LoggingError::SubscriberAlreadySet)
}
