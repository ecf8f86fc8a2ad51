// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Grouping options and the optional `folio.toml` config file.
//!
//! Everything has a default, so a missing file or an empty table behaves
//! exactly like the browser component: five priority pages per area and a
//! catch-all area named `other`. CLI flags override whatever the file says.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// How many results per area are shown in relevance order.
pub const PRIORITY_COUNT: usize = 5;

/// Area that collects slash-free pages with no children.
pub const DEFAULT_AREA: &str = "other";

/// Errors that can occur while loading or validating configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read the config file.
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError { path: PathBuf, reason: String },

    /// Config file contains invalid TOML or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError { path: PathBuf, reason: String },

    /// A value parsed but cannot be used.
    #[error("Invalid value for `{field}`: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

/// Options for a grouping pass.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GroupingOptions {
    /// Maximum priority pages per area (default: 5)
    pub priority_count: usize,
    /// Name of the catch-all area (default: "other")
    pub default_area: String,
}

impl Default for GroupingOptions {
    fn default() -> Self {
        Self {
            priority_count: PRIORITY_COUNT,
            default_area: DEFAULT_AREA.to_string(),
        }
    }
}

impl GroupingOptions {
    /// Reject options that would break the area invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.priority_count == 0 {
            return Err(ConfigError::InvalidValue {
                field: "priority_count",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.default_area.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "default_area",
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

/// Terminal theme override for CLI output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    Dark,
    Light,
}

/// TOML configuration file structure.
///
/// ```toml
/// priority_count = 5
/// default_area = "other"
/// theme = "dark"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub priority_count: Option<usize>,
    #[serde(default)]
    pub default_area: Option<String>,
    #[serde(default)]
    pub theme: Option<ThemeChoice>,
}

impl ConfigFile {
    /// Parse config from TOML text. `path` is only used for error messages.
    pub fn parse(text: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Load and parse a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let config = Self::parse(&text, path)?;
        tracing::debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }

    /// Resolve grouping options: CLI overrides, then file values, then defaults.
    pub fn resolve(
        &self,
        priority_count: Option<usize>,
        default_area: Option<String>,
    ) -> Result<GroupingOptions, ConfigError> {
        let defaults = GroupingOptions::default();
        let options = GroupingOptions {
            priority_count: priority_count
                .or(self.priority_count)
                .unwrap_or(defaults.priority_count),
            default_area: default_area
                .or_else(|| self.default_area.clone())
                .unwrap_or(defaults.default_area),
        };
        options.validate()?;
        Ok(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_browser_component() {
        let options = GroupingOptions::default();
        assert_eq!(options.priority_count, 5);
        assert_eq!(options.default_area, "other");
        assert!(options.validate().is_ok());
    }

    #[test]
    fn cli_overrides_file_values() {
        let file = ConfigFile {
            priority_count: Some(3),
            default_area: Some("misc".to_string()),
            theme: None,
        };
        let options = file.resolve(Some(7), None).unwrap();
        assert_eq!(options.priority_count, 7);
        assert_eq!(options.default_area, "misc");
    }

    #[test]
    fn zero_priority_count_is_rejected() {
        let err = ConfigFile::default().resolve(Some(0), None).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                field: "priority_count",
                ..
            }
        ));
    }

    #[test]
    fn empty_default_area_is_rejected() {
        let err = ConfigFile::default()
            .resolve(None, Some(String::new()))
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                field: "default_area",
                ..
            }
        ));
    }

    #[test]
    fn loads_toml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "priority_count = 2\ntheme = \"light\"").unwrap();

        let config = ConfigFile::load(file.path()).unwrap();
        assert_eq!(config.priority_count, Some(2));
        assert_eq!(config.theme, Some(ThemeChoice::Light));
        assert_eq!(config.default_area, None);
    }

    #[test]
    fn unknown_keys_are_parse_errors() {
        let err = ConfigFile::parse("colour = \"blue\"", Path::new("folio.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }

    #[test]
    fn missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ConfigFile::load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::ReadError { .. }));
    }
}
