//! Environment-driven settings for the inspection tooling.
//!
//! The library queries need no configuration; these settings only decide which
//! field table the CLI reads, which classes it prints, and how chatty logging
//! is. Command-line flags override every value read here.

use std::env;
use std::path::PathBuf;

/// Path to a JSON field table to use instead of the built-in model.
pub const FIELD_TABLE_ENV: &str = "PBPRDF_FIELD_TABLE";
/// Comma- or whitespace-separated class names to restrict output to.
pub const CLASS_FILTER_ENV: &str = "PBPRDF_CLASSES";
/// `tracing` filter directive for the CLI.
pub const LOG_FILTER_ENV: &str = "PBPRDF_LOG";

const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InspectConfig {
    pub field_table: Option<PathBuf>,
    pub classes: Vec<String>,
    pub log_filter: String,
}

impl InspectConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup; blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        Self {
            field_table: non_blank(FIELD_TABLE_ENV).map(PathBuf::from),
            classes: non_blank(CLASS_FILTER_ENV)
                .map(|value| split_list(&value))
                .unwrap_or_default(),
            log_filter: non_blank(LOG_FILTER_ENV)
                .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        }
    }
}

impl Default for InspectConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

/// Split comma- or whitespace-delimited configuration lists into tokens.
pub fn split_list(value: &str) -> Vec<String> {
    value
        .replace(',', " ")
        .split_whitespace()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
