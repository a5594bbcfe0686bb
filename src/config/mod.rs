//! Scan configuration.
//!
//! A [`ScanConfig`] can be loaded from a YAML or JSON file and is then
//! overridden field by field from the command line.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::discovery::FilePattern;
use crate::error::ConfigError;

/// Filenames ending in `Builder.java`, anchored at the start of the name.
pub const DEFAULT_PATTERN: &str = r".*Builder\.java$";

pub const DEFAULT_MARKER: &str = "@Deprecated";

/// How a line is tested against the deprecated marker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerMatch {
    /// The line contains the marker anywhere.
    #[default]
    Contains,
    /// Reproduces the historical search that treated "not found" as a hit:
    /// any line that does not start with the marker counts as a match.
    Legacy,
}

/// What to do with a matching file that cannot be read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadErrorPolicy {
    #[default]
    Fail,
    Skip,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScanConfig {
    #[serde(alias = "sourceRoots")]
    pub source_roots: Vec<PathBuf>,

    /// Handed to the transformer; the scan itself never writes here.
    #[serde(alias = "destinationBase")]
    pub destination_base: PathBuf,

    /// Handed to the transformer; the scan itself never uses it.
    #[serde(alias = "builderNamespace")]
    pub builder_namespace: String,

    pub pattern: String,
    pub marker: String,

    #[serde(alias = "markerMatch")]
    pub marker_match: MarkerMatch,

    #[serde(alias = "onReadError")]
    pub on_read_error: ReadErrorPolicy,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            source_roots: Vec::new(),
            destination_base: PathBuf::from("."),
            builder_namespace: String::new(),
            pattern: DEFAULT_PATTERN.to_string(),
            marker: DEFAULT_MARKER.to_string(),
            marker_match: MarkerMatch::default(),
            on_read_error: ReadErrorPolicy::default(),
        }
    }
}

impl ScanConfig {
    pub fn with_roots(roots: impl IntoIterator<Item = impl Into<PathBuf>>) -> Self {
        Self {
            source_roots: roots.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// Load a config file, choosing the parser from its extension.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let format = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("")
            .to_ascii_lowercase();

        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::read_error(path, e.to_string()))?;

        let config = match format.as_str() {
            "yaml" | "yml" => serde_yaml::from_str(&content)
                .map_err(|e| ConfigError::parse_error(path, e.to_string()))?,
            "json" => serde_json::from_str(&content)
                .map_err(|e| ConfigError::parse_error(path, e.to_string()))?,
            other => return Err(ConfigError::unsupported_format(other)),
        };

        tracing::debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }

    /// Check everything that can be checked without touching the roots.
    ///
    /// Root existence is checked by the scan, which reports the
    /// first missing root in configured order.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.source_roots.is_empty() {
            return Err(ConfigError::NoSourceRoots);
        }
        if self.marker.is_empty() {
            return Err(ConfigError::EmptyMarker);
        }
        FilePattern::new(&self.pattern)?;
        Ok(())
    }
}
