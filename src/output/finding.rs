use serde::Serialize;
use std::path::PathBuf;

/// A builder source that carries the deprecated marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuilderMatch {
    /// Zero-based position among all matches of the run.
    pub index: usize,
    pub path: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,
    pub marker_lines: Vec<usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanReport {
    pub roots: Vec<PathBuf>,
    pub files_scanned: usize,
    #[serde(skip_serializing_if = "is_zero")]
    pub files_skipped: usize,
    pub matches: Vec<BuilderMatch>,
}

impl ScanReport {
    pub fn total_matches(&self) -> usize {
        self.matches.len()
    }
}

fn is_zero(n: &usize) -> bool {
    *n == 0
}
