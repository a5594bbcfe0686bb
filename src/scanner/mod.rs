//! The scan pass: discovery, detection, reporting.

use std::path::Path;
use tracing::{debug, info, trace, warn};

use crate::config::{ReadErrorPolicy, ScanConfig};
use crate::detector::DeprecationDetector;
use crate::discovery::{check_root, find_files, FilePattern};
use crate::error::{IoError, Result};
use crate::output::{BuilderMatch, ScanReport};
use crate::source::SourceFile;
use crate::transform::{NoopTransformer, TransformTarget, Transformer};

/// Runs a single sequential pass over the configured roots.
///
/// Match indices are global for the run: they keep counting across roots.
pub struct Scanner<T = NoopTransformer> {
    config: ScanConfig,
    pattern: FilePattern,
    detector: DeprecationDetector,
    target: TransformTarget,
    transformer: T,
}

impl Scanner<NoopTransformer> {
    pub fn new(config: ScanConfig) -> Result<Self> {
        config.validate()?;
        let pattern = FilePattern::new(&config.pattern)?;

        Ok(Self {
            pattern,
            detector: DeprecationDetector::from_config(&config),
            target: TransformTarget::from_config(&config),
            transformer: NoopTransformer,
            config,
        })
    }
}

impl<T: Transformer> Scanner<T> {
    pub fn with_transformer<U: Transformer>(self, transformer: U) -> Scanner<U> {
        Scanner {
            config: self.config,
            pattern: self.pattern,
            detector: self.detector,
            target: self.target,
            transformer,
        }
    }

    pub fn transformer(&self) -> &T {
        &self.transformer
    }

    /// Scan every root in order.
    ///
    /// All roots are checked before any file is read, so a missing root
    /// fails the run without producing matches.
    pub fn run(&mut self) -> Result<ScanReport> {
        for root in &self.config.source_roots {
            check_root(root)?;
        }

        let roots = self.config.source_roots.clone();
        let mut report = ScanReport {
            roots: roots.clone(),
            ..Default::default()
        };

        for root in &roots {
            self.scan_root(root, &mut report)?;
        }

        info!(
            roots = report.roots.len(),
            files_scanned = report.files_scanned,
            files_skipped = report.files_skipped,
            matches = report.total_matches(),
            "scan complete"
        );

        Ok(report)
    }

    fn scan_root(&mut self, root: &Path, report: &mut ScanReport) -> Result<()> {
        debug!(root = %root.display(), "scanning root");

        let skip_unreadable = self.config.on_read_error == ReadErrorPolicy::Skip;
        let discovered = find_files(root, &self.pattern, self.config.on_read_error)?;
        report.files_skipped += discovered.skipped;

        for path in discovered.files {
            let source = match SourceFile::load(&path) {
                Ok(source) => source,
                Err(IoError::ReadError { path, source }) if skip_unreadable => {
                    warn!(path = %path.display(), error = %source, "skipping unreadable file");
                    report.files_skipped += 1;
                    continue;
                }
                Err(err) => return Err(err.into()),
            };
            report.files_scanned += 1;

            if !self.detector.is_deprecated(&source) {
                trace!(path = %path.display(), "no deprecated marker");
                continue;
            }

            let found = BuilderMatch {
                index: report.matches.len(),
                package: source.package_name().map(str::to_owned),
                marker_lines: self.detector.marker_lines(&source),
                path,
            };
            debug!(
                index = found.index,
                path = %found.path.display(),
                transformer = self.transformer.name(),
                "deprecated builder"
            );

            self.transformer.transform(&source, &found, &self.target)?;
            report.matches.push(found);
        }

        Ok(())
    }
}
