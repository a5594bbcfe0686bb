//! Hook for acting on matched builders.
//!
//! Every match found by the scanner is handed to a [`Transformer`] together
//! with the destination settings from the config. Rewriting sources into a
//! new namespace is not implemented; the default transformer only logs.

use std::path::PathBuf;
use tracing::debug;

use crate::config::ScanConfig;
use crate::error::Result;
use crate::output::BuilderMatch;
use crate::source::SourceFile;

/// Where transformed builders would be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformTarget {
    pub destination_base: PathBuf,
    pub builder_namespace: String,
}

impl TransformTarget {
    pub fn from_config(config: &ScanConfig) -> Self {
        Self {
            destination_base: config.destination_base.clone(),
            builder_namespace: config.builder_namespace.clone(),
        }
    }
}

pub trait Transformer {
    fn name(&self) -> &str;

    fn transform(
        &mut self,
        source: &SourceFile,
        found: &BuilderMatch,
        target: &TransformTarget,
    ) -> Result<()>;
}

/// Leaves the filesystem untouched.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTransformer;

impl Transformer for NoopTransformer {
    fn name(&self) -> &str {
        "noop"
    }

    fn transform(
        &mut self,
        source: &SourceFile,
        found: &BuilderMatch,
        target: &TransformTarget,
    ) -> Result<()> {
        debug!(
            path = %source.path().display(),
            index = found.index,
            destination = %target.destination_base.display(),
            namespace = %target.builder_namespace,
            "transform skipped"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_from_config() {
        let config = ScanConfig {
            destination_base: PathBuf::from("/out/builders"),
            builder_namespace: "org.openroadm".to_string(),
            ..ScanConfig::with_roots(["/src"])
        };

        let target = TransformTarget::from_config(&config);
        assert_eq!(target.destination_base, PathBuf::from("/out/builders"));
        assert_eq!(target.builder_namespace, "org.openroadm");
    }

    #[test]
    fn test_noop_transformer_succeeds() {
        let source = SourceFile::from_content("/src/ABuilder.java", "@Deprecated\n");
        let found = BuilderMatch {
            index: 0,
            path: source.path().to_path_buf(),
            package: None,
            marker_lines: vec![1],
        };
        let target = TransformTarget {
            destination_base: PathBuf::from("."),
            builder_namespace: String::new(),
        };

        let mut transformer = NoopTransformer;
        assert_eq!(transformer.name(), "noop");
        assert!(transformer.transform(&source, &found, &target).is_ok());
    }
}
