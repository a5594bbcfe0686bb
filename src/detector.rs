use crate::config::{MarkerMatch, ScanConfig};
use crate::source::SourceFile;

/// Line-based search for a deprecation marker.
///
/// This is a plain substring search. It does not parse Java, so a marker
/// inside a comment or string literal counts as well.
#[derive(Debug, Clone)]
pub struct DeprecationDetector {
    marker: String,
    mode: MarkerMatch,
}

impl DeprecationDetector {
    pub fn new(marker: impl Into<String>, mode: MarkerMatch) -> Self {
        Self {
            marker: marker.into(),
            mode,
        }
    }

    pub fn from_config(config: &ScanConfig) -> Self {
        Self::new(config.marker.clone(), config.marker_match)
    }

    pub fn is_deprecated(&self, file: &SourceFile) -> bool {
        file.lines().iter().any(|line| self.line_matches(line))
    }

    /// 1-based numbers of the lines that matched.
    pub fn marker_lines(&self, file: &SourceFile) -> Vec<usize> {
        file.lines()
            .iter()
            .enumerate()
            .filter(|(_, line)| self.line_matches(line))
            .map(|(idx, _)| idx + 1)
            .collect()
    }

    fn line_matches(&self, line: &str) -> bool {
        match self.mode {
            MarkerMatch::Contains => line.contains(self.marker.as_str()),
            // A search result of "not found" was truthy and only a hit at
            // column 0 was falsy.
            MarkerMatch::Legacy => !line.starts_with(self.marker.as_str()),
        }
    }
}

impl Default for DeprecationDetector {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_MARKER, MarkerMatch::Contains)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const DEPRECATED_BUILDER: &str = r#"package org.example;

public class BarBuilder {
    @Deprecated
    public BarBuilder setKey(String key) {
        return this;
    }
}
"#;

    const CLEAN_BUILDER: &str = r#"package org.example;

public class FooBuilder {
    public FooBuilder setKey(String key) {
        return this;
    }
}
"#;

    fn file(content: &str) -> SourceFile {
        SourceFile::from_content("/src/XBuilder.java", content)
    }

    #[test]
    fn test_detects_annotation() {
        let detector = DeprecationDetector::default();
        assert!(detector.is_deprecated(&file(DEPRECATED_BUILDER)));
        assert_eq!(detector.marker_lines(&file(DEPRECATED_BUILDER)), vec![4]);
    }

    #[test]
    fn test_marker_absent_is_not_reported() {
        let detector = DeprecationDetector::default();
        assert!(!detector.is_deprecated(&file(CLEAN_BUILDER)));
        assert!(detector.marker_lines(&file(CLEAN_BUILDER)).is_empty());
    }

    #[test]
    fn test_empty_file() {
        assert!(!DeprecationDetector::default().is_deprecated(&file("")));
    }

    #[test]
    fn test_marker_in_comment_or_string_still_counts() {
        let detector = DeprecationDetector::default();
        assert!(detector.is_deprecated(&file("// see @Deprecated setters\n")));
        assert!(detector.is_deprecated(&file("String s = \"@Deprecated\";\n")));
    }

    #[test]
    fn test_case_sensitive() {
        let detector = DeprecationDetector::default();
        assert!(!detector.is_deprecated(&file("@deprecated\n")));
        assert!(!detector.is_deprecated(&file("/** @DEPRECATED */\n")));
    }

    #[test]
    fn test_marker_at_line_start() {
        let detector = DeprecationDetector::default();
        assert!(detector.is_deprecated(&file("@Deprecated\nvoid x() {}\n")));
    }

    #[test]
    fn test_custom_marker() {
        let detector = DeprecationDetector::new("@Deprecated(forRemoval", MarkerMatch::Contains);
        assert!(!detector.is_deprecated(&file(DEPRECATED_BUILDER)));
        assert!(detector.is_deprecated(&file("  @Deprecated(forRemoval = true)\n")));
    }

    // Legacy mode pins the historical behaviour: a file without the marker is
    // still reported, and only a file whose every line starts with the marker
    // is not.
    #[test]
    fn test_legacy_reports_file_without_marker() {
        let detector = DeprecationDetector::new("@Deprecated", MarkerMatch::Legacy);
        assert!(detector.is_deprecated(&file(CLEAN_BUILDER)));
    }

    #[test]
    fn test_legacy_only_column_zero_marker_is_a_miss() {
        let detector = DeprecationDetector::new("@Deprecated", MarkerMatch::Legacy);
        assert!(!detector.is_deprecated(&file("@Deprecated\n@Deprecated void x();\n")));
        assert!(!detector.is_deprecated(&file("")));
        assert!(detector.is_deprecated(&file("@Deprecated\n\n")));
    }
}
