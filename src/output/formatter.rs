use anyhow::Result;

use crate::cli::OutputFormat;

use super::ScanReport;

pub struct OutputFormatter;

impl OutputFormatter {
    pub fn format(report: &ScanReport, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(Self::format_text(report)),
            OutputFormat::Json => {
                let mut json = serde_json::to_string_pretty(report)?;
                json.push('\n');
                Ok(json)
            }
        }
    }

    /// One `<index> <path>` line per match.
    pub fn format_text(report: &ScanReport) -> String {
        report
            .matches
            .iter()
            .map(|found| format!("{} {}\n", found.index, found.path.display()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::BuilderMatch;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    fn report() -> ScanReport {
        ScanReport {
            roots: vec![PathBuf::from("/gen/device"), PathBuf::from("/gen/common")],
            files_scanned: 3,
            files_skipped: 0,
            matches: vec![
                BuilderMatch {
                    index: 0,
                    path: PathBuf::from("/gen/device/org/BarBuilder.java"),
                    package: Some("org".to_string()),
                    marker_lines: vec![12, 40],
                },
                BuilderMatch {
                    index: 1,
                    path: PathBuf::from("/gen/common/BazBuilder.java"),
                    package: None,
                    marker_lines: vec![3],
                },
            ],
        }
    }

    #[test]
    fn test_text_format() {
        let text = OutputFormatter::format(&report(), OutputFormat::Text).unwrap();
        assert_eq!(
            text,
            "0 /gen/device/org/BarBuilder.java\n1 /gen/common/BazBuilder.java\n"
        );
    }

    #[test]
    fn test_text_format_empty() {
        let text = OutputFormatter::format(&ScanReport::default(), OutputFormat::Text).unwrap();
        assert_eq!(text, "");
    }

    #[test]
    fn test_json_format() {
        let json = OutputFormatter::format(&report(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["files_scanned"], 3);
        assert!(value.get("files_skipped").is_none());
        assert_eq!(value["matches"][0]["index"], 0);
        assert_eq!(value["matches"][0]["package"], "org");
        assert_eq!(value["matches"][0]["marker_lines"], serde_json::json!([12, 40]));
        assert!(value["matches"][1].get("package").is_none());
        assert_eq!(
            value["matches"][1]["path"],
            "/gen/common/BazBuilder.java"
        );
    }
}
