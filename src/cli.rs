use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::{MarkerMatch, ReadErrorPolicy, ScanConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "builder-audit", version)]
#[command(about = "Find generated *Builder sources that still contain deprecated methods", long_about = None)]
pub struct Args {
    /// Source roots to scan recursively (added after roots from --config)
    #[arg(value_name = "ROOT")]
    pub roots: Vec<PathBuf>,

    /// Configuration file (YAML or JSON)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Filename pattern, anchored at the start of the name
    #[arg(short, long, value_name = "REGEX")]
    pub pattern: Option<String>,

    /// Deprecated marker to search for
    #[arg(short, long, value_name = "TEXT")]
    pub marker: Option<String>,

    /// Destination base for transformed builders
    #[arg(long, value_name = "PATH")]
    pub destination: Option<PathBuf>,

    /// Namespace for transformed builders
    #[arg(long, value_name = "NAMESPACE")]
    pub namespace: Option<String>,

    /// Output format (text, json)
    #[arg(short = 'f', long, default_value = "text")]
    pub format: OutputFormat,

    /// Output file path (prints to stdout if not specified)
    #[arg(short = 'O', long, value_name = "FILE")]
    pub output_file: Option<PathBuf>,

    /// Treat every line not starting with the marker as a hit (old script behaviour)
    #[arg(long)]
    pub legacy_marker_check: bool,

    /// Warn about unreadable files and directories and continue instead of failing
    #[arg(long)]
    pub skip_unreadable: bool,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Merge the config file (if any) with command-line overrides.
    pub fn to_config(&self) -> Result<ScanConfig> {
        let mut config = match &self.config {
            Some(path) => ScanConfig::from_file(path)?,
            None => ScanConfig::default(),
        };

        config.source_roots.extend(self.roots.iter().cloned());

        if let Some(pattern) = &self.pattern {
            config.pattern = pattern.clone();
        }
        if let Some(marker) = &self.marker {
            config.marker = marker.clone();
        }
        if let Some(destination) = &self.destination {
            config.destination_base = destination.clone();
        }
        if let Some(namespace) = &self.namespace {
            config.builder_namespace = namespace.clone();
        }
        if self.legacy_marker_check {
            config.marker_match = MarkerMatch::Legacy;
        }
        if self.skip_unreadable {
            config.on_read_error = ReadErrorPolicy::Skip;
        }

        config.validate()?;
        Ok(config)
    }
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }
}
