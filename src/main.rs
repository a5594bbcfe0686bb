use anyhow::{Context as AnyhowContext, Result};
use clap::Parser;
use std::process::ExitCode;
use tracing::info;

use builder_audit::cli;
use builder_audit::logging::{self, Verbosity};
use builder_audit::output::OutputFormatter;
use builder_audit::Scanner;

fn main() -> ExitCode {
    let args = cli::Args::parse();
    logging::init(Verbosity::from_flags(args.verbose, args.quiet));

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // Root errors go to stdout, next to the match lines.
            if let Some(scan_err) = err.downcast_ref::<builder_audit::Error>() {
                if scan_err.is_root_error() {
                    println!("{scan_err}");
                    return ExitCode::FAILURE;
                }
            }
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &cli::Args) -> Result<()> {
    let config = args.to_config().context("Invalid configuration")?;
    let mut scanner = Scanner::new(config)?;
    let report = scanner.run()?;

    let rendered = OutputFormatter::format(&report, args.format)?;
    match &args.output_file {
        Some(path) => {
            std::fs::write(path, &rendered)
                .with_context(|| format!("Failed to write report: {}", path.display()))?;
            info!(path = %path.display(), format = args.format.as_str(), "report written");
        }
        None => print!("{rendered}"),
    }

    Ok(())
}
