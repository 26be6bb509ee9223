//! Presentation shell for the style engine
//!
//! Parses arguments, runs one check and renders the report as text or JSON.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use shared_types::Report;
use style_engine::StyleChecker;
use tracing::{info, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(name = "style-checker")]
#[command(
    version,
    about = "Check an OpenDocument text file against the house style"
)]
pub struct Args {
    /// Path to the .odt document
    pub input: PathBuf,

    /// Also write the rendered report to this file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Report format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Install the stderr subscriber; `RUST_LOG` refines the default level
pub fn init_tracing(verbose: bool) {
    let log_level = if verbose { Level::DEBUG } else { Level::INFO };

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

pub fn render(report: &Report, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(report.to_text()),
        OutputFormat::Json => report.to_json().context("Failed to serialize report"),
    }
}

/// Run one check and print the report. Returns whether the document conforms.
pub fn run(args: &Args) -> anyhow::Result<bool> {
    let report = StyleChecker::new()
        .report(&args.input)
        .with_context(|| format!("Failed to check {}", args.input.display()))?;

    let rendered = render(&report, args.format)?;
    println!("{rendered}");

    if let Some(output) = &args.output {
        fs::write(output, &rendered)
            .with_context(|| format!("Failed to write report to {}", output.display()))?;
        info!("Report written to {}", output.display());
    }

    Ok(report.is_correct())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::{ErrorKind, Violation, ALL_CORRECT};

    #[test]
    fn test_args_defaults() {
        let args = Args::try_parse_from(["style-checker", "thesis.odt"]).unwrap();
        assert_eq!(args.input, PathBuf::from("thesis.odt"));
        assert_eq!(args.format, OutputFormat::Text);
        assert_eq!(args.output, None);
        assert!(!args.verbose);
    }

    #[test]
    fn test_args_all_options() {
        let args = Args::try_parse_from([
            "style-checker",
            "thesis.odt",
            "--output",
            "report.txt",
            "--format",
            "json",
            "-v",
        ])
        .unwrap();
        assert_eq!(args.output, Some(PathBuf::from("report.txt")));
        assert_eq!(args.format, OutputFormat::Json);
        assert!(args.verbose);
    }

    #[test]
    fn test_args_require_input() {
        assert!(Args::try_parse_from(["style-checker"]).is_err());
    }

    #[test]
    fn test_args_reject_unknown_format() {
        assert!(Args::try_parse_from(["style-checker", "a.odt", "-f", "xml"]).is_err());
    }

    #[test]
    fn test_render_text_and_json() {
        let report = Report::new("a.odt", vec![Violation::document(vec![ErrorKind::MissingToc])]);

        let text = render(&report, OutputFormat::Text).unwrap();
        assert!(text.contains("Исправить оформление на:"));
        assert!(!text.contains(ALL_CORRECT));

        let json = render(&report, OutputFormat::Json).unwrap();
        assert!(json.contains("\"missing_toc\""));
    }

    #[test]
    fn test_run_reports_missing_file() {
        let args = Args::try_parse_from(["style-checker", "/nonexistent/thesis.odt"]).unwrap();
        let error = run(&args).unwrap_err();
        assert!(error.to_string().contains("Failed to check"));
    }
}
