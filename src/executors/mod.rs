//! Command executors that handle the actual logic for each command

pub mod check;
pub mod render;
pub mod spotlight;

use std::path::PathBuf;

use console::style;
use miette::{Result, WrapErr};

use crate::analyzer::{GraphAnalyzer, GraphCheck, GraphStatus};
use crate::cli::OutputFormat;
use crate::discovery::GraphDiscovery;
use crate::error::LearningGraphError;
use crate::progress::ProgressReporter;
use crate::reports::{
    GitHubReportGenerator, HumanReportGenerator, JsonReportGenerator, JunitReportGenerator,
    ReportGenerator,
};

/// Trait for command executors
pub trait CommandExecutor {
    type Config;

    /// Execute the command with the given configuration
    fn execute(config: Self::Config) -> Result<()>;
}

/// Discover, load and check every learning graph under `paths`
fn analyze_paths(
    paths: &[PathBuf],
    pattern: &str,
    mut progress: Option<&mut ProgressReporter>,
) -> Result<GraphAnalyzer> {
    let discovery = GraphDiscovery::new(pattern)?;

    if let Some(p) = progress.as_deref_mut() {
        p.start_discovery();
    }
    let files = discovery
        .discover(paths, progress.as_deref())
        .wrap_err("Failed to discover learning graphs")?;
    if let Some(p) = progress.as_deref_mut() {
        p.finish_discovery(files.len());
    }

    let mut analyzer = GraphAnalyzer::new();
    analyzer.analyze(&files, progress.as_deref_mut())?;

    if let Some(p) = progress.as_deref() {
        p.start_cycle_detection();
        p.finish_cycle_detection(analyzer.total_cycles());
    }

    Ok(analyzer)
}

/// Render the report for `checks` in the requested format
fn generate_report(
    format: OutputFormat,
    max_cycles: Option<usize>,
    checks: &[GraphCheck],
) -> Result<String, LearningGraphError> {
    match format {
        OutputFormat::Human => HumanReportGenerator::new(max_cycles).generate_report(checks),
        OutputFormat::Json => JsonReportGenerator::new().generate_report(checks),
        OutputFormat::Junit => JunitReportGenerator::new().generate_report(checks),
        OutputFormat::GitHub => GitHubReportGenerator::new().generate_report(checks),
    }
}

/// Machine-readable reports keep stdout clean, so empty graphs are flagged on
/// stderr instead
fn warn_empty_graphs(format: OutputFormat, checks: &[GraphCheck]) {
    if format == OutputFormat::Human {
        return;
    }
    for check in checks.iter().filter(|c| c.status() == GraphStatus::Empty) {
        eprintln!(
            "{} Warning: No nodes found in the graph '{}'",
            style("⚠").yellow().bold(),
            check.source().display()
        );
    }
}
