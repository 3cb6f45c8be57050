//! Report generation modules for different output formats
//!
//! This module contains report generators for various output formats:
//! - human: Human-readable console output
//! - json: JSON format for programmatic use
//! - junit: JUnit XML format for CI/CD integration
//! - github: GitHub Actions workflow commands

pub mod github;
pub mod human;
pub mod json;
pub mod junit;

use crate::analyzer::GraphCheck;
use crate::detector::Cycle;
use crate::error::LearningGraphError;
use crate::graph::LearningGraph;

/// Common trait for all report generators
pub trait ReportGenerator {
    /// Generate a report from the checked learning graphs
    fn generate_report(&self, checks: &[GraphCheck]) -> Result<String, LearningGraphError>;
}

/// Labels of a cycle's members, in cycle order
pub(crate) fn cycle_labels(graph: &LearningGraph, cycle: &Cycle) -> Vec<String> {
    cycle
        .nodes()
        .iter()
        .map(|id| graph.display_label(id))
        .collect()
}

// Re-export for convenience
pub use github::GitHubReportGenerator;
pub use human::HumanReportGenerator;
pub use json::JsonReportGenerator;
pub use junit::JunitReportGenerator;
