//! # learning-graph-check - Detect Prerequisite Cycles in Learning Graphs
//!
//! A learning graph lists the topics of a course as nodes and their
//! prerequisites as directed edges. A circular prerequisite chain means there
//! is no order in which the topics can be taught, so every such chain is
//! reported.
//!
//! ## Main Components
//!
//! - **Loader**: reads vis-network style JSON documents into a
//!   [`LearningGraph`](graph::LearningGraph)
//! - **Detector**: depth-first search with three-coloring; one cycle per
//!   back-edge
//! - **Analyzer**: checks many graph files in parallel
//! - **Reports**: human, JSON, JUnit and GitHub Actions output
//! - **Graph**: graph types, tangles (strongly connected groups) and
//!   renderers
//!
//! ## Usage
//!
//! ### Detecting cycles in a document
//!
//! ```
//! use learning_graph_check::detector::detect_cycles;
//! use learning_graph_check::graph::NodeId;
//! use learning_graph_check::loader::parse_graph;
//!
//! # fn main() -> miette::Result<()> {
//! let graph = parse_graph(
//!     "learning-graph.json",
//!     r#"{
//!         "nodes": [
//!             {"id": 1, "label": "Variables"},
//!             {"id": 2, "label": "Loops"},
//!             {"id": 3, "label": "Functions"}
//!         ],
//!         "edges": [
//!             {"from": 1, "to": 2},
//!             {"from": 2, "to": 3},
//!             {"from": 3, "to": 1},
//!             {"from": 3, "to": 42}
//!         ]
//!     }"#,
//! )?;
//!
//! let cycles = detect_cycles(&graph);
//! assert_eq!(cycles.len(), 1);
//! assert_eq!(
//!     cycles[0].nodes(),
//!     &[NodeId::from(1), NodeId::from(2), NodeId::from(3)]
//! );
//! # Ok(())
//! # }
//! ```
//!
//! ### Checking a directory of course material
//!
//! ```no_run
//! use std::path::PathBuf;
//!
//! use learning_graph_check::analyzer::GraphAnalyzer;
//! use learning_graph_check::discovery::GraphDiscovery;
//! use learning_graph_check::reports::{HumanReportGenerator, ReportGenerator};
//!
//! # fn main() -> miette::Result<()> {
//! let discovery = GraphDiscovery::new("learning-graph.json")?;
//! let files = discovery.discover(&[PathBuf::from("docs")], None)?;
//!
//! let mut analyzer = GraphAnalyzer::new();
//! analyzer.analyze(&files, None)?;
//!
//! let report = HumanReportGenerator::new(Some(5)).generate_report(analyzer.checks())?;
//! println!("{report}");
//! # Ok(())
//! # }
//! ```
//!
//! ### Rendering a graph
//!
//! ```
//! use learning_graph_check::detector::detect_cycles;
//! use learning_graph_check::graph::{GraphRenderer, LearningGraph};
//!
//! # fn main() -> miette::Result<()> {
//! let graph = LearningGraph::builder()
//!     .with_node("sets", "Sets")
//!     .with_node("relations", "Relations")
//!     .with_edge("sets", "relations")
//!     .with_edge("relations", "sets")
//!     .build();
//!
//! let mut mermaid = Vec::new();
//! GraphRenderer::new(true, false).render_mermaid(&graph, &detect_cycles(&graph), &mut mermaid)?;
//! assert!(String::from_utf8_lossy(&mermaid).starts_with("graph TD"));
//! # Ok(())
//! # }
//! ```

// Private modules
mod constants;
mod progress;
mod utils;

// Public modules
pub mod analyzer;
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod detector;
pub mod discovery;
pub mod error;
pub mod executors;
pub mod graph;
pub mod loader;
pub mod reports;

// Main entry point for the library
pub fn run() -> miette::Result<()> {
    use clap::Parser;

    use crate::cli::Cli;
    use crate::commands::execute_command;

    let cli = Cli::parse();
    execute_command(cli.command)
}
