//! # Graph Analysis Module
//!
//! Loads learning graph documents and runs cycle detection on each of them.
//! Graphs are independent, so they are loaded and checked in parallel; each
//! check owns its own detector.
//!
//! ## Key Components
//!
//! - **GraphAnalyzer**: loads a list of files and collects their checks
//! - **GraphCheck**: one graph, its detected cycles and its tangles
//! - **GraphStatus**: empty, clean or cyclic
//!
//! ## Example
//!
//! ```
//! use learning_graph_check::analyzer::{GraphCheck, GraphStatus};
//! use learning_graph_check::graph::LearningGraph;
//!
//! let graph = LearningGraph::builder()
//!     .with_node("sets", "Sets")
//!     .with_node("functions", "Functions")
//!     .with_edge("functions", "sets")
//!     .build();
//!
//! let check = GraphCheck::run("learning-graph.json", graph);
//! assert_eq!(check.status(), GraphStatus::Clean);
//! ```

mod analyzer_impl;

pub use analyzer_impl::*;
