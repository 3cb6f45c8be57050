//! # Learning Graph Module
//!
//! This module holds the in-memory learning graph and its renderers.
//!
//! ## Components
//!
//! ### Graph Model
//! - **LearningGraph**: topics in declaration order plus prerequisite edges
//! - **Node**: a topic with an id and a display label
//! - **Edge**: a prerequisite relation, `from` depends on `to`
//! - **NodeId**: numeric or string topic identifier
//!
//! ### Graph Rendering
//! - **GraphRenderer**: renders graphs as ASCII, Mermaid or Graphviz DOT
//! - Highlights the topics and edges that sit on detected cycles
//!
//! ## Example
//!
//! ```
//! use learning_graph_check::detector::detect_cycles;
//! use learning_graph_check::graph::{GraphRenderer, LearningGraph};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let graph = LearningGraph::builder()
//!     .with_node("vars", "Variables")
//!     .with_node("loops", "Loops")
//!     .with_edge("loops", "vars")
//!     .build();
//!
//! let cycles = detect_cycles(&graph);
//!
//! let renderer = GraphRenderer::new(true, false);
//! let mut output = Vec::new();
//! renderer.render_dot(&graph, &cycles, &mut output)?;
//!
//! let dot_output = String::from_utf8(output)?;
//! assert!(dot_output.contains("digraph"));
//! assert!(dot_output.contains("Variables"));
//! # Ok(())
//! # }
//! ```

mod renderer;
mod tangles;
mod types;

pub use renderer::GraphRenderer;
pub use types::{Edge, LearningGraph, LearningGraphBuilder, Node, NodeId, Successor};
