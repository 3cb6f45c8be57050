//! # Cycle Detection Module
//!
//! This module finds prerequisite cycles in a learning graph.
//!
//! ## Algorithm
//!
//! A single depth-first pass with three-coloring. Every node starts
//! unvisited, turns in-progress while it is on the active path, and turns
//! done once all of its successors are explored. An edge into an in-progress
//! node is a back-edge, and the slice of the active path it closes is
//! reported as one cycle. The pass runs in O(V + E) time where V is the
//! number of topics and E the number of prerequisite edges.
//!
//! One cycle is reported per back-edge, so a topic sitting on several
//! cycles may show up in more than one report. This is not an enumeration of
//! all simple cycles.
//!
//! ## Key Components
//!
//! - **detect_cycles**: the traversal itself, a pure function of the graph
//! - **CycleDetector**: holds the cycles found in one graph for reporting
//! - **Cycle**: the ordered members of one detected cycle
//!
//! ## Example
//!
//! ```
//! use learning_graph_check::detector::{CycleDetector, detect_cycles};
//! use learning_graph_check::graph::{LearningGraph, NodeId};
//!
//! // Functions -> Recursion -> Call Stack -> Functions
//! let graph = LearningGraph::builder()
//!     .with_node(1, "Functions")
//!     .with_node(2, "Recursion")
//!     .with_node(3, "Call Stack")
//!     .with_edge(1, 2)
//!     .with_edge(2, 3)
//!     .with_edge(3, 1)
//!     .build();
//!
//! let cycles = detect_cycles(&graph);
//! assert_eq!(cycles.len(), 1);
//! assert_eq!(
//!     cycles[0].nodes(),
//!     &[NodeId::from(1), NodeId::from(2), NodeId::from(3)]
//! );
//!
//! let mut detector = CycleDetector::new();
//! detector.detect_cycles(&graph);
//! assert!(detector.has_cycles());
//! ```

mod detector_impl;

pub use detector_impl::*;
