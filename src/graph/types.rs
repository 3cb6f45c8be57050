//! Core graph types
//!
//! This module contains the fundamental data structures of a learning graph:
//! topic nodes, prerequisite edges, and the graph value that owns both along
//! with its derived adjacency.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Identifier of a topic node.
///
/// vis-network documents use either numbers or strings as ids. Numbers keep
/// their JSON form, so `1`, `1.0` and `"1"` are three distinct topics.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodeId {
    Number(Number),
    Text(String),
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeId::Number(n) => write!(f, "{n}"),
            NodeId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for NodeId {
    fn from(value: i64) -> Self {
        NodeId::Number(value.into())
    }
}

impl From<i32> for NodeId {
    fn from(value: i32) -> Self {
        NodeId::Number(value.into())
    }
}

impl From<Number> for NodeId {
    fn from(value: Number) -> Self {
        NodeId::Number(value)
    }
}

impl From<&str> for NodeId {
    fn from(value: &str) -> Self {
        NodeId::Text(value.to_string())
    }
}

impl From<String> for NodeId {
    fn from(value: String) -> Self {
        NodeId::Text(value)
    }
}

/// A topic in the learning graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    id: NodeId,
    label: String,
}

impl Node {
    /// Create a node; the label defaults to the stringified id
    pub fn new(id: impl Into<NodeId>, label: Option<String>) -> Self {
        let id = id.into();
        let label = label.unwrap_or_else(|| id.to_string());
        Self { id, label }
    }

    pub fn id(&self) -> &NodeId {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

/// A prerequisite edge: `from` depends on `to`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    from: NodeId,
    to: NodeId,
}

impl Edge {
    pub fn new(from: impl Into<NodeId>, to: impl Into<NodeId>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    pub fn from(&self) -> &NodeId {
        &self.from
    }

    pub fn to(&self) -> &NodeId {
        &self.to
    }
}

/// One adjacency slot of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Successor {
    /// Index of a declared node
    Known(usize),
    /// Edge target that is not declared in `nodes`
    Dangling,
}

/// An immutable learning graph.
///
/// Nodes keep their insertion order and every node is addressed by its
/// position in that order. Adjacency lists keep the order edges were added.
#[derive(Debug, Clone, Default)]
pub struct LearningGraph {
    nodes: Vec<Node>,
    index: HashMap<NodeId, usize>,
    edges: Vec<Edge>,
    adjacency: Vec<Vec<Successor>>,
}

impl LearningGraph {
    pub fn builder() -> LearningGraphBuilder {
        LearningGraphBuilder::new()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes in insertion order
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Edges in input order, dangling ones included
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node(&self, index: usize) -> &Node {
        &self.nodes[index]
    }

    pub fn index_of(&self, id: &NodeId) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub fn contains(&self, id: &NodeId) -> bool {
        self.index.contains_key(id)
    }

    /// Label of a node, if declared
    pub fn label(&self, id: &NodeId) -> Option<&str> {
        self.index_of(id).map(|i| self.nodes[i].label())
    }

    /// Label of a node, falling back to the stringified id
    pub fn display_label(&self, id: &NodeId) -> String {
        self.label(id)
            .map(str::to_string)
            .unwrap_or_else(|| id.to_string())
    }

    /// Successors of the node at `index`, in edge order
    pub fn successors(&self, index: usize) -> &[Successor] {
        &self.adjacency[index]
    }

    /// Edges with at least one endpoint missing from `nodes`
    pub fn dangling_edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges
            .iter()
            .filter(|edge| !self.contains(edge.from()) || !self.contains(edge.to()))
    }

    /// Find the declared node matching `topic` by id or by label
    pub fn find_topic(&self, topic: &str) -> Option<&Node> {
        self.nodes
            .iter()
            .find(|node| node.id().to_string() == topic)
            .or_else(|| self.nodes.iter().find(|node| node.label() == topic))
    }
}

/// Incremental builder for [`LearningGraph`].
///
/// All nodes must be added before the edges that reference them; an edge
/// added before its target node stays dangling.
#[derive(Debug, Default)]
pub struct LearningGraphBuilder {
    graph: LearningGraph,
}

impl LearningGraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node. A repeated id keeps its first position and takes the new
    /// label.
    pub fn add_node(&mut self, node: Node) -> &mut Self {
        let graph = &mut self.graph;
        match graph.index.get(node.id()) {
            Some(&existing) => graph.nodes[existing] = node,
            None => {
                graph.index.insert(node.id().clone(), graph.nodes.len());
                graph.nodes.push(node);
                graph.adjacency.push(Vec::new());
            }
        }
        self
    }

    pub fn add_edge(&mut self, edge: Edge) -> &mut Self {
        let graph = &mut self.graph;
        if let Some(from) = graph.index_of(edge.from()) {
            let successor = match graph.index_of(edge.to()) {
                Some(to) => Successor::Known(to),
                None => Successor::Dangling,
            };
            graph.adjacency[from].push(successor);
        }
        graph.edges.push(edge);
        self
    }

    pub fn with_node(mut self, id: impl Into<NodeId>, label: &str) -> Self {
        self.add_node(Node::new(id, Some(label.to_string())));
        self
    }

    pub fn with_edge(mut self, from: impl Into<NodeId>, to: impl Into<NodeId>) -> Self {
        self.add_edge(Edge::new(from, to));
        self
    }

    pub fn build(self) -> LearningGraph {
        self.graph
    }
}
