use serde::Serialize;

use crate::graph::{LearningGraph, NodeId, Successor};

/// Traversal state of one node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    Unvisited,
    /// On the active path
    InProgress,
    Done,
}

/// A node on the active path and the next adjacency slot to scan
#[derive(Debug)]
struct Frame {
    node: usize,
    next: usize,
}

/// A cycle of prerequisite edges.
///
/// Consecutive members are connected by an edge and the last member has an
/// edge back to the first. A self-loop is a cycle of one node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cycle {
    nodes: Vec<NodeId>,
}

impl Cycle {
    pub fn new(nodes: Vec<NodeId>) -> Self {
        Self { nodes }
    }

    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: &NodeId) -> bool {
        self.nodes.contains(id)
    }

    /// Members followed by the first member again
    pub fn closed_path(&self) -> impl Iterator<Item = &NodeId> {
        self.nodes.iter().chain(self.nodes.first())
    }

    /// Edges traversed by this cycle, the closing edge included
    pub fn edges(&self) -> impl Iterator<Item = (&NodeId, &NodeId)> {
        self.nodes
            .iter()
            .zip(self.nodes.iter().cycle().skip(1))
            .take(self.nodes.len())
    }

    /// Whether this cycle traverses the edge `from -> to`
    pub fn has_edge(&self, from: &NodeId, to: &NodeId) -> bool {
        self.edges().any(|(a, b)| a == from && b == to)
    }
}

/// Find the cycles of `graph` with one depth-first pass.
///
/// Roots are taken in node insertion order and successors in edge order.
/// Every back-edge yields exactly one cycle: the slice of the active path
/// from the back-edge target to the current node. Overlapping cycles are
/// reported separately, so this is not a full simple-cycle enumeration.
/// Dangling edges are skipped.
///
/// The traversal uses an explicit frame stack, so path depth is bounded by
/// memory rather than by the call stack. All traversal state is local to
/// the call.
pub fn detect_cycles(graph: &LearningGraph) -> Vec<Cycle> {
    let mut colors = vec![Color::Unvisited; graph.node_count()];
    let mut path: Vec<Frame> = Vec::new();
    let mut cycles = Vec::new();

    for root in 0..graph.node_count() {
        if colors[root] != Color::Unvisited {
            continue;
        }

        colors[root] = Color::InProgress;
        path.push(Frame {
            node: root,
            next: 0,
        });

        while let Some(frame) = path.last_mut() {
            let node = frame.node;
            let Some(&successor) = graph.successors(node).get(frame.next) else {
                path.pop();
                colors[node] = Color::Done;
                continue;
            };
            frame.next += 1;

            let Successor::Known(target) = successor else {
                continue;
            };

            match colors[target] {
                Color::Unvisited => {
                    colors[target] = Color::InProgress;
                    path.push(Frame {
                        node: target,
                        next: 0,
                    });
                }
                Color::InProgress => {
                    // Every in-progress node is on the path.
                    if let Some(start) = path.iter().rposition(|f| f.node == target) {
                        let members = path[start..]
                            .iter()
                            .map(|f| graph.node(f.node).id().clone())
                            .collect();
                        cycles.push(Cycle::new(members));
                    }
                }
                Color::Done => {}
            }
        }
    }

    cycles
}

/// Holds the cycles detected in one learning graph
#[derive(Debug, Clone, Default)]
pub struct CycleDetector {
    cycles: Vec<Cycle>,
}

impl CycleDetector {
    /// Create a new cycle detector
    pub fn new() -> Self {
        Self { cycles: Vec::new() }
    }

    /// Detect cycles in `graph`, replacing any previous result
    pub fn detect_cycles(&mut self, graph: &LearningGraph) {
        self.cycles = detect_cycles(graph);
    }

    /// Get all detected cycles, in discovery order
    pub fn cycles(&self) -> &[Cycle] {
        &self.cycles
    }

    /// Check if any cycles were detected
    pub fn has_cycles(&self) -> bool {
        !self.cycles.is_empty()
    }

    /// Get the number of detected cycles
    pub fn cycle_count(&self) -> usize {
        self.cycles.len()
    }

    /// Add a cycle to the detector (used for filtered results)
    pub fn add_cycle(&mut self, cycle: Cycle) {
        self.cycles.push(cycle);
    }

    /// Cycles that pass through `id`
    pub fn cycles_involving<'a>(&'a self, id: &'a NodeId) -> impl Iterator<Item = &'a Cycle> {
        self.cycles.iter().filter(move |cycle| cycle.contains(id))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn ids(names: &[&str]) -> Vec<NodeId> {
        names.iter().map(|n| NodeId::from(*n)).collect()
    }

    fn cycle(names: &[&str]) -> Cycle {
        Cycle::new(ids(names))
    }

    fn graph_from(nodes: &[&str], edges: &[(&str, &str)]) -> LearningGraph {
        let mut builder = LearningGraph::builder();
        for node in nodes {
            builder = builder.with_node(*node, &node.to_uppercase());
        }
        for (from, to) in edges {
            builder = builder.with_edge(*from, *to);
        }
        builder.build()
    }

    #[test]
    fn test_no_cycles_in_linear_graph() {
        let graph = graph_from(&["a", "b", "c"], &[("a", "b"), ("b", "c")]);

        assert!(detect_cycles(&graph).is_empty());
    }

    #[test]
    fn test_no_cycles_in_diamond() {
        let graph = graph_from(
            &["a", "b", "c", "d"],
            &[("a", "b"), ("a", "c"), ("b", "d"), ("c", "d")],
        );

        assert!(detect_cycles(&graph).is_empty());
    }

    #[test]
    fn test_single_node_without_edges() {
        let graph = graph_from(&["a"], &[]);

        assert!(detect_cycles(&graph).is_empty());
    }

    #[test]
    fn test_empty_graph() {
        let graph = LearningGraph::default();

        assert!(detect_cycles(&graph).is_empty());
    }

    #[test]
    fn test_self_loop() {
        let graph = graph_from(&["x"], &[("x", "x")]);

        assert_eq!(detect_cycles(&graph), vec![cycle(&["x"])]);
    }

    #[test]
    fn test_three_node_cycle_starts_at_first_node() {
        let graph = graph_from(&["a", "b", "c"], &[("a", "b"), ("b", "c"), ("c", "a")]);

        assert_eq!(detect_cycles(&graph), vec![cycle(&["a", "b", "c"])]);
    }

    #[test]
    fn test_rotation_follows_insertion_order() {
        // Same edges, but "b" is declared first so the traversal starts there
        let graph = graph_from(&["b", "a", "c"], &[("a", "b"), ("b", "c"), ("c", "a")]);

        assert_eq!(detect_cycles(&graph), vec![cycle(&["b", "c", "a"])]);
    }

    #[test]
    fn test_disjoint_cycles_reported_independently() {
        let edges = [("a", "b"), ("b", "a"), ("c", "d"), ("d", "c")];

        let graph = graph_from(&["a", "b", "c", "d"], &edges);
        assert_eq!(
            detect_cycles(&graph),
            vec![cycle(&["a", "b"]), cycle(&["c", "d"])]
        );

        let graph = graph_from(&["d", "c", "b", "a"], &edges);
        assert_eq!(
            detect_cycles(&graph),
            vec![cycle(&["d", "c"]), cycle(&["b", "a"])]
        );
    }

    #[test]
    fn test_dangling_edge_is_ignored() {
        let graph = graph_from(&["a", "b"], &[("a", "z"), ("a", "b"), ("b", "a")]);

        assert_eq!(detect_cycles(&graph), vec![cycle(&["a", "b"])]);
    }

    #[test]
    fn test_edge_from_undeclared_node_is_ignored() {
        let graph = graph_from(&["a"], &[("z", "a"), ("a", "z")]);

        assert!(detect_cycles(&graph).is_empty());
    }

    #[test]
    fn test_one_cycle_per_back_edge() {
        // a -> b -> c -> a and c -> b: two back-edges closing on the same path
        let graph = graph_from(
            &["a", "b", "c"],
            &[("a", "b"), ("b", "c"), ("c", "a"), ("c", "b")],
        );

        assert_eq!(
            detect_cycles(&graph),
            vec![cycle(&["a", "b", "c"]), cycle(&["b", "c"])]
        );
    }

    #[test]
    fn test_scanning_continues_after_a_cycle() {
        // The back-edge b -> a comes before b -> c; c's self-loop must still be found
        let graph = graph_from(
            &["a", "b", "c"],
            &[("a", "b"), ("b", "a"), ("b", "c"), ("c", "c")],
        );

        assert_eq!(
            detect_cycles(&graph),
            vec![cycle(&["a", "b"]), cycle(&["c"])]
        );
    }

    #[test]
    fn test_done_nodes_are_not_revisited() {
        // c is finished via a -> b -> c before a -> c is scanned; the cycle
        // c -> d -> c is reported once
        let graph = graph_from(
            &["a", "b", "c", "d"],
            &[("a", "b"), ("b", "c"), ("c", "d"), ("d", "c"), ("a", "c")],
        );

        assert_eq!(detect_cycles(&graph), vec![cycle(&["c", "d"])]);
    }

    #[test]
    fn test_parallel_edges_report_each_back_edge() {
        let graph = graph_from(&["a", "b"], &[("a", "b"), ("b", "a"), ("b", "a")]);

        assert_eq!(
            detect_cycles(&graph),
            vec![cycle(&["a", "b"]), cycle(&["a", "b"])]
        );
    }

    #[test]
    fn test_cycle_members_only_come_from_active_path() {
        // x -> a -> b -> a: x is on the path but not part of the cycle
        let graph = graph_from(&["x", "a", "b"], &[("x", "a"), ("a", "b"), ("b", "a")]);

        assert_eq!(detect_cycles(&graph), vec![cycle(&["a", "b"])]);
    }

    #[test]
    fn test_numeric_ids() {
        let graph = LearningGraph::builder()
            .with_node(1, "One")
            .with_node(2, "Two")
            .with_edge(1, 2)
            .with_edge(2, 1)
            .build();

        assert_eq!(
            detect_cycles(&graph),
            vec![Cycle::new(vec![NodeId::from(1), NodeId::from(2)])]
        );
    }

    #[test]
    fn test_detection_is_idempotent() {
        let graph = graph_from(
            &["a", "b", "c", "d"],
            &[("a", "b"), ("b", "a"), ("c", "d"), ("d", "c"), ("d", "d")],
        );

        let first = detect_cycles(&graph);
        let second = detect_cycles(&graph);
        assert_eq!(first, second);
        assert_eq!(first.len(), 3);
    }

    #[test]
    fn test_deep_chain_does_not_overflow() {
        let depth = 100_000i64;
        let mut builder = LearningGraph::builder();
        for i in 0..depth {
            builder = builder.with_node(i, "topic");
        }
        for i in 0..depth - 1 {
            builder = builder.with_edge(i, i + 1);
        }
        builder = builder.with_edge(depth - 1, 0);
        let graph = builder.build();

        let cycles = detect_cycles(&graph);
        assert_eq!(cycles.len(), 1);
        assert_eq!(cycles[0].len(), depth as usize);
        assert_eq!(cycles[0].nodes()[0], NodeId::from(0));
    }

    #[test]
    fn test_cycle_closed_path_and_edges() {
        let c = cycle(&["a", "b", "c"]);

        let closed: Vec<_> = c.closed_path().map(ToString::to_string).collect();
        assert_eq!(closed, vec!["a", "b", "c", "a"]);

        let a = NodeId::from("a");
        let b = NodeId::from("b");
        let cc = NodeId::from("c");
        assert!(c.has_edge(&a, &b));
        assert!(c.has_edge(&cc, &a));
        assert!(!c.has_edge(&b, &a));
        assert_eq!(c.edges().count(), 3);
    }

    #[test]
    fn test_self_loop_edges() {
        let c = cycle(&["x"]);
        let x = NodeId::from("x");

        assert!(c.has_edge(&x, &x));
        let closed: Vec<_> = c.closed_path().map(ToString::to_string).collect();
        assert_eq!(closed, vec!["x", "x"]);
    }

    #[test]
    fn test_detector_replaces_previous_result() {
        let cyclic = graph_from(&["a", "b"], &[("a", "b"), ("b", "a")]);
        let acyclic = graph_from(&["a", "b"], &[("a", "b")]);

        let mut detector = CycleDetector::new();
        detector.detect_cycles(&cyclic);
        assert!(detector.has_cycles());
        assert_eq!(detector.cycle_count(), 1);

        detector.detect_cycles(&acyclic);
        assert!(!detector.has_cycles());
        assert_eq!(detector.cycle_count(), 0);
    }

    #[test]
    fn test_cycles_involving() {
        let graph = graph_from(
            &["a", "b", "c", "d"],
            &[("a", "b"), ("b", "a"), ("c", "d"), ("d", "c")],
        );
        let mut detector = CycleDetector::new();
        detector.detect_cycles(&graph);

        let c = NodeId::from("c");
        let involving: Vec<_> = detector.cycles_involving(&c).collect();
        assert_eq!(involving, vec![&cycle(&["c", "d"])]);
    }
}
