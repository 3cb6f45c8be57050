use petgraph::algo::kosaraju_scc;
use petgraph::graph::{DiGraph, NodeIndex};

use super::types::{LearningGraph, NodeId, Successor};

impl LearningGraph {
    /// Strongly connected components that contain at least one cycle.
    ///
    /// Members are listed in node insertion order and tangles are ordered by
    /// the position of their first member. Dangling edges are ignored.
    pub fn tangles(&self) -> Vec<Vec<NodeId>> {
        let mut graph: DiGraph<usize, ()> = DiGraph::with_capacity(self.node_count(), 0);
        let indices: Vec<NodeIndex> = (0..self.node_count()).map(|i| graph.add_node(i)).collect();

        let mut self_loops = vec![false; self.node_count()];
        for (from, &from_idx) in indices.iter().enumerate() {
            for successor in self.successors(from) {
                if let Successor::Known(to) = *successor {
                    if to == from {
                        self_loops[from] = true;
                    }
                    graph.add_edge(from_idx, indices[to], ());
                }
            }
        }

        let mut components: Vec<Vec<usize>> = kosaraju_scc(&graph)
            .into_iter()
            .map(|scc| {
                let mut members: Vec<usize> = scc.into_iter().map(|idx| graph[idx]).collect();
                members.sort_unstable();
                members
            })
            .filter(|members| members.len() > 1 || self_loops[members[0]])
            .collect();
        components.sort_by_key(|members| members[0]);

        components
            .into_iter()
            .map(|members| {
                members
                    .into_iter()
                    .map(|i| self.node(i).id().clone())
                    .collect()
            })
            .collect()
    }
}
