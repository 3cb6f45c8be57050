use std::path::{Path, PathBuf};

use indicatif::ParallelProgressIterator;
use miette::{Result, WrapErr};
use rayon::prelude::*;

use crate::detector::CycleDetector;
use crate::error::LearningGraphError;
use crate::graph::{LearningGraph, NodeId};
use crate::loader::load_graph;
use crate::progress::ProgressReporter;

/// Outcome of checking one learning graph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphStatus {
    /// No topics declared; detection was not run
    Empty,
    Clean,
    Cyclic,
}

impl GraphStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GraphStatus::Empty => "empty",
            GraphStatus::Clean => "clean",
            GraphStatus::Cyclic => "cyclic",
        }
    }
}

/// A loaded learning graph paired with its detection result
#[derive(Debug, Clone)]
pub struct GraphCheck {
    source: PathBuf,
    graph: LearningGraph,
    detector: CycleDetector,
    tangles: Vec<Vec<NodeId>>,
}

impl GraphCheck {
    /// Run detection on `graph`. Empty graphs skip the detector.
    pub fn run(source: impl Into<PathBuf>, graph: LearningGraph) -> Self {
        let mut detector = CycleDetector::new();
        let mut tangles = Vec::new();
        if !graph.is_empty() {
            detector.detect_cycles(&graph);
            if detector.has_cycles() {
                tangles = graph.tangles();
            }
        }

        Self {
            source: source.into(),
            graph,
            detector,
            tangles,
        }
    }

    /// Same graph, with the cycles restricted to those passing through `id`
    pub fn focused_on(&self, id: &NodeId) -> Self {
        let mut detector = CycleDetector::new();
        for cycle in self.detector.cycles_involving(id) {
            detector.add_cycle(cycle.clone());
        }
        let tangles = self
            .tangles
            .iter()
            .filter(|tangle| tangle.contains(id))
            .cloned()
            .collect();

        Self {
            source: self.source.clone(),
            graph: self.graph.clone(),
            detector,
            tangles,
        }
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn graph(&self) -> &LearningGraph {
        &self.graph
    }

    pub fn detector(&self) -> &CycleDetector {
        &self.detector
    }

    /// Strongly connected groups of topics that contain the cycles
    pub fn tangles(&self) -> &[Vec<NodeId>] {
        &self.tangles
    }

    pub fn status(&self) -> GraphStatus {
        if self.graph.is_empty() {
            GraphStatus::Empty
        } else if self.detector.has_cycles() {
            GraphStatus::Cyclic
        } else {
            GraphStatus::Clean
        }
    }
}

/// Loads learning graphs and checks each one for cycles
#[derive(Debug, Default)]
pub struct GraphAnalyzer {
    checks: Vec<GraphCheck>,
}

impl GraphAnalyzer {
    pub fn new() -> Self {
        Self { checks: Vec::new() }
    }

    /// Load and check every file. Results keep the order of `files`; the
    /// first file that fails to load aborts the analysis.
    pub fn analyze(
        &mut self,
        files: &[PathBuf],
        progress: Option<&mut ProgressReporter>,
    ) -> Result<()> {
        let check_file = |path: &PathBuf| -> Result<GraphCheck, LearningGraphError> {
            let graph = load_graph(path)?;
            Ok(GraphCheck::run(path.clone(), graph))
        };

        let checks: Result<Vec<GraphCheck>, LearningGraphError> = match progress {
            Some(p) => {
                let bar = p.start_loading(files.len());
                let checks = files.par_iter().progress_with(bar).map(check_file).collect();
                p.finish_loading();
                checks
            }
            None => files.par_iter().map(check_file).collect(),
        };

        self.checks = checks.wrap_err("Failed to load learning graph")?;
        Ok(())
    }

    /// Add an already-built check (used for in-memory graphs)
    pub fn add_check(&mut self, check: GraphCheck) {
        self.checks.push(check);
    }

    pub fn checks(&self) -> &[GraphCheck] {
        &self.checks
    }

    pub fn has_cycles(&self) -> bool {
        self.checks.iter().any(|c| c.detector().has_cycles())
    }

    pub fn total_cycles(&self) -> usize {
        self.checks.iter().map(|c| c.detector().cycle_count()).sum()
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;

    fn write_graph(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_empty_graph_skips_detection() {
        let check = GraphCheck::run("empty.json", LearningGraph::default());

        assert_eq!(check.status(), GraphStatus::Empty);
        assert_eq!(check.detector().cycle_count(), 0);
        assert!(check.tangles().is_empty());
    }

    #[test]
    fn test_status_clean_and_cyclic() {
        let clean = LearningGraph::builder()
            .with_node("a", "A")
            .with_node("b", "B")
            .with_edge("a", "b")
            .build();
        assert_eq!(GraphCheck::run("clean.json", clean).status(), GraphStatus::Clean);

        let cyclic = LearningGraph::builder()
            .with_node("a", "A")
            .with_edge("a", "a")
            .build();
        let check = GraphCheck::run("cyclic.json", cyclic);
        assert_eq!(check.status(), GraphStatus::Cyclic);
        assert_eq!(check.tangles(), &[vec![NodeId::from("a")]]);
    }

    #[test]
    fn test_focused_on_filters_cycles_and_tangles() {
        let graph = LearningGraph::builder()
            .with_node("a", "A")
            .with_node("b", "B")
            .with_node("c", "C")
            .with_node("d", "D")
            .with_edge("a", "b")
            .with_edge("b", "a")
            .with_edge("c", "d")
            .with_edge("d", "c")
            .build();
        let check = GraphCheck::run("graph.json", graph);
        assert_eq!(check.detector().cycle_count(), 2);

        let focused = check.focused_on(&NodeId::from("d"));
        assert_eq!(focused.detector().cycle_count(), 1);
        assert_eq!(
            focused.tangles(),
            &[vec![NodeId::from("c"), NodeId::from("d")]]
        );
        assert_eq!(focused.graph().node_count(), 4);
    }

    #[test]
    fn test_deep_cyclic_graph_is_checked() {
        let depth = 100_000i64;
        let mut builder = LearningGraph::builder();
        for i in 0..depth {
            builder.add_node(crate::graph::Node::new(i, None));
        }
        for i in 0..depth {
            builder.add_edge(crate::graph::Edge::new(i, (i + 1) % depth));
        }

        let check = GraphCheck::run("deep.json", builder.build());

        assert_eq!(check.status(), GraphStatus::Cyclic);
        assert_eq!(check.detector().cycle_count(), 1);
        assert_eq!(check.detector().cycles()[0].len(), depth as usize);
        assert_eq!(check.tangles().len(), 1);
    }

    #[test]
    fn test_add_check_for_in_memory_graphs() {
        let cyclic = LearningGraph::builder()
            .with_node("a", "A")
            .with_edge("a", "a")
            .build();
        let clean = LearningGraph::builder().with_node("b", "B").build();

        let mut analyzer = GraphAnalyzer::new();
        analyzer.add_check(GraphCheck::run("cyclic.json", cyclic));
        analyzer.add_check(GraphCheck::run("clean.json", clean));

        assert_eq!(analyzer.checks().len(), 2);
        assert!(analyzer.has_cycles());
        assert_eq!(analyzer.total_cycles(), 1);
        assert_eq!(analyzer.checks()[1].source(), Path::new("clean.json"));
    }

    #[test]
    fn test_analyze_keeps_file_order() {
        let temp_dir = TempDir::new().unwrap();
        let files = vec![
            write_graph(
                temp_dir.path(),
                "a.json",
                r#"{"nodes": [{"id": 1}, {"id": 2}], "edges": [{"from": 1, "to": 2}, {"from": 2, "to": 1}]}"#,
            ),
            write_graph(temp_dir.path(), "b.json", r#"{"nodes": [], "edges": []}"#),
            write_graph(
                temp_dir.path(),
                "c.json",
                r#"{"nodes": [{"id": 1}], "edges": []}"#,
            ),
        ];

        let mut analyzer = GraphAnalyzer::new();
        analyzer.analyze(&files, None).unwrap();

        let statuses: Vec<_> = analyzer.checks().iter().map(GraphCheck::status).collect();
        assert_eq!(
            statuses,
            vec![GraphStatus::Cyclic, GraphStatus::Empty, GraphStatus::Clean]
        );
        assert_eq!(analyzer.checks()[0].source(), files[0].as_path());
        assert!(analyzer.has_cycles());
        assert_eq!(analyzer.total_cycles(), 1);
    }

    #[test]
    fn test_analyze_fails_on_malformed_graph() {
        let temp_dir = TempDir::new().unwrap();
        let files = vec![write_graph(temp_dir.path(), "bad.json", "{ not json")];

        let mut analyzer = GraphAnalyzer::new();
        assert!(analyzer.analyze(&files, None).is_err());
    }
}
