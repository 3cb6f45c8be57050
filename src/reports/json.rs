//! JSON format report generation

use serde_json::{Value, json};

use super::{ReportGenerator, cycle_labels};
use crate::analyzer::GraphCheck;
use crate::error::LearningGraphError;
use crate::utils::string::join_closed;

pub struct JsonReportGenerator;

impl Default for JsonReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonReportGenerator {
    pub fn new() -> Self {
        Self
    }

    fn graph_entry(check: &GraphCheck) -> Value {
        let graph = check.graph();

        // Cycles keep detection order; consumers rely on it matching the human report
        let cycles: Vec<_> = check
            .detector()
            .cycles()
            .iter()
            .map(|cycle| {
                let labels = cycle_labels(graph, cycle);
                json!({
                    "nodes": cycle.nodes(),
                    "path": join_closed(&labels, " -> "),
                    "labels": labels,
                })
            })
            .collect();

        json!({
            "source": check.source().display().to_string(),
            "status": check.status().as_str(),
            "node_count": graph.node_count(),
            "edge_count": graph.edge_count(),
            "dangling_edges": graph.dangling_edges().count(),
            "cycle_count": check.detector().cycle_count(),
            "cycles": cycles,
            "tangles": check.tangles(),
        })
    }
}

impl ReportGenerator for JsonReportGenerator {
    fn generate_report(&self, checks: &[GraphCheck]) -> Result<String, LearningGraphError> {
        let graphs: Vec<_> = checks.iter().map(Self::graph_entry).collect();

        let report = json!({
            "has_cycles": checks.iter().any(|c| c.detector().has_cycles()),
            "graph_count": checks.len(),
            "cycle_count": checks.iter().map(|c| c.detector().cycle_count()).sum::<usize>(),
            "graphs": graphs,
        });

        serde_json::to_string_pretty(&report).map_err(LearningGraphError::Json)
    }
}
