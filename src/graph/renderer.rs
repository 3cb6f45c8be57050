use std::collections::HashMap;
use std::io::Write;

use miette::Result;

use crate::detector::Cycle;
use crate::error::LearningGraphError;
use crate::graph::{Edge, LearningGraph, NodeId, Successor};

// Blue-Orange Accessible Palette - Soothing colors with excellent contrast
mod colors {
    pub const NORMAL_NODE_FILL: &str = "#E3F2FD"; // Light blue
    pub const NORMAL_NODE_STROKE: &str = "#1976D2"; // Medium blue
    pub const CYCLE_NODE_FILL: &str = "#FFF3E0"; // Light orange
    pub const CYCLE_NODE_STROKE: &str = "#F57C00"; // Vibrant orange
    pub const NORMAL_EDGE: &str = "#64B5F6"; // Soft blue
    pub const CYCLE_EDGE: &str = "#FF6500"; // Deep orange
    pub const LEGEND_BG: &str = "#FAFAFA"; // Off-white background
}

// Helper macro for write operations that converts IO errors
macro_rules! writeln_out {
    ($dst:expr) => {
        writeln!($dst).map_err(LearningGraphError::from)
    };
    ($dst:expr, $($arg:tt)*) => {
        writeln!($dst, $($arg)*).map_err(LearningGraphError::from)
    };
}

/// A prerequisite relation between two declared topics, with its multiplicity
struct AggregatedEdge {
    from: usize,
    to: usize,
    count: usize,
}

pub struct GraphRenderer {
    highlight_cycles: bool,
    show_ids: bool,
}

impl GraphRenderer {
    pub fn new(highlight_cycles: bool, show_ids: bool) -> Self {
        Self {
            highlight_cycles,
            show_ids,
        }
    }

    pub fn render_ascii(
        &self,
        graph: &LearningGraph,
        cycles: &[Cycle],
        output: &mut dyn Write,
    ) -> Result<()> {
        if graph.is_empty() {
            writeln_out!(output, "No topics found to visualize")?;
            return Ok(());
        }

        writeln_out!(output, "\n📚 Learning Graph\n")?;

        let mut outgoing: HashMap<&NodeId, Vec<&Edge>> = HashMap::new();
        for edge in graph.edges() {
            outgoing.entry(edge.from()).or_default().push(edge);
        }

        for node in graph.nodes() {
            let title = self.node_title(node.id(), node.label());

            if self.highlight_cycles && self.node_in_cycle(node.id(), cycles) {
                writeln_out!(output, "┌─────────────────────────────────────┐")?;
                writeln_out!(output, "│ {} ⚠️  IN CYCLE", title)?;
                writeln_out!(output, "└─────────────────────────────────────┘")?;
            } else {
                writeln_out!(output, "{}", title)?;
            }

            let edges = outgoing.get(node.id()).map(Vec::as_slice).unwrap_or(&[]);
            if edges.is_empty() {
                writeln_out!(output, "  └── (no prerequisites)")?;
            }

            for (i, edge) in edges.iter().enumerate() {
                let prefix = if i == edges.len() - 1 {
                    "└──"
                } else {
                    "├──"
                };

                match graph.label(edge.to()) {
                    Some(label) => {
                        let cycle_marker = if self.highlight_cycles
                            && self.edge_in_cycle(edge.from(), edge.to(), cycles)
                        {
                            " ⚠️  [CYCLE]"
                        } else {
                            ""
                        };
                        writeln_out!(
                            output,
                            "  {} → {}{}",
                            prefix,
                            self.node_title(edge.to(), label),
                            cycle_marker
                        )?;
                    }
                    None => {
                        writeln_out!(output, "  {} → {} (undeclared)", prefix, edge.to())?;
                    }
                }
            }

            writeln_out!(output)?; // Empty line between topics
        }

        if !cycles.is_empty() && self.highlight_cycles {
            writeln_out!(output, "⚠️  = Part of a prerequisite cycle")?;
        }

        Ok(())
    }

    pub fn render_mermaid(
        &self,
        graph: &LearningGraph,
        cycles: &[Cycle],
        output: &mut dyn Write,
    ) -> Result<()> {
        writeln_out!(output, "graph TD")?;
        if graph.is_empty() {
            writeln_out!(output, "    %% No topics found to visualize")?;
            return Ok(());
        }

        for (index, node) in graph.nodes().iter().enumerate() {
            let node_id = self.mermaid_id(index);
            let label = escape_mermaid(&self.node_title(node.id(), node.label()));
            let in_cycle = self.highlight_cycles && self.node_in_cycle(node.id(), cycles);

            if in_cycle {
                writeln_out!(output, "    {}((\"{}\"))", node_id, label)?;
                writeln_out!(
                    output,
                    "    style {} fill:{},stroke:{},stroke-width:3px",
                    node_id,
                    colors::CYCLE_NODE_FILL,
                    colors::CYCLE_NODE_STROKE
                )?;
            } else {
                writeln_out!(output, "    {}[\"{}\"]", node_id, label)?;
                writeln_out!(
                    output,
                    "    style {} fill:{},stroke:{},stroke-width:2px",
                    node_id,
                    colors::NORMAL_NODE_FILL,
                    colors::NORMAL_NODE_STROKE
                )?;
            }
        }

        writeln_out!(output)?;

        for (link_style_index, edge) in aggregate_edges(graph).iter().enumerate() {
            let from = graph.node(edge.from).id();
            let to = graph.node(edge.to).id();
            let arrow = if edge.count > 1 {
                format!("-->|×{}|", edge.count)
            } else {
                "-->".to_string()
            };

            writeln_out!(
                output,
                "    {} {} {}",
                self.mermaid_id(edge.from),
                arrow,
                self.mermaid_id(edge.to)
            )?;

            let (color, width) = if self.highlight_cycles && self.edge_in_cycle(from, to, cycles) {
                (colors::CYCLE_EDGE, 3)
            } else {
                (colors::NORMAL_EDGE, 2)
            };
            writeln_out!(
                output,
                "    linkStyle {} stroke:{},stroke-width:{}px",
                link_style_index,
                color,
                width
            )?;
        }

        if !cycles.is_empty() && self.highlight_cycles {
            writeln_out!(output)?;
            writeln_out!(output, "    subgraph Legend")?;
            writeln_out!(output, "        L1[Topic]")?;
            writeln_out!(output, "        L2((Topic in Cycle))")?;
            writeln_out!(
                output,
                "        style L1 fill:{},stroke:{},stroke-width:2px",
                colors::NORMAL_NODE_FILL,
                colors::NORMAL_NODE_STROKE
            )?;
            writeln_out!(
                output,
                "        style L2 fill:{},stroke:{},stroke-width:3px",
                colors::CYCLE_NODE_FILL,
                colors::CYCLE_NODE_STROKE
            )?;
            writeln_out!(
                output,
                "        style Legend fill:{},stroke:#ddd,stroke-width:1px",
                colors::LEGEND_BG
            )?;
            writeln_out!(output, "    end")?;
        }

        Ok(())
    }

    pub fn render_dot(
        &self,
        graph: &LearningGraph,
        cycles: &[Cycle],
        output: &mut dyn Write,
    ) -> Result<()> {
        writeln_out!(output, "digraph learning_graph {{")?;
        writeln_out!(output, "    rankdir=BT;")?;
        writeln_out!(output, "    node [shape=box, style=rounded];")?;
        if graph.is_empty() {
            writeln_out!(output, "    // No topics found to visualize")?;
            writeln_out!(output, "}}")?;
            return Ok(());
        }
        writeln_out!(output)?;

        for (index, node) in graph.nodes().iter().enumerate() {
            let (fill_color, stroke_color) =
                if self.highlight_cycles && self.node_in_cycle(node.id(), cycles) {
                    (colors::CYCLE_NODE_FILL, colors::CYCLE_NODE_STROKE)
                } else {
                    (colors::NORMAL_NODE_FILL, colors::NORMAL_NODE_STROKE)
                };

            writeln_out!(
                output,
                r#"    n{} [label="{}", style=filled, fillcolor="{}", color="{}", penwidth=2];"#,
                index,
                escape_dot(&self.node_title(node.id(), node.label())),
                fill_color,
                stroke_color
            )?;
        }

        writeln_out!(output)?;

        for edge in aggregate_edges(graph) {
            let from = graph.node(edge.from).id();
            let to = graph.node(edge.to).id();
            let label = if edge.count > 1 {
                format!(r#", label="×{}""#, edge.count)
            } else {
                String::new()
            };

            let (color, width) = if self.highlight_cycles && self.edge_in_cycle(from, to, cycles) {
                (colors::CYCLE_EDGE, 3)
            } else {
                (colors::NORMAL_EDGE, 2)
            };
            writeln_out!(
                output,
                r#"    n{} -> n{} [color="{}", penwidth={}{}];"#,
                edge.from,
                edge.to,
                color,
                width,
                label
            )?;
        }

        writeln_out!(output, "}}")?;
        Ok(())
    }

    fn node_title(&self, id: &NodeId, label: &str) -> String {
        if self.show_ids {
            format!("{id}: {label}")
        } else {
            label.to_string()
        }
    }

    fn node_in_cycle(&self, id: &NodeId, cycles: &[Cycle]) -> bool {
        cycles.iter().any(|cycle| cycle.contains(id))
    }

    fn edge_in_cycle(&self, from: &NodeId, to: &NodeId, cycles: &[Cycle]) -> bool {
        cycles.iter().any(|cycle| cycle.has_edge(from, to))
    }

    fn mermaid_id(&self, index: usize) -> String {
        // Ids are positional so arbitrary topic ids never need escaping
        format!("n{index}")
    }
}

/// Edges between declared topics in first-seen order, parallel edges merged
fn aggregate_edges(graph: &LearningGraph) -> Vec<AggregatedEdge> {
    let mut positions: HashMap<(usize, usize), usize> = HashMap::new();
    let mut edges: Vec<AggregatedEdge> = Vec::new();

    for from in 0..graph.node_count() {
        for successor in graph.successors(from) {
            let Successor::Known(to) = *successor else {
                continue;
            };
            match positions.get(&(from, to)) {
                Some(&position) => edges[position].count += 1,
                None => {
                    positions.insert((from, to), edges.len());
                    edges.push(AggregatedEdge { from, to, count: 1 });
                }
            }
        }
    }

    edges
}

fn escape_mermaid(label: &str) -> String {
    label.replace('"', "#quot;")
}

fn escape_dot(label: &str) -> String {
    label.replace('\\', "\\\\").replace('"', "\\\"")
}
