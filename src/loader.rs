//! Loading learning graphs from vis-network JSON documents

use std::io::ErrorKind;
use std::path::Path;

use miette::NamedSource;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::{JsonParseError, LearningGraphError, span_at};
use crate::graph::{Edge, LearningGraph, Node, NodeId};

#[derive(Debug, Deserialize)]
struct GraphDocument {
    #[serde(default)]
    nodes: Vec<NodeRecord>,
    #[serde(default)]
    edges: Vec<EdgeRecord>,
}

#[derive(Debug, Deserialize)]
struct NodeRecord {
    id: NodeId,
    #[serde(default, deserialize_with = "scalar_label")]
    label: Option<String>,
}

#[derive(Debug, Deserialize)]
struct EdgeRecord {
    from: NodeId,
    to: NodeId,
}

/// Labels are display text; numeric and boolean labels are kept as written
fn scalar_label<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(label)) => Ok(Some(label)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(other) => Err(D::Error::custom(format!(
            "label must be a string, number or boolean, found {other}"
        ))),
    }
}

/// Read and parse the learning graph at `path`
pub fn load_graph(path: &Path) -> Result<LearningGraph, LearningGraphError> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => LearningGraphError::SourceNotFound {
            path: path.to_path_buf(),
        },
        _ => LearningGraphError::FileReadError {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    parse_graph(&path.display().to_string(), &content)
}

/// Parse a learning graph document; `name` labels diagnostics
pub fn parse_graph(name: &str, content: &str) -> Result<LearningGraph, LearningGraphError> {
    let document: GraphDocument = serde_json::from_str(content).map_err(|e| {
        LearningGraphError::JsonParseError(Box::new(JsonParseError {
            file: name.to_string(),
            source_code: NamedSource::new(name, content.to_string()),
            span: span_at(content, e.line(), e.column()),
            source: e,
        }))
    })?;

    let mut builder = LearningGraph::builder();
    for record in document.nodes {
        builder.add_node(Node::new(record.id, record.label));
    }
    for record in document.edges {
        builder.add_edge(Edge::new(record.from, record.to));
    }

    Ok(builder.build())
}
