use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
#[error("Invalid JSON in '{file}'")]
#[diagnostic(
    code(learning_graph::json_parse_error),
    help("A learning graph is a JSON object with `nodes` and `edges` arrays")
)]
pub struct JsonParseError {
    pub file: String,
    #[source_code]
    pub source_code: NamedSource<String>,
    #[label("invalid JSON here")]
    pub span: Option<SourceSpan>,
    #[source]
    pub source: serde_json::Error,
}

#[derive(Error, Debug, Diagnostic)]
pub enum LearningGraphError {
    #[error("File not found: '{path}'")]
    #[diagnostic(
        code(learning_graph::source_not_found),
        help("Check the path to the learning graph JSON file")
    )]
    SourceNotFound { path: PathBuf },

    #[error("Failed to read file '{path}'")]
    #[diagnostic(
        code(learning_graph::io_error),
        help("Check if the file exists and you have read permissions")
    )]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    JsonParseError(Box<JsonParseError>),

    #[error("JSON serialization error")]
    #[diagnostic(
        code(learning_graph::json_error),
        help("This is likely an internal error - please report it")
    )]
    Json(#[from] serde_json::Error),

    #[error("String formatting error")]
    #[diagnostic(
        code(learning_graph::fmt_error),
        help("This is likely an internal error - please report it")
    )]
    Fmt(#[from] std::fmt::Error),

    #[error("IO error")]
    #[diagnostic(
        code(learning_graph::io_error),
        help("Check file permissions and disk space")
    )]
    Io(#[from] std::io::Error),

    #[error("Invalid file pattern '{pattern}'")]
    #[diagnostic(
        code(learning_graph::pattern_error),
        help("Use a glob such as `learning-graph.json` or `*.json`")
    )]
    PatternError {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("Topic '{topic}' not found in any learning graph")]
    #[diagnostic(
        code(learning_graph::topic_not_found),
        help("Topics are matched by node id or by label")
    )]
    TopicNotFound { topic: String },

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(learning_graph::config_error),
        help("Check your command arguments and configuration")
    )]
    ConfigurationError { message: String },
}

/// Convert serde_json's 1-based line/column into a byte span of `content`.
pub(crate) fn span_at(content: &str, line: usize, column: usize) -> Option<SourceSpan> {
    if line == 0 {
        return None;
    }

    let line_start: usize = content
        .split_inclusive('\n')
        .take(line - 1)
        .map(str::len)
        .sum();
    let offset = (line_start + column.saturating_sub(1)).min(content.len());
    let len = usize::from(offset < content.len());

    Some(SourceSpan::new(offset.into(), len))
}
