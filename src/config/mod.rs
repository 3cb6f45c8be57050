//! # Configuration Module
//!
//! Typed configuration for each learning-graph-check command. Every config
//! is assembled through its builder and validated by
//! [`ConfigBuilder::build`](crate::common::ConfigBuilder::build).
//!
//! ## Command Configurations
//!
//! - **CheckConfig**: the `check` command
//! - **SpotlightConfig**: the `spotlight` command, cycles through one topic
//! - **RenderConfig**: the `render` command, graph visualization
//!
//! ## Example
//!
//! ```
//! use learning_graph_check::cli::{GraphFormat, OutputFormat};
//! use learning_graph_check::common::ConfigBuilder;
//! use learning_graph_check::config::{CheckConfig, RenderConfig};
//!
//! let check = CheckConfig::builder()
//!     .with_paths(vec!["docs".into()])
//!     .with_pattern("learning-graph.json".to_string())
//!     .with_format(OutputFormat::Json)
//!     .with_max_cycles(None)
//!     .with_allow_cycles(false)
//!     .build()
//!     .unwrap();
//! assert_eq!(check.format, OutputFormat::Json);
//!
//! let render = RenderConfig::builder()
//!     .with_file("docs/learning-graph.json".into())
//!     .with_format(GraphFormat::Mermaid)
//!     .build()
//!     .unwrap();
//! assert!(render.highlight_cycles);
//! ```

pub mod check;
pub mod render;
pub mod spotlight;

pub use check::CheckConfig;
pub use render::RenderConfig;
pub use spotlight::SpotlightConfig;
