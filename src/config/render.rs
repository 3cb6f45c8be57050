//! Render command configuration

use std::path::PathBuf;

use crate::cli::GraphFormat;
use crate::common::missing_field;
use crate::error::LearningGraphError;

/// Configuration for rendering one learning graph
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Learning graph JSON file
    pub file: PathBuf,
    /// Output format for the graph
    pub format: GraphFormat,
    /// Output file path (None = stdout)
    pub output: Option<PathBuf>,
    /// Whether to highlight cycles in the graph
    pub highlight_cycles: bool,
    /// Show node ids next to labels
    pub show_ids: bool,
}

impl RenderConfig {
    pub fn builder() -> RenderConfigBuilder {
        RenderConfigBuilder::new()
    }
}

/// Builder for [`RenderConfig`]. Output, highlighting and id display have
/// defaults; file and format are required.
pub struct RenderConfigBuilder {
    file: Option<PathBuf>,
    format: Option<GraphFormat>,
    output: Option<PathBuf>,
    highlight_cycles: bool,
    show_ids: bool,
}

impl Default for RenderConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderConfigBuilder {
    pub fn new() -> Self {
        Self {
            file: None,
            format: None,
            output: None,
            highlight_cycles: true,
            show_ids: false,
        }
    }

    pub fn with_file(mut self, file: PathBuf) -> Self {
        self.file = Some(file);
        self
    }

    pub fn with_format(mut self, format: GraphFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = output;
        self
    }

    pub fn with_highlight_cycles(mut self, highlight_cycles: bool) -> Self {
        self.highlight_cycles = highlight_cycles;
        self
    }

    pub fn with_show_ids(mut self, show_ids: bool) -> Self {
        self.show_ids = show_ids;
        self
    }
}

impl crate::common::ConfigBuilder for RenderConfigBuilder {
    type Config = RenderConfig;

    fn build(self) -> Result<Self::Config, LearningGraphError> {
        Ok(RenderConfig {
            file: self.file.ok_or_else(|| missing_field("file"))?,
            format: self.format.ok_or_else(|| missing_field("format"))?,
            output: self.output,
            highlight_cycles: self.highlight_cycles,
            show_ids: self.show_ids,
        })
    }
}
