//! Check command configuration

use std::path::PathBuf;

use crate::cli::OutputFormat;
use crate::common::missing_field;
use crate::error::LearningGraphError;

/// Configuration for the check command
#[derive(Debug, Clone)]
pub struct CheckConfig {
    /// Files or directories holding learning graphs
    pub paths: Vec<PathBuf>,
    /// File name pattern used inside directories
    pub pattern: String,
    /// Output format for the report
    pub format: OutputFormat,
    /// Maximum number of cycles to list per graph (None = all)
    pub max_cycles: Option<usize>,
    /// Exit successfully even when cycles are found
    pub allow_cycles: bool,
}

impl CheckConfig {
    pub fn builder() -> CheckConfigBuilder {
        CheckConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct CheckConfigBuilder {
    paths: Option<Vec<PathBuf>>,
    pattern: Option<String>,
    format: Option<OutputFormat>,
    max_cycles: Option<Option<usize>>,
    allow_cycles: Option<bool>,
}

impl CheckConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.paths = Some(paths);
        self
    }

    pub fn with_pattern(mut self, pattern: String) -> Self {
        self.pattern = Some(pattern);
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_max_cycles(mut self, max_cycles: Option<usize>) -> Self {
        self.max_cycles = Some(max_cycles);
        self
    }

    pub fn with_allow_cycles(mut self, allow_cycles: bool) -> Self {
        self.allow_cycles = Some(allow_cycles);
        self
    }
}

impl crate::common::ConfigBuilder for CheckConfigBuilder {
    type Config = CheckConfig;

    fn build(self) -> Result<Self::Config, LearningGraphError> {
        Ok(CheckConfig {
            paths: self.paths.ok_or_else(|| missing_field("paths"))?,
            pattern: self.pattern.ok_or_else(|| missing_field("pattern"))?,
            format: self.format.ok_or_else(|| missing_field("format"))?,
            max_cycles: self.max_cycles.ok_or_else(|| missing_field("max_cycles"))?,
            allow_cycles: self
                .allow_cycles
                .ok_or_else(|| missing_field("allow_cycles"))?,
        })
    }
}
