//! Spotlight command configuration

use std::path::PathBuf;

use crate::cli::OutputFormat;
use crate::common::missing_field;
use crate::error::LearningGraphError;

/// Configuration for the spotlight command
#[derive(Debug, Clone)]
pub struct SpotlightConfig {
    /// Node id or label of the topic to focus on
    pub topic: String,
    pub paths: Vec<PathBuf>,
    pub pattern: String,
    pub format: OutputFormat,
    pub max_cycles: Option<usize>,
}

impl SpotlightConfig {
    pub fn builder() -> SpotlightConfigBuilder {
        SpotlightConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct SpotlightConfigBuilder {
    topic: Option<String>,
    paths: Option<Vec<PathBuf>>,
    pattern: Option<String>,
    format: Option<OutputFormat>,
    max_cycles: Option<Option<usize>>,
}

impl SpotlightConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_topic(mut self, topic: String) -> Self {
        self.topic = Some(topic);
        self
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
}

impl crate::common::ConfigBuilder for SpotlightConfigBuilder {
    type Config = SpotlightConfig;

    fn build(self) -> Result<Self::Config, LearningGraphError> {
        let topic = self.topic.ok_or_else(|| missing_field("topic"))?;
        if topic.trim().is_empty() {
            return Err(LearningGraphError::ConfigurationError {
                message: "Topic must not be empty".to_string(),
            });
        }

        Ok(SpotlightConfig {
            topic,
            paths: self.paths.ok_or_else(|| missing_field("paths"))?,
            pattern: self.pattern.ok_or_else(|| missing_field("pattern"))?,
            format: self.format.ok_or_else(|| missing_field("format"))?,
            max_cycles: self.max_cycles.ok_or_else(|| missing_field("max_cycles"))?,
        })
    }
}
