//! Spotlight command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::SpotlightConfig;
use crate::error::LearningGraphError;

impl FromCommand for SpotlightConfig {
    fn from_command(command: Commands) -> Result<Self, LearningGraphError> {
        match command {
            Commands::Spotlight {
                topic,
                common,
                format,
                cycle_display,
            } => SpotlightConfig::builder()
                .with_topic(topic)
                .with_paths(common.get_paths())
                .with_pattern(common.pattern)
                .with_format(format.format)
                .with_max_cycles(cycle_display.max_cycles)
                .build(),
            _ => Err(LearningGraphError::ConfigurationError {
                message: "Invalid command type for SpotlightConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(SpotlightConfig);

/// Execute the spotlight command for cycles through one topic
pub fn execute_spotlight_command(command: Commands) -> Result<()> {
    let config = SpotlightConfig::from_command(command)
        .wrap_err("Failed to parse spotlight command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::spotlight::SpotlightExecutor;
    SpotlightExecutor::execute(config)
}
