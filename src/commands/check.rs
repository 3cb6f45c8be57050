//! Check command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::CheckConfig;
use crate::error::LearningGraphError;

impl FromCommand for CheckConfig {
    fn from_command(command: Commands) -> Result<Self, LearningGraphError> {
        match command {
            Commands::Check {
                common,
                format,
                cycle_display,
                allow_cycles,
            } => CheckConfig::builder()
                .with_paths(common.get_paths())
                .with_pattern(common.pattern)
                .with_format(format.format)
                .with_max_cycles(cycle_display.max_cycles)
                .with_allow_cycles(allow_cycles)
                .build(),
            _ => Err(LearningGraphError::ConfigurationError {
                message: "Invalid command type for CheckConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(CheckConfig);

/// Execute the check command for detecting prerequisite cycles
pub fn execute_check_command(command: Commands) -> Result<()> {
    let config = CheckConfig::from_command(command)
        .wrap_err("Failed to parse check command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::check::CheckExecutor;
    CheckExecutor::execute(config)
}
