//! Render command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::RenderConfig;
use crate::error::LearningGraphError;

impl FromCommand for RenderConfig {
    fn from_command(command: Commands) -> Result<Self, LearningGraphError> {
        match command {
            Commands::Render {
                file,
                format,
                output,
                highlight_cycles,
                show_ids,
            } => RenderConfig::builder()
                .with_file(file)
                .with_format(format)
                .with_output(output)
                .with_highlight_cycles(highlight_cycles)
                .with_show_ids(show_ids)
                .build(),
            _ => Err(LearningGraphError::ConfigurationError {
                message: "Invalid command type for RenderConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(RenderConfig);

/// Execute the render command for drawing a learning graph
pub fn execute_render_command(command: Commands) -> Result<()> {
    let config = RenderConfig::from_command(command)
        .wrap_err("Failed to parse render command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::render::RenderExecutor;
    RenderExecutor::execute(config)
}
