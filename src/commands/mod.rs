//! Command implementations for the learning-graph-check CLI
//!
//! This module contains the implementations for each CLI command:
//! - check: Check learning graphs for prerequisite cycles
//! - spotlight: Show only the cycles through one topic
//! - render: Draw a learning graph with its cycles highlighted

pub mod check;
pub mod render;
pub mod spotlight;

use miette::Result;

use crate::cli::Commands;

/// Execute a command based on CLI input
pub fn execute_command(command: Commands) -> Result<()> {
    match &command {
        Commands::Check { .. } => check::execute_check_command(command),
        Commands::Spotlight { .. } => spotlight::execute_spotlight_command(command),
        Commands::Render { .. } => render::execute_render_command(command),
    }
}
