//! Spotlight command executor

use console::style;
use miette::{Result, WrapErr};

use super::{analyze_paths, generate_report};
use crate::analyzer::GraphCheck;
use crate::config::SpotlightConfig;
use crate::error::LearningGraphError;
use crate::executors::CommandExecutor;
use crate::progress::ProgressReporter;
use crate::utils::string::count_of;

pub struct SpotlightExecutor;

impl CommandExecutor for SpotlightExecutor {
    type Config = SpotlightConfig;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!(
            "{} Looking for cycles through topic '{}'...\n",
            style("🔍").cyan(),
            style(&config.topic).bold()
        );

        let mut progress = ProgressReporter::for_terminal();
        let analyzer = analyze_paths(&config.paths, &config.pattern, progress.as_mut())?;

        // Only graphs that declare the topic take part in the report
        let focused: Vec<GraphCheck> = analyzer
            .checks()
            .iter()
            .filter_map(|check| {
                let node = check.graph().find_topic(&config.topic)?;
                Some(check.focused_on(node.id()))
            })
            .collect();

        if focused.is_empty() {
            return Err(LearningGraphError::TopicNotFound {
                topic: config.topic,
            }
            .into());
        }

        let cycle_count: usize = focused.iter().map(|c| c.detector().cycle_count()).sum();
        if cycle_count == 0 {
            eprintln!(
                "{} No cycles found involving topic '{}'",
                style("✓").green(),
                style(&config.topic).bold()
            );
        } else {
            eprintln!(
                "{} Found {} involving '{}'",
                style("⚠").yellow(),
                count_of(cycle_count, "cycle"),
                style(&config.topic).bold()
            );
        }

        let report = generate_report(config.format, config.max_cycles, &focused)
            .wrap_err("Failed to generate report for topic spotlight")?;
        print!("{report}");

        Ok(())
    }
}
