//! Check command executor

use console::style;
use miette::{Result, WrapErr};

use super::{analyze_paths, generate_report, warn_empty_graphs};
use crate::config::CheckConfig;
use crate::executors::CommandExecutor;
use crate::progress::ProgressReporter;

pub struct CheckExecutor;

impl CommandExecutor for CheckExecutor {
    type Config = CheckConfig;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!(
            "{} Checking learning graphs for prerequisite cycles...\n",
            style("📚").cyan()
        );

        let mut progress = ProgressReporter::for_terminal();
        let analyzer = analyze_paths(&config.paths, &config.pattern, progress.as_mut())?;

        if analyzer.checks().is_empty() {
            eprintln!(
                "{} No learning graphs matching '{}' found",
                style("ℹ").blue(),
                style(&config.pattern).bold()
            );
            return Ok(());
        }

        warn_empty_graphs(config.format, analyzer.checks());

        let report = generate_report(config.format, config.max_cycles, analyzer.checks())
            .wrap_err("Failed to generate report")?;
        print!("{report}");

        if analyzer.has_cycles() && !config.allow_cycles {
            std::process::exit(1);
        }

        Ok(())
    }
}
