//! Human-readable console report generation

use std::fmt::Write;

use console::style;

use super::{ReportGenerator, cycle_labels};
use crate::analyzer::{GraphCheck, GraphStatus};
use crate::error::LearningGraphError;
use crate::utils::string::{count_of, join_closed};

pub struct HumanReportGenerator {
    max_cycles: Option<usize>,
}

impl HumanReportGenerator {
    pub fn new(max_cycles: Option<usize>) -> Self {
        Self { max_cycles }
    }

    fn write_cycles(
        &self,
        output: &mut String,
        check: &GraphCheck,
    ) -> Result<(), LearningGraphError> {
        let graph = check.graph();
        let detector = check.detector();
        let total_cycles = detector.cycle_count();

        write!(
            output,
            "\n{} Found {} in '{}':\n\n",
            style("❌").red().bold(),
            style(count_of(total_cycles, "cycle")).red().bold(),
            check.source().display()
        )?;

        let limit = self.max_cycles.unwrap_or(total_cycles);
        for (i, cycle) in detector.cycles().iter().take(limit).enumerate() {
            writeln!(output, "{} Cycle #{}", style("🔄").yellow(), i + 1)?;
            writeln!(output, "  {} Topics involved:", style("📚").blue())?;
            for id in cycle.nodes() {
                writeln!(
                    output,
                    "    {} {}: {}",
                    style("•").dim(),
                    id,
                    style(graph.display_label(id)).bold()
                )?;
            }
            writeln!(
                output,
                "  {} Path: {}\n",
                style("🔗").cyan(),
                join_closed(&cycle_labels(graph, cycle), " → ")
            )?;
        }

        if limit < total_cycles {
            writeln!(
                output,
                "{} Showing {} of {} cycles. Use --max-cycles to see more.",
                style("ℹ️").blue(),
                style(limit).yellow(),
                style(total_cycles).yellow()
            )?;
        }

        let tangles = check.tangles().len();
        if tangles > 0 {
            writeln!(
                output,
                "{} These cycles form {} of mutually dependent topics.",
                style("🧶").magenta(),
                count_of(tangles, "tangle")
            )?;
        }

        Ok(())
    }
}

impl ReportGenerator for HumanReportGenerator {
    fn generate_report(&self, checks: &[GraphCheck]) -> Result<String, LearningGraphError> {
        let mut output = String::new();

        if checks.is_empty() {
            writeln!(output, "\n{} No learning graphs to check.", style("ℹ").blue())?;
            return Ok(output);
        }

        for check in checks {
            match check.status() {
                GraphStatus::Empty => {
                    writeln!(
                        output,
                        "\n{} Warning: No nodes found in the graph '{}'.",
                        style("⚠").yellow().bold(),
                        check.source().display()
                    )?;
                }
                GraphStatus::Clean => {
                    writeln!(
                        output,
                        "\n{} No cycles found in '{}'.",
                        style("✅").green().bold(),
                        check.source().display()
                    )?;
                }
                GraphStatus::Cyclic => self.write_cycles(&mut output, check)?,
            }
        }

        let cyclic = checks
            .iter()
            .filter(|c| c.status() == GraphStatus::Cyclic)
            .count();
        if cyclic > 0 {
            writeln!(
                output,
                "\n{} To restore a valid learning order, remove at least one prerequisite edge \
                 from each cycle.",
                style("💡").yellow()
            )?;
            writeln!(
                output,
                "{} Topics listed in several cycles are usually the best place to start.",
                style("💡").yellow()
            )?;
        }

        if checks.len() > 1 {
            writeln!(
                output,
                "\n{} Checked {}, {} with cycles.",
                style("📊").blue(),
                count_of(checks.len(), "learning graph"),
                cyclic
            )?;
        }

        Ok(output)
    }
}
