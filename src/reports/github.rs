//! GitHub Actions format report generation

use std::fmt::Write;

use super::{ReportGenerator, cycle_labels};
use crate::analyzer::{GraphCheck, GraphStatus};
use crate::error::LearningGraphError;
use crate::utils::string::{count_of, join_closed};

pub struct GitHubReportGenerator;

impl Default for GitHubReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl GitHubReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

/// Escape the message part of a workflow command
fn escape_data(text: &str) -> String {
    text.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Escape a `key=value` property of a workflow command
fn escape_property(text: &str) -> String {
    escape_data(text).replace(':', "%3A").replace(',', "%2C")
}

impl ReportGenerator for GitHubReportGenerator {
    fn generate_report(&self, checks: &[GraphCheck]) -> Result<String, LearningGraphError> {
        let mut output = String::new();

        for check in checks {
            let file = escape_property(&check.source().display().to_string());

            match check.status() {
                GraphStatus::Empty => {
                    writeln!(
                        output,
                        "::warning file={file},title=Empty Learning Graph::No nodes found in the graph"
                    )?;
                }
                GraphStatus::Clean => {}
                GraphStatus::Cyclic => {
                    let detector = check.detector();
                    writeln!(
                        output,
                        "::error file={file},title=Prerequisite Cycles::Found {}",
                        count_of(detector.cycle_count(), "prerequisite cycle")
                    )?;
                    for (i, cycle) in detector.cycles().iter().enumerate() {
                        let path = join_closed(&cycle_labels(check.graph(), cycle), " → ");
                        writeln!(
                            output,
                            "::error file={file},title=Cycle {}::{}",
                            i + 1,
                            escape_data(&path)
                        )?;
                    }
                }
            }
        }

        if checks.iter().any(|c| c.detector().has_cycles()) {
            writeln!(
                output,
                "::notice title=Recommendation::Remove at least one prerequisite edge from each \
                 cycle to restore a valid learning order."
            )?;
        } else {
            writeln!(
                output,
                "::notice title=Learning Graph Check::No prerequisite cycles detected! ✅"
            )?;
        }

        Ok(output)
    }
}
