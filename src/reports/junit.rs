//! JUnit XML format report generation

use std::fmt::Write;

use super::{ReportGenerator, cycle_labels};
use crate::analyzer::{GraphCheck, GraphStatus};
use crate::error::LearningGraphError;
use crate::utils::string::{count_of, join_closed};

pub struct JunitReportGenerator;

impl Default for JunitReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl JunitReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

impl ReportGenerator for JunitReportGenerator {
    fn generate_report(&self, checks: &[GraphCheck]) -> Result<String, LearningGraphError> {
        let mut output = String::new();
        let failures = checks
            .iter()
            .filter(|c| c.status() == GraphStatus::Cyclic)
            .count();

        writeln!(output, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
        writeln!(
            output,
            r#"<testsuites name="learning-graph-check" tests="{}" failures="{failures}">"#,
            checks.len()
        )?;
        writeln!(
            output,
            r#"  <testsuite name="learning-graph-cycles" tests="{}" failures="{failures}">"#,
            checks.len()
        )?;

        for check in checks {
            let name = escape_xml(&check.source().display().to_string());

            match check.status() {
                GraphStatus::Cyclic => {
                    let detector = check.detector();
                    writeln!(
                        output,
                        r#"    <testcase name="{name}" classname="learning-graph">"#
                    )?;
                    writeln!(
                        output,
                        r#"      <failure message="Prerequisite cycles detected">"#
                    )?;
                    writeln!(
                        output,
                        "Found {}:",
                        count_of(detector.cycle_count(), "prerequisite cycle")
                    )?;
                    for (i, cycle) in detector.cycles().iter().enumerate() {
                        let path = join_closed(&cycle_labels(check.graph(), cycle), " → ");
                        writeln!(output, "\nCycle {}: {}", i + 1, escape_xml(&path))?;
                    }
                    writeln!(output, r#"      </failure>"#)?;
                    writeln!(output, r#"    </testcase>"#)?;
                }
                GraphStatus::Empty => {
                    writeln!(
                        output,
                        r#"    <testcase name="{name}" classname="learning-graph">"#
                    )?;
                    writeln!(
                        output,
                        r#"      <system-out>No nodes found in the graph</system-out>"#
                    )?;
                    writeln!(output, r#"    </testcase>"#)?;
                }
                GraphStatus::Clean => {
                    writeln!(
                        output,
                        r#"    <testcase name="{name}" classname="learning-graph" />"#
                    )?;
                }
            }
        }

        writeln!(output, r#"  </testsuite>"#)?;
        writeln!(output, r#"</testsuites>"#)?;

        Ok(output)
    }
}
