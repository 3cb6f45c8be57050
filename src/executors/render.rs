//! Render command executor

use std::fs::File;
use std::io::{self, BufWriter, Write};

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};

use crate::cli::GraphFormat;
use crate::config::RenderConfig;
use crate::detector::detect_cycles;
use crate::executors::CommandExecutor;
use crate::graph::GraphRenderer;
use crate::loader::load_graph;

pub struct RenderExecutor;

impl CommandExecutor for RenderExecutor {
    type Config = RenderConfig;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!(
            "{} Rendering {} learning graph...",
            style("📊").cyan(),
            format!("{:?}", config.format).to_lowercase()
        );

        let graph = load_graph(&config.file).wrap_err("Failed to load learning graph")?;

        let cycles = if config.highlight_cycles {
            detect_cycles(&graph)
        } else {
            Vec::new()
        };

        let renderer = GraphRenderer::new(config.highlight_cycles, config.show_ids);

        let mut output_writer: Box<dyn Write> = if let Some(output_path) = config.output.as_ref()
        {
            Box::new(BufWriter::new(
                File::create(output_path)
                    .into_diagnostic()
                    .wrap_err_with(|| {
                        format!("Failed to create output file '{}'", output_path.display())
                    })?,
            ))
        } else {
            Box::new(io::stdout())
        };

        match config.format {
            GraphFormat::Ascii => renderer
                .render_ascii(&graph, &cycles, output_writer.as_mut())
                .wrap_err("Failed to render ASCII graph")?,
            GraphFormat::Mermaid => renderer
                .render_mermaid(&graph, &cycles, output_writer.as_mut())
                .wrap_err("Failed to render Mermaid graph")?,
            GraphFormat::Dot => renderer
                .render_dot(&graph, &cycles, output_writer.as_mut())
                .wrap_err("Failed to render DOT graph")?,
        }

        output_writer
            .flush()
            .into_diagnostic()
            .wrap_err("Failed to write graph output")?;

        if let Some(output_path) = config.output {
            eprintln!(
                "{} Graph written to {}",
                style("✓").green(),
                style(output_path.display()).bold()
            );
        }

        Ok(())
    }
}
