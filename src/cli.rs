use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use crate::common::{CommonArgs, CycleDisplayArgs, FormatArgs};

#[derive(Parser)]
#[command(
    name = "learning-graph-check",
    about = "📚 Detect prerequisite cycles in learning graphs",
    long_about = "learning-graph-check reads vis-network style learning graph JSON files \
                  (topics as nodes, prerequisites as edges) and reports every circular \
                  prerequisite chain. A learning graph with a cycle has no valid order in \
                  which to teach its topics.",
    subcommand_required = true,
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check learning graphs for prerequisite cycles
    ///
    /// Every file given is checked; directories are searched for files
    /// named like the pattern. Exits with status 1 when a cycle is found.
    #[command(
        long_about = "Check learning graphs for circular prerequisites. Each graph is walked \
                      depth-first and every edge that points back to a topic on the current \
                      path is reported as one cycle. Edges to undeclared topics are ignored. A \
                      graph without topics only produces a warning."
    )]
    Check {
        #[command(flatten)]
        common: CommonArgs,

        #[command(flatten)]
        format: FormatArgs,

        #[command(flatten)]
        cycle_display: CycleDisplayArgs,

        /// Exit successfully even when cycles are found
        #[arg(long, env = "LEARNING_GRAPH_ALLOW_CYCLES")]
        allow_cycles: bool,
    },

    /// Show only the cycles that pass through one topic
    ///
    /// The topic is matched by node id first, then by label.
    #[command(
        long_about = "Focus the cycle report on a single topic. Only cycles containing the topic \
                      are listed, which helps when deciding which prerequisite edge of a busy \
                      topic to remove. The topic must exist in at least one of the graphs."
    )]
    Spotlight {
        /// Node id or label of the topic
        #[arg(value_name = "TOPIC", env = "LEARNING_GRAPH_TOPIC")]
        topic: String,

        #[command(flatten)]
        common: CommonArgs,

        #[command(flatten)]
        format: FormatArgs,

        #[command(flatten)]
        cycle_display: CycleDisplayArgs,
    },

    /// Draw a learning graph with its cycles highlighted
    #[command(
        long_about = "Render one learning graph as ASCII, a Mermaid flowchart or a Graphviz DOT \
                      file. Topics and prerequisite edges that take part in a cycle are \
                      highlighted unless --highlight-cycles false is given."
    )]
    Render {
        /// Learning graph JSON file
        #[arg(value_name = "FILE", env = "LEARNING_GRAPH_FILE")]
        file: PathBuf,

        /// Graph format
        #[arg(
            short,
            long,
            value_enum,
            default_value = crate::constants::output::DEFAULT_GRAPH_FORMAT,
            env = "LEARNING_GRAPH_GRAPH_FORMAT"
        )]
        format: GraphFormat,

        /// Output file (stdout if not specified)
        #[arg(short, long, env = "LEARNING_GRAPH_OUTPUT")]
        output: Option<PathBuf>,

        /// Highlight cycles in the graph
        #[arg(
            long,
            default_value_t = true,
            action = ArgAction::Set,
            env = "LEARNING_GRAPH_HIGHLIGHT_CYCLES"
        )]
        highlight_cycles: bool,

        /// Show node ids next to labels
        #[arg(long, env = "LEARNING_GRAPH_SHOW_IDS")]
        show_ids: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
    Junit,
    #[value(name = "github")]
    GitHub,
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum GraphFormat {
    Ascii,
    Mermaid,
    Dot,
}
