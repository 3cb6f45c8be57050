use miette::Result;

/// Main entry point for the learning-graph-check CLI tool
fn main() -> Result<()> {
    // Install miette's panic and error handler for readable error reporting
    miette::set_panic_hook();

    learning_graph_check::run()
}
