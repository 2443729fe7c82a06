//! Command line interface definition

use clap::Parser;

/// Demonstrations of asynchronous control flow on a deterministic driver
#[derive(Parser, Debug)]
#[command(name = "flow-demos", version, about)]
pub struct Cli {
    /// Run a single demonstration by name
    #[arg(long)]
    pub demo: Option<String>,

    /// Run every demonstration in order
    #[arg(long)]
    pub all: bool,

    /// List the available demonstrations
    #[arg(long)]
    pub list: bool,
}
