//! flow-demos CLI
//!
//! Entry point for the demonstration runner. Parses CLI arguments and
//! delegates to the DemoRunner.

use clap::Parser as ClapParser;
use flow_cli::{Cli, CliError, DemoRunner};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let runner = DemoRunner::new();

    if cli.list {
        for (name, description) in DemoRunner::list() {
            println!("{:<12} {}", name, description);
        }
    } else if cli.all {
        runner.run_all();
    } else if let Some(name) = cli.demo {
        match runner.run(&name) {
            Ok(()) => {}
            Err(CliError::UnknownDemo(name)) => {
                eprintln!("Error: unknown demo '{}'", name);
                eprintln!("Run 'flow-demos --list' to see the available demos.");
                std::process::exit(1);
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        // Default: show usage
        println!("flow-demos v0.1.0");
        println!();
        println!("Usage:");
        println!("  flow-demos --demo <NAME>    Run a single demonstration");
        println!("  flow-demos --all            Run every demonstration");
        println!("  flow-demos --list           List the demonstrations");
        println!();
        println!("Run 'flow-demos --help' for more options.");
    }

    Ok(())
}
