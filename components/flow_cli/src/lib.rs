//! Demo CLI library for the deferred-value runtime.
//!
//! Provides the DemoRunner, console sink, simulated byte-stream sources,
//! and the demonstration scenarios behind the `flow-demos` binary.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod console;
pub mod demos;
pub mod error;
pub mod runner;
pub mod stream;

pub use cli::Cli;
pub use console::{Console, ConsoleWriter};
pub use error::{CliError, CliResult};
pub use runner::DemoRunner;
pub use stream::{DataSource, SourceCatalog};
