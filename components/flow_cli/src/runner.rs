//! Demo orchestration.

use crate::console::Console;
use crate::demos;
use crate::error::{CliError, CliResult};

type DemoFn = fn(&Console);

const DEMOS: &[(&str, &str, DemoFn)] = &[
    (
        "blocking",
        "a busy loop blocks everything; queued work waits its turn",
        demos::blocking::run,
    ),
    (
        "callbacks",
        "typed completions instead of the error-first convention",
        demos::callbacks::run,
    ),
    (
        "futures",
        "deferred values: wrapping, deriving, delays, rejection",
        demos::futures::run,
    ),
    (
        "rejections",
        "how rejections travel, recover, and get reported",
        demos::rejections::run,
    ),
];

/// Runs demonstrations against one console sink.
///
/// # Example
/// ```
/// use flow_cli::{Console, DemoRunner};
///
/// let (console, lines) = Console::capture();
/// let runner = DemoRunner::with_console(console);
/// runner.run("rejections").unwrap();
/// assert!(!lines.borrow().is_empty());
/// ```
pub struct DemoRunner {
    console: Console,
}

impl DemoRunner {
    /// A runner printing to stdout.
    pub fn new() -> Self {
        Self {
            console: Console::new(),
        }
    }

    /// A runner writing through the given console.
    pub fn with_console(console: Console) -> Self {
        Self { console }
    }

    /// Names and descriptions of the available demos, in run order.
    pub fn list() -> Vec<(&'static str, &'static str)> {
        DEMOS
            .iter()
            .map(|(name, description, _)| (*name, *description))
            .collect()
    }

    /// Runs one demo by name.
    ///
    /// # Errors
    /// Returns `CliError::UnknownDemo` if no demo has that name.
    pub fn run(&self, name: &str) -> CliResult<()> {
        let (_, _, demo) = DEMOS
            .iter()
            .find(|(known, _, _)| *known == name)
            .ok_or_else(|| CliError::UnknownDemo(name.to_string()))?;
        demo(&self.console);
        Ok(())
    }

    /// Runs every demo in order, with a banner line between them.
    pub fn run_all(&self) {
        for (name, _, demo) in DEMOS {
            self.console.write_line(&format!("=== {} ===", name));
            demo(&self.console);
        }
    }

    /// The console this runner writes through.
    pub fn console(&self) -> &Console {
        &self.console
    }
}

impl Default for DemoRunner {
    fn default() -> Self {
        Self::new()
    }
}
