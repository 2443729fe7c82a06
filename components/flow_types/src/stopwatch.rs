//! Explicit stopwatch values for the blocking demonstrations.

use std::time::{Duration, Instant};

/// A labelled stopwatch the caller starts, carries, and reports.
///
/// There is no hidden registry of named timers: whoever wants a timing
/// holds the stopwatch value and asks it for the report line.
///
/// # Examples
///
/// ```
/// use flow_types::Stopwatch;
///
/// let watch = Stopwatch::start("busy loop");
/// let line = watch.report();
/// assert!(line.starts_with("busy loop: "));
/// assert!(line.ends_with("ms"));
/// ```
#[derive(Debug, Clone)]
pub struct Stopwatch {
    label: String,
    started: Instant,
}

impl Stopwatch {
    /// Starts a stopwatch now, under the given label.
    pub fn start(label: &str) -> Self {
        Self {
            label: label.to_string(),
            started: Instant::now(),
        }
    }

    /// The label this stopwatch was started under.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Wall time since the stopwatch was started.
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// The console line for this timing: `label: Nms`.
    pub fn report(&self) -> String {
        format!("{}: {}ms", self.label, self.elapsed().as_millis())
    }
}
