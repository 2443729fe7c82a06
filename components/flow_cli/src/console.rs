//! Console sink for demo output.
//!
//! The demos never print directly; they write through a [`Console`] so
//! tests can capture the exact lines and their order.

use std::cell::RefCell;
use std::rc::Rc;

/// Console output writer trait
pub trait ConsoleWriter {
    /// Write a line to the console output
    fn write(&self, line: &str);
}

/// Default console writer that prints to stdout
struct StdoutWriter;

impl ConsoleWriter for StdoutWriter {
    fn write(&self, line: &str) {
        println!("{}", line);
    }
}

/// Writer that only records into the shared capture buffer
struct CaptureWriter;

impl ConsoleWriter for CaptureWriter {
    fn write(&self, _line: &str) {}
}

/// The line-oriented console sink the demos write through.
///
/// Every line also lands in a shared capture buffer, so a test can run a
/// demo and assert on the transcript.
#[derive(Clone)]
pub struct Console {
    lines: Rc<RefCell<Vec<String>>>,
    writer: Rc<dyn ConsoleWriter>,
}

impl Console {
    /// Create a console that prints to stdout
    pub fn new() -> Self {
        Console {
            lines: Rc::new(RefCell::new(Vec::new())),
            writer: Rc::new(StdoutWriter),
        }
    }

    /// Create a silent console plus a handle to its captured lines
    pub fn capture() -> (Self, Rc<RefCell<Vec<String>>>) {
        let lines = Rc::new(RefCell::new(Vec::new()));
        let console = Console {
            lines: lines.clone(),
            writer: Rc::new(CaptureWriter),
        };
        (console, lines)
    }

    /// Write one line of output
    pub fn write_line(&self, line: &str) {
        self.lines.borrow_mut().push(line.to_string());
        self.writer.write(line);
    }

    /// Write one error line, prefixed `Error:`
    pub fn error_line(&self, line: &str) {
        let line = format!("Error: {}", line);
        self.lines.borrow_mut().push(line.clone());
        self.writer.write(&line);
    }

    /// Snapshot of every line written so far
    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}
