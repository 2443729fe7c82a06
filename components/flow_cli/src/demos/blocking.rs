//! Blocking versus queued work.
//!
//! One logical thread: while a synchronous loop spins, nothing else runs.
//! Queued work waits for the current block to finish, however early it was
//! requested.

use crate::console::Console;
use crate::stream::SourceCatalog;
use deferred_runtime::{Driver, ReadyJob};
use flow_types::Stopwatch;

/// Run the blocking demonstration.
pub fn run(console: &Console) {
    // The stopwatch travels with the caller; nobody keeps a label registry.
    let watch = Stopwatch::start("busy loop");
    let mut total: u64 = 0;
    for i in 0..20_000_000u64 {
        total = total.wrapping_add(i);
    }
    console.write_line(&watch.report());
    console.write_line(&format!("total: {}", total));

    let driver = Driver::new();
    let catalog = SourceCatalog::with_demo_data();

    // Requesting the read costs nothing here; its completion is delivered
    // through the timer queue later.
    let sink = console.clone();
    catalog.read_with(&driver, "demo.data", move |completion| match completion {
        Ok(length) => sink.write_line(&format!("read finished, {} bytes", length)),
        Err(reason) => sink.error_line(&reason.to_string()),
    });

    // Ready jobs run after the current block but ahead of every timer.
    let sink = console.clone();
    driver.enqueue_ready(ReadyJob::new(move || {
        sink.write_line("queued: runs before any timer");
    }));

    console.write_line("read requested, still running");
    console.write_line("end of the synchronous block");

    driver.run_until_done();
}
