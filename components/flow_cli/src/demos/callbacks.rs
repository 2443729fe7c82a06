//! Callback conventions, failure propagation, and the boomerang.
//!
//! The error-first two-argument convention becomes a single continuation
//! taking a typed [`Completion`]: one match, no dual null-checks.

use crate::console::Console;
use crate::stream::SourceCatalog;
use deferred_runtime::Driver;
use flow_types::{Completion, Value};

/// Run the callbacks demonstration.
pub fn run(console: &Console) {
    // Not every callback is asynchronous: this one is plain control flow,
    // named for what it announces.
    check_numbers(|line| console.write_line(line));

    let driver = Driver::new();
    let catalog = SourceCatalog::with_demo_data();

    // Success path.
    let sink = console.clone();
    catalog.read_with(&driver, "demo.data", move |completion| match completion {
        Ok(length) => sink.write_line(&format!("Demo length: {}", length)),
        Err(reason) => sink.write_line(&format!("Demo error: {}", reason)),
    });

    // Unknown source: the same continuation shape reports the failure.
    let sink = console.clone();
    catalog.read_with(&driver, "demo.data2", move |completion| match completion {
        Ok(length) => sink.write_line(&format!("Demo length: {}", length)),
        Err(reason) => sink.write_line(&format!("Demo error: {}", reason)),
    });

    // Propagation: the helper hands failures to its caller untouched.
    let sink = console.clone();
    data_length(&driver, &catalog, "demo.data2", move |completion| {
        match completion {
            Ok(length) => sink.write_line(&format!("length via helper: {}", length)),
            Err(reason) => sink.write_line(&format!("helper propagated: {}", reason)),
        }
    });

    // The boomerang: nested reads drift rightward fast.
    let sink = console.clone();
    let inner_driver = driver.clone();
    let inner_catalog = SourceCatalog::with_demo_data();
    catalog.read_with(&driver, "demo.data", move |first| {
        if let Ok(Value::Int(a)) = first {
            inner_catalog.read_with(&inner_driver, "demo.data", move |second| {
                if let Ok(Value::Int(b)) = second {
                    sink.write_line(&format!("Finished: {}", a + b));
                }
            });
        }
    });

    driver.run_until_done();
}

fn check_numbers(mut on_number: impl FnMut(&str)) {
    let two = 2;
    let three = 3;
    if two == 2 {
        on_number("All is right. 2 is 2");
    }
    if three == 3 {
        on_number("Still right. 3 is in fact 3");
    }
}

/// Early-return propagation, continuation-style: a failure goes straight
/// to the caller's continuation and nothing else runs.
fn data_length<F>(driver: &Driver, catalog: &SourceCatalog, name: &str, continuation: F)
where
    F: FnOnce(Completion) + 'static,
{
    catalog.read_with(driver, name, move |completion| match completion {
        Err(reason) => continuation(Err(reason)),
        Ok(length) => continuation(Ok(length)),
    });
}
