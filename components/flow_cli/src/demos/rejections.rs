//! How rejections travel, recover, and get reported.
//!
//! The central invariant on display: once a rejection handler completes
//! normally, the chain is recovered. Later steps see its result, never
//! the original reason. And a rejection handler in a two-handler step only
//! answers for its own parent.

use crate::console::Console;
use deferred_runtime::{Driver, Handler, Outcome};
use flow_types::Value;

/// Run the rejections demonstration.
pub fn run(console: &Console) {
    let driver = Driver::new();

    // A failure with no handler anywhere: every later step is skipped and
    // the reason surfaces as a diagnostic, not a crash.
    console.write_line("-- no handler in sight --");
    let _ = driver
        .resolved(Value::Int(1))
        .chain(Some(step(Value::Int(2))), None)
        .chain(Some(step(Value::Int(3))), None)
        .chain(Some(step(Value::Int(4))), None)
        .chain(Some(Handler::new(|_| Err(Value::from("Foo")))), None)
        .chain(Some(log_output(console)), None);
    driver.drain();
    report_unhandled(console, &driver);

    // The same chain with a catch: the error handler sees the reason and
    // the output handler then runs with nothing, since the catch returned
    // nothing.
    console.write_line("-- catching --");
    let _ = driver
        .resolved(Value::Int(1))
        .chain(Some(step(Value::Int(2))), None)
        .chain(Some(step(Value::Int(3))), None)
        .chain(Some(step(Value::Int(4))), None)
        .chain(Some(Handler::new(|_| Err(Value::from("Foo")))), None)
        .catch(log_error(console))
        .chain(Some(log_output(console)), None);
    driver.drain();
    report_unhandled(console, &driver);

    // A catch that returns a value recovers the chain with that value.
    console.write_line("-- recovering with a value --");
    let recovery_sink = console.clone();
    let _ = driver
        .resolved(Value::Int(1))
        .chain(Some(Handler::new(|_| Err(Value::from("Foo")))), None)
        .catch(Handler::new(move |reason| {
            recovery_sink.error_line(&reason.to_string());
            Ok(Outcome::Plain(Value::from("Error returned")))
        }))
        .chain(Some(log_output(console)), None);
    driver.drain();
    report_unhandled(console, &driver);

    // Two handlers in one step: the rejection arm answers for the parent's
    // failure and feeds the next step its fallback.
    console.write_line("-- two-handler fallback --");
    let adopt_driver = driver.clone();
    let _ = driver
        .resolved(Value::Int(1))
        .chain(
            Some(Handler::new(move |_| {
                Ok(Outcome::Adopt(adopt_driver.rejected(Value::from("Crash"))))
            })),
            None,
        )
        .chain(
            Some(step(Value::Int(4))),
            Some(step(Value::from("Fallback"))),
        )
        .chain(Some(log_output(console)), None);
    driver.drain();
    report_unhandled(console, &driver);
}

/// Handler producing a fixed next value, whatever it was given.
fn step(next: Value) -> Handler {
    Handler::new(move |_| Ok(Outcome::Plain(next.clone())))
}

/// The output logger: prints `Output <value>` and produces nothing.
fn log_output(console: &Console) -> Handler {
    let sink = console.clone();
    Handler::new(move |value| {
        sink.write_line(&format!("Output {}", value));
        Ok(Outcome::Plain(Value::Undefined))
    })
}

/// The error logger: prints the reason and produces nothing.
fn log_error(console: &Console) -> Handler {
    let sink = console.clone();
    Handler::new(move |reason| {
        sink.error_line(&reason.to_string());
        Ok(Outcome::Plain(Value::Undefined))
    })
}

fn report_unhandled(console: &Console, driver: &Driver) {
    for reason in driver.take_unhandled() {
        console.write_line(&format!("Unhandled rejection: {}", reason));
    }
}
