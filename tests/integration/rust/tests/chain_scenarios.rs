//! Chain Scenario Integration Tests
//!
//! Builds the demonstration chains by hand against a capture console and
//! checks the observable transcript, crossing the runtime/CLI boundary the
//! way the demos do.

use deferred_runtime::{Driver, Handler, Outcome};
use flow_cli::Console;
use flow_types::Value;

fn output_logger(console: &Console) -> Handler {
    let sink = console.clone();
    Handler::new(move |value| {
        sink.write_line(&format!("Output {}", value));
        Ok(Outcome::Plain(Value::Undefined))
    })
}

fn error_logger(console: &Console) -> Handler {
    let sink = console.clone();
    Handler::new(move |reason| {
        sink.error_line(&reason.to_string());
        Ok(Outcome::Plain(Value::Undefined))
    })
}

/// Scenario: a thrown reason skips every later step; nothing is printed
/// and the driver holds the diagnostic.
#[test]
fn test_unhandled_rejection_skips_output() {
    let driver = Driver::new();
    let (console, lines) = Console::capture();

    let _ = driver
        .resolved(Value::Int(1))
        .chain(Some(Handler::new(|_| Ok(Outcome::Plain(Value::Int(2))))), None)
        .chain(Some(Handler::new(|_| Ok(Outcome::Plain(Value::Int(3))))), None)
        .chain(Some(Handler::new(|_| Err(Value::from("Foo")))), None)
        .chain(Some(output_logger(&console)), None);

    driver.run_until_done();

    assert!(lines.borrow().is_empty());
    let unhandled = driver.take_unhandled();
    assert_eq!(unhandled.len(), 1);
    assert_eq!(unhandled[0].value(), &Value::from("Foo"));
}

/// Scenario: a catch before the output step recovers; the transcript shows
/// the reason and then an `undefined` output.
#[test]
fn test_caught_rejection_prints_error_then_undefined() {
    let driver = Driver::new();
    let (console, lines) = Console::capture();

    let _ = driver
        .resolved(Value::Int(1))
        .chain(Some(Handler::new(|_| Ok(Outcome::Plain(Value::Int(2))))), None)
        .chain(Some(Handler::new(|_| Err(Value::from("Foo")))), None)
        .catch(error_logger(&console))
        .chain(Some(output_logger(&console)), None);

    driver.run_until_done();

    assert_eq!(*lines.borrow(), vec!["Error: Foo", "Output undefined"]);
    assert!(driver.take_unhandled().is_empty());
}

/// Scenario: the two-handler step recovers with its fallback arm.
#[test]
fn test_two_handler_fallback_prints_fallback() {
    let driver = Driver::new();
    let (console, lines) = Console::capture();

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
            Some(Handler::new(|_| Ok(Outcome::Plain(Value::Int(4))))),
            Some(Handler::new(|_| Ok(Outcome::Plain(Value::from("Fallback"))))),
        )
        .chain(Some(output_logger(&console)), None);

    driver.run_until_done();

    assert_eq!(*lines.borrow(), vec!["Output Fallback"]);
    assert!(driver.take_unhandled().is_empty());
}

/// A recovery upstream means a later two-handler step never fires its
/// rejection arm.
#[test]
fn test_recovered_chain_feeds_fulfillment_arm() {
    let driver = Driver::new();
    let (console, lines) = Console::capture();

    let sink = console.clone();
    let _ = driver
        .rejected(Value::from("Foo"))
        .catch(Handler::new(|_| Ok(Outcome::Plain(Value::from("patched")))))
        .chain(
            Some(Handler::new(move |value| {
                sink.write_line(&format!("saw {}", value));
                Ok(Outcome::Plain(Value::Undefined))
            })),
            Some(error_logger(&console)),
        );

    driver.run_until_done();

    assert_eq!(*lines.borrow(), vec!["saw patched"]);
    assert!(driver.take_unhandled().is_empty());
}
