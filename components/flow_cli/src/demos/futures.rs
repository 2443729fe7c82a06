//! Deferred values: wrapping, deriving, delays, eagerness, rejection.
//!
//! The point of the exercise: a value already in hand and a value arriving
//! in a second are observed the same way, taking time out of the equation.

use crate::console::Console;
use deferred_runtime::{Driver, Handler, Outcome};
use flow_types::Value;
use std::time::Duration;

/// Run the futures demonstration.
pub fn run(console: &Console) {
    let driver = Driver::new();

    // Wrapping a value that is already here.
    let wrapped = driver.resolved(Value::Int(42));
    let _ = wrapped.chain(Some(log_at(console, &driver)), None);

    // A second deferred derived from the first.
    let doubled = wrapped.chain(Some(double()), None);
    let _ = doubled.chain(Some(log_at(console, &driver)), None);

    // The same value, arriving later through the timer capability.
    let delayed = driver.pending(|settle| {
        let settle = settle.clone();
        driver.schedule_after(Duration::from_millis(1000), move || {
            settle.resolve(Value::Int(42));
        });
        Ok(())
    });
    let _ = delayed.chain(Some(log_at(console, &driver)), None);

    // Deferred values are eager: the producer runs and settles whether or
    // not anyone is listening.
    let announcer = console.clone();
    let eager = driver.pending(|settle| {
        let settle = settle.clone();
        driver.schedule_after(Duration::from_millis(1000), move || {
            settle.resolve(Value::Int(42));
            announcer.write_line("value has been created");
        });
        Ok(())
    });
    let sink = console.clone();
    let clock = driver.clone();
    driver.schedule_after(Duration::from_millis(1500), move || {
        let _ = eager.chain(
            Some(Handler::new(move |value| {
                sink.write_line(&format!("{} (at {}ms)", value, clock.now().as_millis()));
                Ok(Outcome::Plain(Value::Undefined))
            })),
            None,
        );
    });

    // Chains stack delays: the adopted deferred adds its own second.
    let chain_driver = driver.clone();
    let _ = delayed
        .chain(Some(double()), None)
        .chain(
            Some(Handler::new(move |value| {
                let n = match value {
                    Value::Int(n) => n,
                    _ => 0,
                };
                let adopted = chain_driver.pending(|settle| {
                    let settle = settle.clone();
                    chain_driver.schedule_after(Duration::from_millis(1000), move || {
                        settle.resolve(Value::Int(n + 42));
                    });
                    Ok(())
                });
                Ok(Outcome::Adopt(adopted))
            })),
            None,
        )
        .chain(Some(log_at(console, &driver)), None);

    // Failure is a rejection observed through catch, not an exception.
    let failure_sink = console.clone();
    let _ = driver
        .rejected(Value::from("Not working"))
        .catch(Handler::new(move |reason| {
            failure_sink.error_line(&reason.to_string());
            Ok(Outcome::Plain(Value::Undefined))
        }));

    // And rejection can arrive late, too.
    let late = driver.pending(|settle| {
        let settle = settle.clone();
        driver.schedule_after(Duration::from_millis(1000), move || {
            settle.reject(Value::Int(42));
        });
        Ok(())
    });
    let late_sink = console.clone();
    let _ = late.catch(Handler::new(move |reason| {
        late_sink.error_line(&reason.to_string());
        Ok(Outcome::Plain(Value::Undefined))
    }));

    driver.run_until_done();
}

/// Handler printing the value with the virtual-clock reading.
fn log_at(console: &Console, driver: &Driver) -> Handler {
    let sink = console.clone();
    let clock = driver.clone();
    Handler::new(move |value| {
        sink.write_line(&format!("{} (at {}ms)", value, clock.now().as_millis()));
        Ok(Outcome::Plain(Value::Undefined))
    })
}

/// Handler doubling an integer, passing anything else through.
fn double() -> Handler {
    Handler::new(|value| match value {
        Value::Int(n) => Ok(Outcome::Plain(Value::Int(n * 2))),
        other => Ok(Outcome::Plain(other)),
    })
}
