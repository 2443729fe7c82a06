//! Unit tests for Driver

use deferred_runtime::{DeferredState, Driver, Handler, Outcome, ReadyJob};
use flow_types::Value;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

#[test]
fn new_driver_has_empty_queues() {
    let driver = Driver::new();
    assert!(driver.is_ready_queue_empty());
    assert!(driver.is_timer_queue_empty());
}

#[test]
fn enqueue_ready_fills_ready_queue() {
    let driver = Driver::new();
    driver.enqueue_ready(ReadyJob::new(|| {}));
    assert!(!driver.is_ready_queue_empty());
}

#[test]
fn schedule_after_fills_timer_queue() {
    let driver = Driver::new();
    driver.schedule_after(Duration::from_millis(5), || {});
    assert!(!driver.is_timer_queue_empty());
}

#[test]
fn drain_reports_executed_job_count() {
    let driver = Driver::new();
    for _ in 0..3 {
        driver.enqueue_ready(ReadyJob::new(|| {}));
    }
    assert_eq!(driver.drain(), 3);
}

#[test]
fn drain_leaves_timers_untouched() {
    let driver = Driver::new();
    driver.schedule_after(Duration::from_millis(5), || {});
    driver.drain();
    assert!(!driver.is_timer_queue_empty());
}

#[test]
fn queued_work_runs_after_current_synchronous_block() {
    let driver = Driver::new();
    let order = Rc::new(RefCell::new(Vec::new()));

    let o = order.clone();
    driver.enqueue_ready(ReadyJob::new(move || o.borrow_mut().push("queued")));
    order.borrow_mut().push("synchronous");

    driver.drain();
    assert_eq!(*order.borrow(), vec!["synchronous", "queued"]);
}

#[test]
fn timers_fire_by_relative_delay_not_schedule_order() {
    let driver = Driver::new();
    let order = Rc::new(RefCell::new(Vec::new()));

    let o = order.clone();
    driver.schedule_after(Duration::from_millis(1500), move || {
        o.borrow_mut().push("slow");
    });
    let o = order.clone();
    driver.schedule_after(Duration::from_millis(1000), move || {
        o.borrow_mut().push("fast");
    });

    driver.run_until_done();
    assert_eq!(*order.borrow(), vec!["fast", "slow"]);
}

#[test]
fn continuations_of_timer_settlement_run_before_next_timer() {
    let driver = Driver::new();
    let order = Rc::new(RefCell::new(Vec::new()));

    let settled = driver.pending(|settle| {
        let settle = settle.clone();
        driver.schedule_after(Duration::from_millis(100), move || {
            settle.resolve(Value::Int(1));
        });
        Ok(())
    });

    let o = order.clone();
    let _ = settled.chain(
        Some(Handler::new(move |_| {
            o.borrow_mut().push("continuation");
            Ok(Outcome::Plain(Value::Undefined))
        })),
        None,
    );

    let o = order.clone();
    driver.schedule_after(Duration::from_millis(200), move || {
        o.borrow_mut().push("later timer");
    });

    driver.run_until_done();
    assert_eq!(*order.borrow(), vec!["continuation", "later timer"]);
}

#[test]
fn producers_are_eager() {
    let driver = Driver::new();
    let produced = Rc::new(RefCell::new(false));

    let flag = produced.clone();
    let deferred = driver.pending(move |settle| {
        *flag.borrow_mut() = true;
        settle.resolve(Value::Int(42));
        Ok(())
    });

    // The producer ran at creation time, with no observer attached.
    assert!(*produced.borrow());
    assert_eq!(deferred.state(), DeferredState::Fulfilled(Value::Int(42)));
}

#[test]
fn late_observer_still_sees_settled_value() {
    let driver = Driver::new();
    let deferred = driver.pending(|settle| {
        let settle = settle.clone();
        driver.schedule_after(Duration::from_millis(1000), move || {
            settle.resolve(Value::Int(42));
        });
        Ok(())
    });

    driver.run_until_done();

    let seen = Rc::new(RefCell::new(Vec::new()));
    let s = seen.clone();
    let _ = deferred.chain(
        Some(Handler::new(move |value| {
            s.borrow_mut().push(value);
            Ok(Outcome::Plain(Value::Undefined))
        })),
        None,
    );

    driver.drain();
    assert_eq!(*seen.borrow(), vec![Value::Int(42)]);
}

#[test]
fn take_unhandled_drains_diagnostics() {
    let driver = Driver::new();
    let _one = driver.rejected(Value::from("first"));
    let _two = driver.rejected(Value::from("second"));

    let unhandled = driver.take_unhandled();
    assert_eq!(unhandled.len(), 2);
    assert_eq!(unhandled[0].value(), &Value::from("first"));
    assert_eq!(unhandled[1].value(), &Value::from("second"));
    assert!(driver.take_unhandled().is_empty());
}

#[test]
fn unhandled_travels_to_chain_tail() {
    let driver = Driver::new();
    let _tail = driver
        .rejected(Value::from("Foo"))
        .chain(None, None)
        .chain(None, None);

    driver.drain();
    // Only the unobserved tail counts, and only once.
    let unhandled = driver.take_unhandled();
    assert_eq!(unhandled.len(), 1);
    assert_eq!(unhandled[0].value(), &Value::from("Foo"));
}

#[test]
fn virtual_clock_accumulates_across_timers() {
    let driver = Driver::new();
    driver.schedule_after(Duration::from_millis(300), || {});
    driver.schedule_after(Duration::from_millis(700), || {});
    driver.run_until_done();
    assert_eq!(driver.now(), Duration::from_millis(700));
}

#[test]
fn nested_timers_compound_delays() {
    let driver = Driver::new();
    let inner_driver = driver.clone();
    driver.schedule_after(Duration::from_millis(1000), move || {
        inner_driver.schedule_after(Duration::from_millis(1000), || {});
    });
    driver.run_until_done();
    assert_eq!(driver.now(), Duration::from_millis(2000));
}
