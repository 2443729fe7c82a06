//! Callback/Deferred Equivalence Integration Tests
//!
//! The two faces of the simulated byte-stream source deliver the same
//! completion; a deferred chain and a nested-callback pyramid compute the
//! same result.

use deferred_runtime::{DeferredState, Driver, Handler, Outcome};
use flow_cli::SourceCatalog;
use flow_types::Value;
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn test_callback_and_deferred_reads_agree() {
    let driver = Driver::new();
    let catalog = SourceCatalog::with_demo_data();

    let via_callback = Rc::new(RefCell::new(None));
    let slot = via_callback.clone();
    catalog.read_with(&driver, "demo.data", move |completion| {
        *slot.borrow_mut() = Some(completion);
    });

    let via_deferred = catalog.read(&driver, "demo.data");

    driver.run_until_done();

    let callback_value = via_callback
        .borrow_mut()
        .take()
        .expect("callback should have completed")
        .expect("known source should succeed");
    assert_eq!(
        via_deferred.state(),
        DeferredState::Fulfilled(callback_value)
    );
}

#[test]
fn test_callback_and_deferred_failures_agree() {
    let driver = Driver::new();
    let catalog = SourceCatalog::with_demo_data();

    let via_callback = Rc::new(RefCell::new(None));
    let slot = via_callback.clone();
    catalog.read_with(&driver, "demo.data2", move |completion| {
        *slot.borrow_mut() = Some(completion);
    });

    let via_deferred = catalog.read(&driver, "demo.data2");
    let observed = Rc::new(RefCell::new(None));
    let seen = observed.clone();
    let _ = via_deferred.catch(Handler::new(move |reason| {
        *seen.borrow_mut() = Some(reason.clone());
        Ok(Outcome::Plain(Value::Undefined))
    }));

    driver.run_until_done();

    let callback_reason = via_callback
        .borrow_mut()
        .take()
        .expect("callback should have completed")
        .expect_err("unknown source should fail");
    assert_eq!(
        observed.borrow_mut().take(),
        Some(callback_reason.into_value())
    );
}

/// The boomerang pyramid and the flat deferred chain total the same bytes.
#[test]
fn test_nested_callbacks_match_chained_reads() {
    let driver = Driver::new();

    // Pyramid: read, then read again inside the continuation.
    let pyramid_total = Rc::new(RefCell::new(None));
    let slot = pyramid_total.clone();
    let inner_driver = driver.clone();
    let inner_catalog = SourceCatalog::with_demo_data();
    SourceCatalog::with_demo_data().read_with(&driver, "demo.data", move |first| {
        if let Ok(Value::Int(a)) = first {
            inner_catalog.read_with(&inner_driver, "demo.data", move |second| {
                if let Ok(Value::Int(b)) = second {
                    *slot.borrow_mut() = Some(a + b);
                }
            });
        }
    });

    // Chain: read, then adopt a second read, then add.
    let chain_driver = driver.clone();
    let chained = SourceCatalog::with_demo_data()
        .read(&driver, "demo.data")
        .chain(
            Some(Handler::new(move |value| {
                let first = match value {
                    Value::Int(n) => n,
                    _ => 0,
                };
                let second_read = SourceCatalog::with_demo_data()
                    .read(&chain_driver, "demo.data")
                    .chain(
                        Some(Handler::new(move |value| match value {
                            Value::Int(n) => Ok(Outcome::Plain(Value::Int(first + n))),
                            other => Ok(Outcome::Plain(other)),
                        })),
                        None,
                    );
                Ok(Outcome::Adopt(second_read))
            })),
            None,
        );

    driver.run_until_done();

    let total = pyramid_total
        .borrow_mut()
        .take()
        .expect("pyramid should finish");
    assert_eq!(chained.state(), DeferredState::Fulfilled(Value::Int(total)));
}
