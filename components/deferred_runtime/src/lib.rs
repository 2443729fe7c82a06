//! Deferred values with deterministic scheduling.
//!
//! This crate provides the asynchronous value-propagation model the demos
//! exercise:
//! - [`Deferred`] - write-once value container with chainable continuations
//! - [`Driver`] - ready queue, timer queue, and virtual clock behind one handle
//! - [`Handler`] / [`Outcome`] - continuation handlers and their tagged results
//! - [`ReadyQueue`] / [`TimerQueue`] - the underlying FIFO and delay queues
//!
//! # Overview
//!
//! A deferred settles exactly once, to a value or to a rejection reason.
//! Continuations attached with [`Deferred::chain`] always run on a later
//! drain turn, in attachment order, and their failures become rejections
//! of the derived deferred instead of surfacing in the caller. Rejections
//! propagate unchanged past every step without a rejection handler; a
//! rejection handler that completes normally recovers the chain for every
//! step after it.
//!
//! # Examples
//!
//! ## Chaining and recovery
//!
//! ```
//! use deferred_runtime::{DeferredState, Driver, Handler, Outcome};
//! use flow_types::Value;
//!
//! let driver = Driver::new();
//! let recovered = driver
//!     .resolved(Value::Int(1))
//!     .chain(Some(Handler::new(|_| Err(Value::from("Foo")))), None)
//!     .catch(Handler::new(|reason| Ok(Outcome::Plain(reason))));
//!
//! driver.drain();
//! assert_eq!(recovered.state(), DeferredState::Fulfilled(Value::from("Foo")));
//! ```
//!
//! ## Delayed settlement
//!
//! ```
//! use deferred_runtime::{DeferredState, Driver};
//! use flow_types::Value;
//! use std::time::Duration;
//!
//! let driver = Driver::new();
//! let later = driver.pending(|settle| {
//!     let settle = settle.clone();
//!     driver.schedule_after(Duration::from_millis(10), move || {
//!         settle.resolve(Value::from("done"));
//!     });
//!     Ok(())
//! });
//!
//! driver.run_until_done();
//! assert_eq!(later.state(), DeferredState::Fulfilled(Value::from("done")));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod deferred;
pub mod driver;
pub mod ready_queue;

// Re-export main types at crate root
pub use deferred::{Deferred, DeferredState, Handler, Outcome, Settle};
pub use driver::Driver;
pub use ready_queue::{ReadyJob, ReadyQueue, TimerEntry, TimerQueue};
