//! The deferred value and its continuation chain.
//!
//! This module provides the write-once value container with chainable
//! transformation and two-sided error handling. A deferred settles exactly
//! once; attached continuations always run on a later drain turn, in
//! attachment order.

use crate::driver::Driver;
use crate::ready_queue::ReadyJob;
use flow_types::{Completion, Reason, Value};
use std::cell::RefCell;
use std::rc::Rc;

/// The state of a deferred value.
///
/// A deferred transitions exactly once, from `Pending` to either terminal
/// state. Later resolution or rejection attempts are no-ops.
#[derive(Debug, Clone, PartialEq)]
pub enum DeferredState {
    /// Not yet settled
    Pending,
    /// Settled with a value
    Fulfilled(Value),
    /// Settled with a rejection reason
    Rejected(Reason),
}

/// What a handler hands back: a plain value, or another deferred to adopt.
///
/// This tagged union makes flattening statically decidable: the derived
/// deferred fulfills directly with `Plain`, and adopts the eventual state
/// of the inner deferred with `Adopt`, never nesting one deferred inside
/// another.
#[derive(Debug)]
pub enum Outcome {
    /// A plain value; the derived deferred fulfills with it
    Plain(Value),
    /// Another deferred; the derived deferred adopts its eventual state
    Adopt(Deferred),
}

/// A continuation handler.
///
/// Takes the parent's terminal value (or, for rejection handlers, the
/// reason's payload) and produces an [`Outcome`]. Returning `Err` is the
/// handler failing while running; the derived deferred rejects with the
/// raised value and the failure never reaches the caller's control flow.
pub struct Handler {
    callback: Box<dyn FnMut(Value) -> Result<Outcome, Value>>,
}

impl Handler {
    /// Creates a new Handler from a closure.
    pub fn new<F>(f: F) -> Self
    where
        F: FnMut(Value) -> Result<Outcome, Value> + 'static,
    {
        Self {
            callback: Box::new(f),
        }
    }

    /// Invokes the handler with the given value.
    pub fn call(&mut self, value: Value) -> Result<Outcome, Value> {
        (self.callback)(value)
    }
}

impl std::fmt::Debug for Handler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Handler {{ ... }}")
    }
}

/// A handler pair attached to a deferred, feeding one derived deferred.
#[derive(Debug)]
pub(crate) struct Continuation {
    pub(crate) target: Deferred,
    pub(crate) on_fulfilled: Option<Handler>,
    pub(crate) on_rejected: Option<Handler>,
}

struct DeferredInner {
    id: u64,
    state: DeferredState,
    continuations: Vec<Continuation>,
}

/// A value that becomes available now or later, exactly once.
///
/// `Deferred` is a cheap-to-clone handle; all clones observe the same
/// underlying state. Continuations attach with [`chain`](Deferred::chain)
/// and [`catch`](Deferred::catch); each attachment produces a new derived
/// deferred whose settlement follows the matching handler's result.
///
/// Handlers never run while the parent is pending, and never run in the
/// turn that attached them: even against an already-settled parent, the
/// dispatch is queued and runs on the next [`Driver::drain`].
///
/// # Examples
///
/// ```
/// use deferred_runtime::{DeferredState, Driver, Handler, Outcome};
/// use flow_types::Value;
///
/// let driver = Driver::new();
/// let doubled = driver.resolved(Value::Int(21)).chain(
///     Some(Handler::new(|value| match value {
///         Value::Int(n) => Ok(Outcome::Plain(Value::Int(n * 2))),
///         other => Ok(Outcome::Plain(other)),
///     })),
///     None,
/// );
///
/// // Nothing ran yet; dispatch waits for the next drain turn.
/// assert_eq!(doubled.state(), DeferredState::Pending);
/// driver.drain();
/// assert_eq!(doubled.state(), DeferredState::Fulfilled(Value::Int(42)));
/// ```
#[derive(Clone)]
pub struct Deferred {
    inner: Rc<RefCell<DeferredInner>>,
    driver: Driver,
}

impl Deferred {
    pub(crate) fn new_with(driver: &Driver) -> Self {
        Self {
            inner: Rc::new(RefCell::new(DeferredInner {
                id: driver.next_id(),
                state: DeferredState::Pending,
                continuations: Vec::new(),
            })),
            driver: driver.clone(),
        }
    }

    /// Returns a snapshot of the current state.
    pub fn state(&self) -> DeferredState {
        self.inner.borrow().state.clone()
    }

    /// Attaches handlers for fulfillment and/or rejection.
    ///
    /// Returns the derived deferred. Semantics:
    ///
    /// - Parent fulfilled, `on_fulfilled` present: the handler runs with
    ///   the value; `Outcome::Plain` fulfills the derived deferred,
    ///   `Outcome::Adopt` makes it adopt the returned deferred, and a
    ///   handler failure rejects it.
    /// - Parent fulfilled, `on_fulfilled` omitted: the value passes
    ///   through unchanged.
    /// - Parent rejected, `on_rejected` present: the handler runs with the
    ///   reason's payload; completing with an `Outcome` recovers the chain.
    /// - Parent rejected, `on_rejected` omitted: the rejection passes
    ///   through unchanged, however long the chain.
    ///
    /// `on_rejected` here fires only for the parent's own rejection. It
    /// does not see rejections a handler further up already recovered
    /// from, and it does not catch a failure of the `on_fulfilled` sitting
    /// next to it in the same call.
    pub fn chain(&self, on_fulfilled: Option<Handler>, on_rejected: Option<Handler>) -> Deferred {
        let derived = Deferred::new_with(&self.driver);
        self.attach(Continuation {
            target: derived.clone(),
            on_fulfilled,
            on_rejected,
        });
        derived
    }

    /// Attaches a rejection handler only.
    ///
    /// Sugar for `chain(None, Some(on_rejected))`.
    pub fn catch(&self, on_rejected: Handler) -> Deferred {
        self.chain(None, Some(on_rejected))
    }

    /// Routes this deferred's eventual completion into an existing target.
    ///
    /// This is the adoption path: a handler returned `Outcome::Adopt`, so
    /// the derived deferred follows this one instead of nesting it.
    pub(crate) fn pipe_into(&self, target: Deferred) {
        self.attach(Continuation {
            target,
            on_fulfilled: None,
            on_rejected: None,
        });
    }

    fn attach(&self, continuation: Continuation) {
        let state = self.inner.borrow().state.clone();
        let completion: Completion = match state {
            DeferredState::Pending => {
                self.inner.borrow_mut().continuations.push(continuation);
                return;
            }
            DeferredState::Fulfilled(value) => Ok(value),
            DeferredState::Rejected(reason) => {
                // The rejection now has an observer.
                self.driver.withdraw_unhandled(self.id());
                Err(reason)
            }
        };
        self.driver
            .enqueue_ready(ReadyJob::new(move || dispatch(continuation, completion)));
    }

    /// Transitions to `Fulfilled` and queues the attached continuations.
    ///
    /// No-op if already settled.
    pub(crate) fn fulfill(&self, value: Value) {
        let continuations = {
            let mut inner = self.inner.borrow_mut();
            if !matches!(inner.state, DeferredState::Pending) {
                return;
            }
            inner.state = DeferredState::Fulfilled(value.clone());
            std::mem::take(&mut inner.continuations)
        };
        for continuation in continuations {
            let completion: Completion = Ok(value.clone());
            self.driver
                .enqueue_ready(ReadyJob::new(move || dispatch(continuation, completion)));
        }
    }

    /// Transitions to `Rejected` and queues the attached continuations.
    ///
    /// No-op if already settled. A rejection with no continuation attached
    /// is recorded with the driver as unhandled; a later attachment
    /// withdraws the record.
    pub(crate) fn reject(&self, reason: Reason) {
        let continuations = {
            let mut inner = self.inner.borrow_mut();
            if !matches!(inner.state, DeferredState::Pending) {
                return;
            }
            inner.state = DeferredState::Rejected(reason.clone());
            std::mem::take(&mut inner.continuations)
        };
        if continuations.is_empty() {
            self.driver.record_unhandled(self.id(), reason);
            return;
        }
        for continuation in continuations {
            let completion: Completion = Err(reason.clone());
            self.driver
                .enqueue_ready(ReadyJob::new(move || dispatch(continuation, completion)));
        }
    }

    pub(crate) fn id(&self) -> u64 {
        self.inner.borrow().id
    }
}

impl std::fmt::Debug for Deferred {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Deferred")
            .field("id", &inner.id)
            .field("state", &inner.state)
            .finish()
    }
}

/// The resolve/reject capability pair handed to a producer.
///
/// Either call settles the deferred; the first call wins and later calls
/// are ignored. The pair is clonable so a producer can move it into a
/// timer closure and settle at an arbitrary later point.
#[derive(Debug, Clone)]
pub struct Settle {
    deferred: Deferred,
}

impl Settle {
    pub(crate) fn for_deferred(deferred: Deferred) -> Self {
        Self { deferred }
    }

    /// Fulfills the deferred with a value.
    pub fn resolve(&self, value: Value) {
        self.deferred.fulfill(value);
    }

    /// Rejects the deferred with a reason value.
    pub fn reject(&self, reason: Value) {
        self.deferred.reject(Reason::explicit(reason));
    }
}

/// Runs one continuation against its parent's completion and settles the
/// continuation's target accordingly.
fn dispatch(continuation: Continuation, completion: Completion) {
    let Continuation {
        target,
        on_fulfilled,
        on_rejected,
    } = continuation;
    match completion {
        Ok(value) => match on_fulfilled {
            Some(mut handler) => settle_from(target, handler.call(value)),
            None => target.fulfill(value),
        },
        Err(reason) => match on_rejected {
            Some(mut handler) => settle_from(target, handler.call(reason.into_value())),
            None => target.reject(reason),
        },
    }
}

fn settle_from(target: Deferred, result: Result<Outcome, Value>) {
    match result {
        Ok(Outcome::Plain(value)) => target.fulfill(value),
        Ok(Outcome::Adopt(deferred)) => deferred.pipe_into(target),
        Err(raised) => target.reject(Reason::handler(raised)),
    }
}
