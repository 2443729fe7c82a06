//! The driver: ready queue, timer queue, virtual clock, and diagnostics.
//!
//! One driver hosts any number of deferred values. It coordinates the two
//! queues the way an event loop does: the ready queue drains completely
//! before the next timer fires, so continuation dispatches always finish
//! ahead of delayed work queued in the same turn.

use crate::deferred::{Deferred, Settle};
use crate::ready_queue::{ReadyJob, ReadyQueue, TimerQueue};
use flow_types::{Reason, Value};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

#[derive(Debug)]
struct DriverInner {
    ready: ReadyQueue,
    timers: TimerQueue,
    now: Duration,
    next_id: u64,
    unhandled: Vec<(u64, Reason)>,
}

/// The scheduling host for deferred values.
///
/// `Driver` is a cheap-to-clone handle over one logical thread's queues:
/// a FIFO ready queue for continuation dispatches, and a timer queue on a
/// virtual clock for delayed settlement. [`drain`](Driver::drain) is the
/// explicit "run the queued handlers" step; [`run_until_done`](Driver::run_until_done)
/// alternates timers and drains until both queues are empty.
///
/// Rejections that settle with no continuation attached are recorded as
/// unhandled and can be collected with [`take_unhandled`](Driver::take_unhandled);
/// the driver never terminates the host on its own.
///
/// # Examples
///
/// ```
/// use deferred_runtime::{DeferredState, Driver};
/// use flow_types::Value;
/// use std::time::Duration;
///
/// let driver = Driver::new();
/// let delayed = driver.pending(|settle| {
///     let settle = settle.clone();
///     driver.schedule_after(Duration::from_millis(1000), move || {
///         settle.resolve(Value::Int(42));
///     });
///     Ok(())
/// });
///
/// driver.run_until_done();
/// assert_eq!(delayed.state(), DeferredState::Fulfilled(Value::Int(42)));
/// assert_eq!(driver.now(), Duration::from_millis(1000));
/// ```
#[derive(Debug, Clone)]
pub struct Driver {
    inner: Rc<RefCell<DriverInner>>,
}

impl Driver {
    /// Creates a new driver with empty queues and the clock at zero.
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(DriverInner {
                ready: ReadyQueue::new(),
                timers: TimerQueue::new(),
                now: Duration::ZERO,
                next_id: 0,
                unhandled: Vec::new(),
            })),
        }
    }

    /// Creates a deferred already fulfilled with `value`.
    ///
    /// No jobs are scheduled until a continuation attaches.
    pub fn resolved(&self, value: Value) -> Deferred {
        let deferred = Deferred::new_with(self);
        deferred.fulfill(value);
        deferred
    }

    /// Creates a deferred already rejected with `reason`.
    ///
    /// Until a continuation attaches, the rejection counts as unhandled.
    pub fn rejected(&self, reason: Value) -> Deferred {
        let deferred = Deferred::new_with(self);
        deferred.reject(Reason::explicit(reason));
        deferred
    }

    /// Creates a pending deferred and runs `producer` once, synchronously.
    ///
    /// The producer receives the [`Settle`] capability and may resolve or
    /// reject immediately, or clone the capability into a
    /// [`schedule_after`](Driver::schedule_after) closure and settle later.
    /// A producer returning `Err` rejects the deferred with a producer
    /// failure, unless it already settled it.
    pub fn pending<P>(&self, producer: P) -> Deferred
    where
        P: FnOnce(&Settle) -> Result<(), Value>,
    {
        let deferred = Deferred::new_with(self);
        let settle = Settle::for_deferred(deferred.clone());
        if let Err(raised) = producer(&settle) {
            deferred.reject(Reason::producer(raised));
        }
        deferred
    }

    /// Adds a job to the ready queue.
    ///
    /// It runs during the next [`drain`](Driver::drain), after everything
    /// already queued.
    pub fn enqueue_ready(&self, job: ReadyJob) {
        self.inner.borrow_mut().ready.enqueue(job);
    }

    /// Schedules `job` to fire `delay` past the current virtual clock.
    ///
    /// Timers race only against other timers, by relative delay; ties fire
    /// in scheduling order.
    pub fn schedule_after<F>(&self, delay: Duration, job: F)
    where
        F: FnOnce() + 'static,
    {
        let mut inner = self.inner.borrow_mut();
        let due = inner.now + delay;
        inner.timers.schedule_at(due, ReadyJob::new(job));
    }

    /// Runs ready jobs in FIFO order until the queue is empty.
    ///
    /// Jobs enqueued while draining run in the same call. Returns the
    /// number of jobs executed.
    pub fn drain(&self) -> usize {
        let mut executed = 0;
        loop {
            let job = self.inner.borrow_mut().ready.dequeue();
            match job {
                Some(job) => {
                    job.run();
                    executed += 1;
                }
                None => break,
            }
        }
        executed
    }

    /// Runs everything to completion: drain, then alternate firing the
    /// next due timer and draining, until both queues are empty.
    ///
    /// Deferred values whose producers never settle remain pending.
    pub fn run_until_done(&self) {
        self.drain();
        while let Some(job) = self.pop_due_timer() {
            job.run();
            self.drain();
        }
    }

    /// Pops the earliest timer and advances the clock to its due time.
    fn pop_due_timer(&self) -> Option<ReadyJob> {
        let mut inner = self.inner.borrow_mut();
        let entry = inner.timers.pop_next()?;
        if entry.due() > inner.now {
            inner.now = entry.due();
        }
        Some(entry.into_job())
    }

    /// The current virtual-clock reading.
    pub fn now(&self) -> Duration {
        self.inner.borrow().now
    }

    /// Returns true if the ready queue is empty.
    pub fn is_ready_queue_empty(&self) -> bool {
        self.inner.borrow().ready.is_empty()
    }

    /// Returns true if no timers are scheduled.
    pub fn is_timer_queue_empty(&self) -> bool {
        self.inner.borrow().timers.is_empty()
    }

    /// Drains the recorded unhandled rejections, oldest first.
    ///
    /// A reason appears here when its deferred settled rejected with no
    /// continuation attached and none was attached since. Surfacing them
    /// is the host's job; collecting them never alters chain state.
    pub fn take_unhandled(&self) -> Vec<Reason> {
        let drained: Vec<(u64, Reason)> =
            self.inner.borrow_mut().unhandled.drain(..).collect();
        drained.into_iter().map(|(_, reason)| reason).collect()
    }

    pub(crate) fn next_id(&self) -> u64 {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        id
    }

    pub(crate) fn record_unhandled(&self, id: u64, reason: Reason) {
        let mut inner = self.inner.borrow_mut();
        if !inner.unhandled.iter().any(|(known, _)| *known == id) {
            inner.unhandled.push((id, reason));
        }
    }

    pub(crate) fn withdraw_unhandled(&self, id: u64) {
        self.inner
            .borrow_mut()
            .unhandled
            .retain(|(known, _)| *known != id);
    }
}

impl Default for Driver {
    fn default() -> Self {
        Self::new()
    }
}
