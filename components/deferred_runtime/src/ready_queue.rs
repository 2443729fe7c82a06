//! Ready and timer queue management.
//!
//! This module provides the two queues the driver coordinates: the FIFO
//! ready queue holding continuation jobs, and the timer queue holding
//! delayed jobs on a virtual clock. The ready queue drains completely
//! between timer firings.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::collections::VecDeque;
use std::time::Duration;

/// A unit of work ready to run on the driver's logical thread.
///
/// Ready jobs carry continuation dispatches: a deferred settled, so its
/// attached handlers must run on a later turn. Jobs are not `Send`; the
/// whole model is a single cooperative thread.
pub struct ReadyJob {
    callback: Box<dyn FnOnce()>,
}

impl ReadyJob {
    /// Creates a new ReadyJob from a closure.
    pub fn new<F>(f: F) -> Self
    where
        F: FnOnce() + 'static,
    {
        Self {
            callback: Box::new(f),
        }
    }

    /// Executes the job, consuming it.
    pub fn run(self) {
        (self.callback)()
    }
}

impl std::fmt::Debug for ReadyJob {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ReadyJob {{ ... }}")
    }
}

/// FIFO queue of ready jobs.
///
/// Jobs run in enqueue order. Jobs enqueued while the queue is draining
/// run in the same drain, after everything already queued.
#[derive(Debug, Default)]
pub struct ReadyQueue {
    queue: VecDeque<ReadyJob>,
}

impl ReadyQueue {
    /// Creates a new empty ReadyQueue.
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }

    /// Adds a job to the end of the queue.
    pub fn enqueue(&mut self, job: ReadyJob) {
        self.queue.push_back(job);
    }

    /// Removes and returns the next job from the queue.
    pub fn dequeue(&mut self) -> Option<ReadyJob> {
        self.queue.pop_front()
    }

    /// Returns true if the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Returns the number of queued jobs.
    pub fn len(&self) -> usize {
        self.queue.len()
    }
}

/// A delayed job, due at a point on the virtual clock.
///
/// Entries with an equal due time fire in scheduling order (`seq`), so two
/// timers with the same delay never race nondeterministically.
pub struct TimerEntry {
    due: Duration,
    seq: u64,
    job: ReadyJob,
}

impl TimerEntry {
    /// The virtual-clock instant this entry fires at.
    pub fn due(&self) -> Duration {
        self.due
    }

    /// Consumes the entry, yielding its job.
    pub fn into_job(self) -> ReadyJob {
        self.job
    }
}

impl std::fmt::Debug for TimerEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimerEntry")
            .field("due", &self.due)
            .field("seq", &self.seq)
            .finish()
    }
}

impl PartialEq for TimerEntry {
    fn eq(&self, other: &Self) -> bool {
        self.due == other.due && self.seq == other.seq
    }
}

impl Eq for TimerEntry {}

impl PartialOrd for TimerEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Later due times order greater; ties break on scheduling order.
impl Ord for TimerEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.due
            .cmp(&other.due)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// Queue of delayed jobs ordered by `(due, seq)`.
///
/// The driver pops the earliest entry, advances the virtual clock to its
/// due time, runs it, and drains the ready queue before looking at the
/// next entry.
#[derive(Debug, Default)]
pub struct TimerQueue {
    entries: BinaryHeap<std::cmp::Reverse<TimerEntry>>,
    seq: u64,
}

impl TimerQueue {
    /// Creates a new empty TimerQueue.
    pub fn new() -> Self {
        Self {
            entries: BinaryHeap::new(),
            seq: 0,
        }
    }

    /// Schedules a job at an absolute virtual-clock instant.
    pub fn schedule_at(&mut self, due: Duration, job: ReadyJob) {
        let seq = self.seq;
        self.seq += 1;
        self.entries.push(std::cmp::Reverse(TimerEntry { due, seq, job }));
    }

    /// Removes and returns the earliest entry.
    pub fn pop_next(&mut self) -> Option<TimerEntry> {
        self.entries.pop().map(|reversed| reversed.0)
    }

    /// Returns true if no entries are scheduled.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of scheduled entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
