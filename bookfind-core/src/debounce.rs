//! Cancellable timers for debounced search
//!
//! A [`Scheduler`] hands out [`TimerId`]s for delayed wake-ups and can cancel
//! them. [`Debouncer`] keeps at most one timer pending: triggering it again
//! cancels the previous timer first. Fires are delivered back to the owner as
//! plain ids, so a fire that was already in transit when its timer got
//! cancelled is recognised and dropped by [`Debouncer::fire`].

use std::collections::{BTreeMap, HashMap};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Identity of one scheduled timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(u64);

/// Source of delayed wake-ups
pub trait Scheduler {
    /// Arrange for `id` to fire once `delay` has elapsed
    fn schedule(&mut self, delay: Duration) -> TimerId;

    /// Prevent a timer from firing; unknown or fired ids are ignored
    fn cancel(&mut self, id: TimerId);
}

/// Coalesces bursts of triggers into one fire after a quiet period
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<TimerId>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Restart the quiet period
    pub fn trigger(&mut self, scheduler: &mut dyn Scheduler) -> TimerId {
        self.cancel(scheduler);
        let id = scheduler.schedule(self.delay);
        self.pending = Some(id);
        id
    }

    /// Drop the pending timer, if any
    pub fn cancel(&mut self, scheduler: &mut dyn Scheduler) {
        if let Some(id) = self.pending.take() {
            scheduler.cancel(id);
        }
    }

    /// Accept a fire; returns false for timers that are no longer pending
    pub fn fire(&mut self, id: TimerId) -> bool {
        if self.pending == Some(id) {
            self.pending = None;
            true
        } else {
            false
        }
    }
}

/// Deterministic scheduler driven by explicit [`advance`](Self::advance) calls
#[derive(Debug, Default)]
pub struct ManualScheduler {
    now: Duration,
    next_id: u64,
    deadlines: BTreeMap<TimerId, Duration>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of timers that have neither fired nor been cancelled
    pub fn pending(&self) -> usize {
        self.deadlines.len()
    }

    /// Move virtual time forward and return the timers that came due,
    /// earliest first
    pub fn advance(&mut self, by: Duration) -> Vec<TimerId> {
        self.now += by;
        let now = self.now;

        let mut due: Vec<(Duration, TimerId)> = self
            .deadlines
            .iter()
            .filter(|(_, deadline)| **deadline <= now)
            .map(|(&id, &deadline)| (deadline, id))
            .collect();
        due.sort();

        for (_, id) in &due {
            self.deadlines.remove(id);
        }
        due.into_iter().map(|(_, id)| id).collect()
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&mut self, delay: Duration) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.deadlines.insert(id, self.now + delay);
        id
    }

    fn cancel(&mut self, id: TimerId) {
        self.deadlines.remove(&id);
    }
}

/// Scheduler backed by tokio timers
///
/// Each timer is a task that sleeps and then sends `wrap(id)` on the channel.
/// Cancelling aborts the task. Must be used from within a tokio runtime.
pub struct TokioScheduler<E> {
    next_id: u64,
    tx: mpsc::UnboundedSender<E>,
    wrap: fn(TimerId) -> E,
    tasks: HashMap<TimerId, JoinHandle<()>>,
}

impl<E: Send + 'static> TokioScheduler<E> {
    pub fn new(tx: mpsc::UnboundedSender<E>, wrap: fn(TimerId) -> E) -> Self {
        Self {
            next_id: 0,
            tx,
            wrap,
            tasks: HashMap::new(),
        }
    }
}

impl<E: Send + 'static> Scheduler for TokioScheduler<E> {
    fn schedule(&mut self, delay: Duration) -> TimerId {
        self.tasks.retain(|_, task| !task.is_finished());

        let id = TimerId(self.next_id);
        self.next_id += 1;

        let tx = self.tx.clone();
        let event = (self.wrap)(id);
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Receiver gone means the session is over
            let _ = tx.send(event);
        });
        self.tasks.insert(id, task);
        id
    }

    fn cancel(&mut self, id: TimerId) {
        if let Some(task) = self.tasks.remove(&id) {
            task.abort();
        }
    }
}

impl<E> Drop for TokioScheduler<E> {
    fn drop(&mut self) {
        for (_, task) in self.tasks.drain() {
            task.abort();
        }
    }
}
