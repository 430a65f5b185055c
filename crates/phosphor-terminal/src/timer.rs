//! Cancellable one-shot timers polled from the frame loop.

use std::time::Instant;

/// Handle returned by [`TimerQueue::schedule`], used to cancel a timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

/// A small queue of pending one-shot timers.
///
/// Nothing fires on its own: the owner calls [`pop_due`](Self::pop_due)
/// from its tick and uses [`next_deadline`](Self::next_deadline) to decide
/// how long the event loop may sleep.
#[derive(Debug)]
pub struct TimerQueue<E> {
    next_id: u64,
    entries: Vec<(TimerId, Instant, E)>,
}

impl<E> TimerQueue<E> {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }

    /// Schedule `event` to fire at `at`.
    pub fn schedule(&mut self, at: Instant, event: E) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, at, event));
        id
    }

    /// Cancel a pending timer. Returns `false` if it already fired or was
    /// cancelled before.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _, _)| *entry_id != id);
        self.entries.len() != before
    }

    /// Remove and return the earliest timer due at `now`, if any.
    pub fn pop_due(&mut self, now: Instant) -> Option<E> {
        let index = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, (_, at, _))| *at <= now)
            .min_by_key(|(_, (_, at, _))| *at)
            .map(|(i, _)| i)?;
        Some(self.entries.remove(index).2)
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.entries.iter().map(|(_, at, _)| *at).min()
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.entries.iter().any(|(entry_id, _, _)| *entry_id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every pending timer.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<E> Default for TimerQueue<E> {
    fn default() -> Self {
        Self::new()
    }
}
