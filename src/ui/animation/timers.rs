// SPDX-License-Identifier: MPL-2.0
//! Deadline-based [`TimerService`] polled from the UI loop.

use super::{TimerId, TimerService};
use std::time::{Duration, Instant};

/// One-shot timers that fire when [`MainLoopTimers::fire_due`] is called
/// with a timestamp at or past their deadline.
#[derive(Debug, Clone, Default)]
pub struct MainLoopTimers {
    next_id: u64,
    pending: Vec<(TimerId, Instant)>,
}

impl MainLoopTimers {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes and returns every timer due at `now`, earliest first.
    pub fn fire_due(&mut self, now: Instant) -> Vec<TimerId> {
        let mut due: Vec<(TimerId, Instant)> = Vec::new();
        self.pending.retain(|&(id, deadline)| {
            if deadline <= now {
                due.push((id, deadline));
                false
            } else {
                true
            }
        });
        due.sort_by_key(|&(id, deadline)| (deadline, id));
        due.into_iter().map(|(id, _)| id).collect()
    }

    #[must_use]
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.iter().map(|&(_, deadline)| deadline).min()
    }
}

impl TimerService for MainLoopTimers {
    fn schedule_once(&mut self, delay: Duration, now: Instant) -> TimerId {
        self.next_id += 1;
        let id = TimerId(self.next_id);
        self.pending.push((id, now + delay));
        id
    }

    fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|&(pending, _)| pending != id);
        self.pending.len() != before
    }
}
