//! Repeating timers on a virtual clock.
//!
//! Nothing here sleeps. The owner moves the clock with [`Timers::advance`]
//! and then drains [`Timers::next_due`] one interval at a time, running
//! whatever each id stands for before asking for the next one. Clearing an
//! interval between two `next_due` calls therefore stops it immediately, even
//! if it was already due inside the same advance.

use std::time::Duration;

use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

/// Interval scheduling as the carousel sees it.
pub trait Scheduler {
    fn set_interval(&mut self, period: Duration) -> TimerId;
    /// Returns whether the interval was still live. Clearing twice is fine.
    fn clear_interval(&mut self, id: TimerId) -> bool;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingTimer {
    pub id: TimerId,
    pub due_at: Duration,
    pub period: Duration,
}

#[derive(Debug, Clone)]
struct ScheduledInterval {
    id: TimerId,
    due_at: Duration,
    period: Duration,
}

#[derive(Debug, Clone, Default)]
pub struct Timers {
    now: Duration,
    // Target of the last `advance`; `now` trails it while due ticks are drained.
    horizon: Duration,
    next_id: u64,
    queue: Vec<ScheduledInterval>,
}

impl Timers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn is_live(&self, id: TimerId) -> bool {
        self.queue.iter().any(|interval| interval.id == id)
    }

    pub fn pending(&self) -> Vec<PendingTimer> {
        let mut timers: Vec<PendingTimer> = self
            .queue
            .iter()
            .map(|interval| PendingTimer {
                id: interval.id,
                due_at: interval.due_at,
                period: interval.period,
            })
            .collect();
        timers.sort_by_key(|timer| (timer.due_at, timer.id));
        timers
    }

    /// Moves the horizon forward by `dt`. Due intervals are handed out by
    /// [`next_due`](Self::next_due); once none are left the clock sits on
    /// the horizon.
    pub fn advance(&mut self, dt: Duration) {
        self.horizon = self.horizon.max(self.now) + dt;
        if self.next_due_index().is_none() {
            self.now = self.horizon;
        }
    }

    /// Pops the earliest interval due at or before the horizon, moves the
    /// clock to its due time and requeues it one period later.
    pub fn next_due(&mut self) -> Option<TimerId> {
        let Some(index) = self.next_due_index() else {
            self.now = self.now.max(self.horizon);
            return None;
        };
        let interval = &mut self.queue[index];
        self.now = self.now.max(interval.due_at);
        // A zero period would spin forever inside one advance.
        interval.due_at += interval.period.max(Duration::from_millis(1));
        trace!(id = interval.id.0, now_ms = self.now.as_millis() as u64, "interval due");
        Some(interval.id)
    }

    fn next_due_index(&self) -> Option<usize> {
        self.queue
            .iter()
            .enumerate()
            .filter(|(_, interval)| interval.due_at <= self.horizon)
            .min_by_key(|(_, interval)| (interval.due_at, interval.id))
            .map(|(index, _)| index)
    }
}

impl Scheduler for Timers {
    fn set_interval(&mut self, period: Duration) -> TimerId {
        self.next_id += 1;
        let id = TimerId(self.next_id);
        self.queue.push(ScheduledInterval {
            id,
            due_at: self.now + period,
            period,
        });
        trace!(id = id.0, period_ms = period.as_millis() as u64, "interval set");
        id
    }

    fn clear_interval(&mut self, id: TimerId) -> bool {
        let before = self.queue.len();
        self.queue.retain(|interval| interval.id != id);
        let cleared = self.queue.len() != before;
        trace!(id = id.0, cleared, "interval cleared");
        cleared
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn drain(timers: &mut Timers) -> Vec<(TimerId, Duration)> {
        let mut fired = Vec::new();
        while let Some(id) = timers.next_due() {
            fired.push((id, timers.now()));
        }
        fired
    }

    #[test]
    fn interval_fires_once_per_period() {
        let mut timers = Timers::new();
        let id = timers.set_interval(ms(1000));

        timers.advance(ms(999));
        assert!(drain(&mut timers).is_empty());
        assert_eq!(timers.now(), ms(999));

        timers.advance(ms(1));
        assert_eq!(drain(&mut timers), vec![(id, ms(1000))]);

        timers.advance(ms(2500));
        assert_eq!(drain(&mut timers), vec![(id, ms(2000)), (id, ms(3000))]);
        assert_eq!(timers.now(), ms(3500));
    }

    #[test]
    fn intervals_fire_in_due_order() {
        let mut timers = Timers::new();
        let slow = timers.set_interval(ms(300));
        let fast = timers.set_interval(ms(200));

        timers.advance(ms(600));
        let order: Vec<TimerId> = drain(&mut timers).into_iter().map(|(id, _)| id).collect();
        assert_eq!(order, vec![fast, slow, fast, slow, fast]);
    }

    #[test]
    fn clear_is_idempotent_and_immediate() {
        let mut timers = Timers::new();
        let id = timers.set_interval(ms(100));

        timers.advance(ms(350));
        assert_eq!(timers.next_due(), Some(id));
        assert!(timers.clear_interval(id));
        assert!(!timers.clear_interval(id));
        assert_eq!(timers.next_due(), None);
        assert!(!timers.is_live(id));
        assert_eq!(timers.now(), ms(350));
    }

    #[test]
    fn interval_set_mid_drain_starts_from_current_time() {
        let mut timers = Timers::new();
        let first = timers.set_interval(ms(1000));
        timers.advance(ms(1500));
        assert_eq!(timers.next_due(), Some(first));
        timers.clear_interval(first);

        let second = timers.set_interval(ms(1000));
        assert_eq!(timers.next_due(), None);
        assert_eq!(
            timers.pending(),
            vec![PendingTimer {
                id: second,
                due_at: ms(2000),
                period: ms(1000),
            }]
        );
    }

    #[test]
    fn ids_are_not_reused() {
        let mut timers = Timers::new();
        let a = timers.set_interval(ms(10));
        timers.clear_interval(a);
        let b = timers.set_interval(ms(10));
        assert_ne!(a, b);
    }
}
