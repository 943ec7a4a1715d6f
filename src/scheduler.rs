//! Fixed-period tick source for the capture-and-render cycle.
//!
//! Cooperative: the GUI event loop polls the scheduler, it never spawns a
//! thread. Ticks do not queue. When the loop falls behind, missed periods
//! collapse into a single tick and the next deadline is re-armed from now.

use std::time::{Duration, Instant};

pub struct FrameScheduler {
    period: Duration,
    next_due: Instant,
}

impl FrameScheduler {
    /// A new scheduler is due immediately so the first frame appears without
    /// waiting out a full period.
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            next_due: Instant::now(),
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Returns true when a tick is due and re-arms the deadline.
    pub fn poll(&mut self, now: Instant) -> bool {
        if now >= self.next_due {
            self.next_due = now + self.period;
            true
        } else {
            false
        }
    }

    /// Time remaining until the next tick, zero if already due.
    pub fn time_until_due(&self, now: Instant) -> Duration {
        self.next_due.saturating_duration_since(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_tick_is_immediate() {
        let mut scheduler = FrameScheduler::new(Duration::from_millis(100));
        assert!(scheduler.poll(Instant::now()));
    }

    #[test]
    fn not_due_before_period_elapses() {
        let mut scheduler = FrameScheduler::new(Duration::from_millis(100));
        let t0 = Instant::now();
        assert!(scheduler.poll(t0));
        assert!(!scheduler.poll(t0 + Duration::from_millis(50)));
        assert!(scheduler.poll(t0 + Duration::from_millis(150)));
    }

    #[test]
    fn late_poll_yields_single_tick() {
        let mut scheduler = FrameScheduler::new(Duration::from_millis(100));
        let t0 = Instant::now();
        assert!(scheduler.poll(t0));

        // Loop stalls for 3.5 periods: exactly one tick fires, then the
        // deadline is a full period away again.
        let late = t0 + Duration::from_millis(350);
        assert!(scheduler.poll(late));
        assert!(!scheduler.poll(late + Duration::from_millis(10)));
        assert!(scheduler.poll(late + Duration::from_millis(100)));
    }

    #[test]
    fn tick_count_matches_period_over_simulated_second() {
        let mut scheduler = FrameScheduler::new(Duration::from_millis(100));
        let t0 = Instant::now();

        let mut ticks = 0;
        for step in 0..100 {
            if scheduler.poll(t0 + Duration::from_millis(step * 10)) {
                ticks += 1;
            }
        }
        assert_eq!(ticks, 10);
    }

    #[test]
    fn time_until_due_counts_down() {
        let mut scheduler = FrameScheduler::new(Duration::from_millis(100));
        let t0 = Instant::now();
        assert!(scheduler.poll(t0));
        assert_eq!(
            scheduler.time_until_due(t0 + Duration::from_millis(40)),
            Duration::from_millis(60)
        );
        assert_eq!(
            scheduler.time_until_due(t0 + Duration::from_millis(250)),
            Duration::ZERO
        );
    }
}
