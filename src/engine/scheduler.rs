//! TickScheduler: a re-armable fixed-interval tick source.
//!
//! The engine owns the pace as a number; this type owns the real time. The
//! main loop asks it how long input polling may block and whether a tick is
//! due, and re-arms it whenever the engine reports a pace change. Pausing is
//! a flag the engine checks, not a cancellation here: the schedule keeps
//! running and paused ticks come back idle.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct TickScheduler {
    interval: Duration,
    last_tick: Instant,
}

impl TickScheduler {
    /// Schedule ticks every `interval_ms`, starting now
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval: Duration::from_millis(interval_ms as u64),
            last_tick: Instant::now(),
        }
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval.as_millis() as u32
    }

    /// Re-arm at a new period. The deadline already in flight is kept; the
    /// new period applies from the next tick on.
    pub fn arm(&mut self, interval_ms: u32) {
        self.interval = Duration::from_millis(interval_ms as u64);
    }

    /// Whether a tick is due
    pub fn due(&self) -> bool {
        self.last_tick.elapsed() >= self.interval
    }

    /// Mark the due tick as taken, starting the next period
    pub fn advance(&mut self) {
        self.last_tick = Instant::now();
    }

    /// How long input polling may block before the next deadline
    pub fn timeout(&self) -> Duration {
        self.interval
            .checked_sub(self.last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_due_immediately() {
        let sched = TickScheduler::new(10_000);
        assert!(!sched.due());
        assert!(sched.timeout() <= Duration::from_millis(10_000));
    }

    #[test]
    fn test_due_after_interval_elapses() {
        let mut sched = TickScheduler::new(10_000);
        // Backdate the last tick instead of sleeping.
        sched.last_tick = Instant::now() - Duration::from_millis(10_001);
        assert!(sched.due());
        assert_eq!(sched.timeout(), Duration::from_secs(0));

        sched.advance();
        assert!(!sched.due());
    }

    #[test]
    fn test_arm_changes_period() {
        let mut sched = TickScheduler::new(200);
        sched.arm(50);
        assert_eq!(sched.interval_ms(), 50);

        sched.last_tick = Instant::now() - Duration::from_millis(60);
        assert!(sched.due());
    }
}
