//! Turns elapsed wall time into elapsed-timer ticks.
//!
//! Time only accrues while the schedule is armed. Disarming drops the
//! partial interval, so a restarted timer waits a full period for its
//! first tick.

use std::time::Duration;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TickSchedule {
    interval: Duration,
    carried: Duration,
    armed: bool,
}

impl TickSchedule {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.max(Duration::from_millis(1)),
            carried: Duration::ZERO,
            armed: false,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Follow the timer's `running` flag.
    pub fn sync(&mut self, running: bool) {
        if self.armed && !running {
            self.carried = Duration::ZERO;
        }
        self.armed = running;
    }

    /// Ticks due after `elapsed` more time has passed.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        if !self.armed {
            return 0;
        }
        self.carried += elapsed;
        let mut due = 0;
        while self.carried >= self.interval {
            self.carried -= self.interval;
            due += 1;
        }
        due
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disarmed_schedule_never_ticks() {
        let mut s = TickSchedule::new(Duration::from_secs(1));
        assert_eq!(s.advance(Duration::from_secs(10)), 0);
    }

    #[test]
    fn partial_intervals_carry_while_armed() {
        let mut s = TickSchedule::new(Duration::from_secs(1));
        s.sync(true);
        assert_eq!(s.advance(Duration::from_millis(600)), 0);
        assert_eq!(s.advance(Duration::from_millis(600)), 1);
        assert_eq!(s.advance(Duration::from_millis(2800)), 3);
    }

    #[test]
    fn stopping_drops_the_partial_interval() {
        let mut s = TickSchedule::new(Duration::from_secs(1));
        s.sync(true);
        assert_eq!(s.advance(Duration::from_millis(900)), 0);
        s.sync(false);
        s.sync(true);
        assert_eq!(s.advance(Duration::from_millis(900)), 0);
        assert_eq!(s.advance(Duration::from_millis(100)), 1);
    }
}
