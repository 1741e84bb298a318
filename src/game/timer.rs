//! Rush countdown timer
//!
//! Whole-second countdown fed with variable frame deltas. Partial seconds are
//! carried between updates; a frozen update throws the elapsed time away.

use std::time::Duration;

const TICK: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RushTimer {
    reload_seconds: u32,
    seconds_left: u32,
    accumulator: Duration,
}

impl RushTimer {
    /// Countdown of `reload_seconds`, never less than one second
    #[must_use]
    pub const fn new(reload_seconds: u32) -> Self {
        let reload_seconds = if reload_seconds == 0 { 1 } else { reload_seconds };
        Self {
            reload_seconds,
            seconds_left: reload_seconds,
            accumulator: Duration::ZERO,
        }
    }

    /// Refill to the full countdown
    pub const fn reload(&mut self) {
        self.seconds_left = self.reload_seconds;
        self.accumulator = Duration::ZERO;
    }

    #[must_use]
    pub const fn seconds_left(&self) -> u32 {
        self.seconds_left
    }

    #[must_use]
    pub const fn reload_seconds(&self) -> u32 {
        self.reload_seconds
    }

    #[must_use]
    pub const fn is_expired(&self) -> bool {
        self.seconds_left == 0
    }

    /// Add elapsed time, decrementing once per whole second
    ///
    /// Returns true when this update ran the countdown to zero. Time beyond
    /// the expiring second is dropped.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        if self.is_expired() {
            return false;
        }

        self.accumulator += elapsed;
        while self.accumulator >= TICK {
            self.accumulator -= TICK;
            self.seconds_left -= 1;

            if self.seconds_left == 0 {
                self.accumulator = Duration::ZERO;
                return true;
            }
        }

        false
    }

    /// Drop any carried partial second without counting down
    pub const fn hold(&mut self) {
        self.accumulator = Duration::ZERO;
    }
}
