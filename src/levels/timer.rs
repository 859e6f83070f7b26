//! Session timers driven by elapsed real time.
//!
//! Two timers exist per session:
//! - `TickTimer`: repeating, one tick per interval while the session plays
//! - `Countdown`: one-shot delay before the next round appears
//!
//! Both are fed `Duration`s by the caller, so no wall clock is read here.
//! Scheduled work carries an `AdvanceToken`; a token from an older
//! generation is stale and must be discarded.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Identifies one scheduled advancement.
///
/// `generation` changes on every restart or navigation; `serial` changes
/// on every scheduled advancement within a generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AdvanceToken {
    pub generation: u64,
    pub serial: u64,
}

/// Repeating tick accumulator.
#[derive(Clone, Debug)]
pub struct TickTimer {
    interval: Duration,
    accumulated: Duration,
}

impl TickTimer {
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        assert!(!interval.is_zero(), "Tick interval must be non-zero");
        Self {
            interval,
            accumulated: Duration::ZERO,
        }
    }

    /// Feed elapsed time; returns how many whole ticks fell due.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        self.accumulated += elapsed;
        let mut ticks = 0;
        while self.accumulated >= self.interval {
            self.accumulated -= self.interval;
            ticks += 1;
        }
        ticks
    }

    /// Drop any partial interval.
    pub fn cancel(&mut self) {
        self.accumulated = Duration::ZERO;
    }
}

/// One-shot delay bound to a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Countdown {
    token: AdvanceToken,
    remaining: Duration,
}

impl Countdown {
    #[must_use]
    pub fn new(token: AdvanceToken, delay: Duration) -> Self {
        Self {
            token,
            remaining: delay,
        }
    }

    #[must_use]
    pub fn token(&self) -> AdvanceToken {
        self.token
    }

    #[must_use]
    pub fn remaining(&self) -> Duration {
        self.remaining
    }

    /// Feed elapsed time; true once the delay has run out.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        self.remaining = self.remaining.saturating_sub(elapsed);
        self.is_due()
    }

    #[must_use]
    pub fn is_due(&self) -> bool {
        self.remaining.is_zero()
    }
}
