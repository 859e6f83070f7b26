//! Game configuration.
//!
//! Tuning values shared by every tier. Tier-specific parameters (range,
//! cardinality, presentation mode) live on `DifficultyTier` instead.
//!
//! Invalid values are programming errors and panic at construction.
//! Deserialized configs report them as `Error::InvalidConfig` instead.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::error::{Error, Result};

/// Lives at session start.
pub const DEFAULT_STARTING_LIVES: u8 = 3;

/// Correct answers that fill the progress ring.
pub const DEFAULT_RING_SIZE: u8 = 10;

/// Points awarded each time the progress ring fills.
pub const DEFAULT_POINTS_PER_RING: u32 = 100;

/// Complete game configuration.
///
/// Fields are only reachable through the builders and accessors, so every
/// instance has passed `check`. Deserialized configs are checked too.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ConfigFields")]
pub struct GameConfig {
    /// Lives at session start (and after reset).
    starting_lives: u8,

    /// Correct answers needed before the ring wraps and score increases.
    ring_size: u8,

    /// Score added on each ring wrap.
    points_per_ring: u32,

    /// Feedback display time between a resolved round and the next one.
    ///
    /// Submissions are rejected while this is pending.
    advance_delay: Duration,

    /// Real time per elapsed-seconds tick.
    tick_interval: Duration,

    /// Require the Beginner target to be split into two buckets before
    /// a choice is accepted.
    beginner_partition: bool,
}

/// Unchecked wire form of `GameConfig`.
#[derive(Deserialize)]
struct ConfigFields {
    starting_lives: u8,
    ring_size: u8,
    points_per_ring: u32,
    advance_delay: Duration,
    tick_interval: Duration,
    beginner_partition: bool,
}

impl TryFrom<ConfigFields> for GameConfig {
    type Error = Error;

    fn try_from(fields: ConfigFields) -> Result<Self> {
        let config = GameConfig {
            starting_lives: fields.starting_lives,
            ring_size: fields.ring_size,
            points_per_ring: fields.points_per_ring,
            advance_delay: fields.advance_delay,
            tick_interval: fields.tick_interval,
            beginner_partition: fields.beginner_partition,
        };
        config.check()?;
        Ok(config)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_lives: DEFAULT_STARTING_LIVES,
            ring_size: DEFAULT_RING_SIZE,
            points_per_ring: DEFAULT_POINTS_PER_RING,
            advance_delay: Duration::from_secs(2),
            tick_interval: Duration::from_secs(1),
            beginner_partition: false,
        }
    }
}

impl GameConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set starting lives.
    #[must_use]
    pub fn with_starting_lives(mut self, lives: u8) -> Self {
        self.starting_lives = lives;
        self.assert_valid();
        self
    }

    /// Set the progress ring size.
    #[must_use]
    pub fn with_ring_size(mut self, size: u8) -> Self {
        self.ring_size = size;
        self.assert_valid();
        self
    }

    /// Set the points awarded per filled ring.
    #[must_use]
    pub fn with_points_per_ring(mut self, points: u32) -> Self {
        self.points_per_ring = points;
        self
    }

    /// Set the feedback delay before the next round.
    #[must_use]
    pub fn with_advance_delay(mut self, delay: Duration) -> Self {
        self.advance_delay = delay;
        self
    }

    /// Set the elapsed-time tick interval.
    #[must_use]
    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        self.tick_interval = interval;
        self.assert_valid();
        self
    }

    /// Enable the Beginner partition (drag into two groups) mode.
    #[must_use]
    pub fn with_beginner_partition(mut self) -> Self {
        self.beginner_partition = true;
        self
    }

    /// Verify the configuration can produce a playable session.
    pub fn check(&self) -> Result<()> {
        if self.starting_lives == 0 {
            return Err(Error::InvalidConfig("Must start with at least 1 life"));
        }
        if self.ring_size == 0 {
            return Err(Error::InvalidConfig("Ring size must be at least 1"));
        }
        if self.tick_interval.is_zero() {
            return Err(Error::InvalidConfig("Tick interval must be non-zero"));
        }
        Ok(())
    }

    fn assert_valid(&self) {
        if let Err(err) = self.check() {
            panic!("{}", err);
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn starting_lives(&self) -> u8 {
        self.starting_lives
    }

    #[must_use]
    pub fn ring_size(&self) -> u8 {
        self.ring_size
    }

    #[must_use]
    pub fn points_per_ring(&self) -> u32 {
        self.points_per_ring
    }

    #[must_use]
    pub fn advance_delay(&self) -> Duration {
        self.advance_delay
    }

    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    #[must_use]
    pub fn beginner_partition(&self) -> bool {
        self.beginner_partition
    }
}
