//! Session state: lives, score, progress ring, timer and play/pause flags.
//!
//! ## Phases
//!
//! ```text
//! Idle ──start──▶ Playing ◀──resume── Paused
//!                    │  └──pause──────▶ │
//!                    └─last life lost─▶ GameOver ──reset──▶ Idle
//! ```
//!
//! All mutation goes through the named transitions below. `reset` is
//! accepted from every phase.

use serde::{Deserialize, Serialize};

use super::config::GameConfig;

/// Derived lifecycle phase of a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Not started, or reset.
    Idle,
    /// Timer running, rounds accepted.
    Playing,
    /// Playing but suspended; the timer does not tick.
    Paused,
    /// All lives lost. Score and progress are kept until reset.
    GameOver,
}

/// Format seconds as zero-padded `mm:ss`. Minutes are not capped at 59.
#[must_use]
pub fn format_elapsed(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Mutable state of one play session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    lives: u8,
    score: u32,
    progress: u8,
    elapsed_seconds: u64,
    is_playing: bool,
    is_paused: bool,

    // === Rules (copied from config) ===
    starting_lives: u8,
    ring_size: u8,
    points_per_ring: u32,
}

impl GameState {
    /// Create a fresh, idle state.
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        Self {
            lives: config.starting_lives(),
            score: 0,
            progress: 0,
            elapsed_seconds: 0,
            is_playing: false,
            is_paused: false,
            starting_lives: config.starting_lives(),
            ring_size: config.ring_size(),
            points_per_ring: config.points_per_ring(),
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn lives(&self) -> u8 {
        self.lives
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Correct answers since the ring last wrapped.
    #[must_use]
    pub fn progress(&self) -> u8 {
        self.progress
    }

    #[must_use]
    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed_seconds
    }

    /// Elapsed time as `mm:ss`.
    #[must_use]
    pub fn elapsed_clock(&self) -> String {
        format_elapsed(self.elapsed_seconds)
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.is_paused
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        if self.lives == 0 {
            SessionPhase::GameOver
        } else if self.is_playing && self.is_paused {
            SessionPhase::Paused
        } else if self.is_playing {
            SessionPhase::Playing
        } else {
            SessionPhase::Idle
        }
    }

    /// True while the elapsed-time tick should run.
    #[must_use]
    pub fn is_ticking(&self) -> bool {
        self.phase() == SessionPhase::Playing
    }

    // === Transitions ===

    /// Idle → Playing. Returns false from any other phase.
    pub fn start(&mut self) -> bool {
        if self.phase() != SessionPhase::Idle {
            return false;
        }
        self.is_playing = true;
        self.is_paused = false;
        true
    }

    /// Playing → Paused.
    pub fn pause(&mut self) -> bool {
        if self.phase() != SessionPhase::Playing {
            return false;
        }
        self.is_paused = true;
        true
    }

    /// Paused → Playing.
    pub fn resume(&mut self) -> bool {
        if self.phase() != SessionPhase::Paused {
            return false;
        }
        self.is_paused = false;
        true
    }

    /// Single play/pause control: pauses when playing, resumes when paused.
    pub fn toggle_pause(&mut self) -> bool {
        match self.phase() {
            SessionPhase::Playing => self.pause(),
            SessionPhase::Paused => self.resume(),
            _ => false,
        }
    }

    /// One second of play time. Ignored unless Playing.
    pub fn tick(&mut self) -> bool {
        if !self.is_ticking() {
            return false;
        }
        self.elapsed_seconds += 1;
        true
    }

    /// Count a correct answer.
    ///
    /// Returns true when the ring wrapped and the score increased.
    pub fn record_correct(&mut self) -> bool {
        self.progress += 1;
        if self.progress >= self.ring_size {
            self.progress = 0;
            self.score += self.points_per_ring;
            tracing::debug!(score = self.score, "progress ring filled");
            return true;
        }
        false
    }

    /// Count an incorrect answer.
    ///
    /// Returns true if this answer ended the session.
    pub fn record_incorrect(&mut self) -> bool {
        if self.lives == 0 {
            return false;
        }
        self.lives -= 1;
        if self.lives == 0 {
            self.is_playing = false;
            self.is_paused = false;
            return true;
        }
        false
    }

    /// Back to initial values, from any phase.
    pub fn reset(&mut self) {
        self.lives = self.starting_lives;
        self.score = 0;
        self.progress = 0;
        self.elapsed_seconds = 0;
        self.is_playing = false;
        self.is_paused = false;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}
