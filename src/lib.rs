//! # even-odd
//!
//! Headless core of an educational game that teaches children to classify
//! numbers as even or odd.
//!
//! ## Design Principles
//!
//! 1. **One Controller**: Every tier plays through the same
//!    `LevelController`. Tiers differ only in their `DifficultyTier`
//!    descriptor (range, numbers per round, presentation mode).
//!
//! 2. **Explicit State**: `GameState` is owned by the controller and only
//!    changes through named transitions. No globals.
//!
//! 3. **Keys, Not Text**: The core emits semantic keys (`great_job`,
//!    `almost_there`); presentation translates them.
//!
//! ## Timing
//!
//! The caller feeds elapsed time (`advance_time`) or fires tokens from its
//! own timers (`fire_advance`). Tokens are keyed by a session generation
//! that changes on restart and navigation, so late callbacks are dropped.
//!
//! ## Modules
//!
//! - `core`: Parity, session state, RNG, configuration, errors
//! - `rounds`: Tiers, rounds, round generation, place-value columns
//! - `rules`: Answer validation
//! - `levels`: Level controller, timers, partition mode, feedback
//! - `locale`: Locales, locale persistence, translation seam

pub mod core;
pub mod rounds;
pub mod rules;
pub mod levels;
pub mod locale;

// Re-export commonly used types
pub use crate::core::{
    Error, Result,
    GameConfig, GameRng, GameRngState,
    GameState, SessionPhase, Parity, format_elapsed,
};

pub use crate::rounds::{
    DifficultyTier, DigitCount, PresentationMode,
    Round, RoundGenerator, RoundSource, ScriptedRounds,
    place_value, PlaceValue,
};

pub use crate::rules::{AnswerValidator, Labels, NumberMark, ParityValidator, Verdict};

pub use crate::levels::{
    LevelController, GameSnapshot, Rejection, Submission, TimeReport,
    FeedbackKey, RoundResult,
    Bucket, Partition,
    AdvanceToken,
};

pub use crate::locale::{
    Locale, PreferenceStore, MemoryStore, FileStore,
    Translator, TranslationTable,
    load_locale, save_locale, LANGUAGE_KEY,
};
