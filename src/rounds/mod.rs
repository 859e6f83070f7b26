//! Difficulty tiers, rounds and round generation.
//!
//! Every tier shares one generator; only the `DifficultyTier` descriptor
//! (range, cardinality) differs between them.

pub mod tier;
pub mod round;
pub mod generator;
pub mod place_value;

pub use tier::{DifficultyTier, DigitCount, PresentationMode};
pub use round::Round;
pub use generator::{RoundGenerator, RoundSource, ScriptedRounds};
pub use place_value::{place_value, PlaceValue};
