//! Core types: parity, session state, RNG, configuration, errors.
//!
//! These are shared by every tier. Tier-specific behaviour lives in
//! `rounds` and is driven by `levels`.

pub mod parity;
pub mod rng;
pub mod config;
pub mod state;
pub mod error;

pub use parity::Parity;
pub use rng::{GameRng, GameRngState};
pub use config::GameConfig;
pub use state::{format_elapsed, GameState, SessionPhase};
pub use error::{Error, Result};
