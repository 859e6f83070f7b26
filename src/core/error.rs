//! Error types for the game core.
//!
//! Only configuration mistakes and persistence failures are errors. Rejected
//! player input is reported through `Rejection` instead.

use thiserror::Error;

/// Core errors.
#[derive(Error, Debug)]
pub enum Error {
    /// Pro tier digit count outside the supported range.
    #[error("invalid digit count {digits}: expected {min}..={max}")]
    InvalidDigitCount { digits: u32, min: u32, max: u32 },

    /// Game configuration that cannot produce a playable session.
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),

    /// Preference store I/O failure.
    #[error("preference store I/O: {0}")]
    Store(#[from] std::io::Error),

    /// Preference store contents could not be encoded or decoded.
    #[error("preference store codec: {0}")]
    Codec(#[from] bincode::Error),
}

/// Result alias using the core error type.
pub type Result<T> = std::result::Result<T, Error>;
