//! Difficulty tiers.
//!
//! A tier fixes the number range, how many numbers a round holds, and how
//! the presentation layer should draw them. It never changes game-state
//! rules.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

use crate::core::error::{Error, Result};

/// Digit count for the Pro tier, always within `MIN..=MAX`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct DigitCount(u32);

impl DigitCount {
    pub const MIN: u32 = 4;
    pub const MAX: u32 = 9;

    /// Validate a digit count. Values outside `MIN..=MAX` are a config error.
    pub fn new(digits: u32) -> Result<Self> {
        if (Self::MIN..=Self::MAX).contains(&digits) {
            Ok(Self(digits))
        } else {
            Err(Error::InvalidDigitCount {
                digits,
                min: Self::MIN,
                max: Self::MAX,
            })
        }
    }

    /// Get the raw digit count.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Every valid digit count, smallest first.
    pub fn all() -> impl Iterator<Item = DigitCount> {
        (Self::MIN..=Self::MAX).map(DigitCount)
    }
}

impl Default for DigitCount {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

impl TryFrom<u32> for DigitCount {
    type Error = Error;

    fn try_from(digits: u32) -> Result<Self> {
        Self::new(digits)
    }
}

impl From<DigitCount> for u32 {
    fn from(digits: DigitCount) -> u32 {
        digits.0
    }
}

/// How the presentation layer is expected to draw a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PresentationMode {
    /// Unit rods the child can split into two groups.
    Rods,
    /// Hundreds/tens/units columns.
    PlaceValue,
    /// Millions/thousands/units class table, one per number.
    ClassTable,
}

/// One of the four difficulty levels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DifficultyTier {
    /// 1..=10, one number.
    Beginner,
    /// 11..=31, one number.
    Intermediate,
    /// 100..=999, one number.
    Advanced,
    /// `digits`-digit numbers, three per round.
    Pro(DigitCount),
}

impl DifficultyTier {
    /// Pro tier with the given digit count.
    ///
    /// ```
    /// use even_odd::rounds::DifficultyTier;
    ///
    /// let tier = DifficultyTier::pro(6).unwrap();
    /// assert_eq!(tier.range(), 100_000..=999_999);
    /// assert!(DifficultyTier::pro(10).is_err());
    /// ```
    pub fn pro(digits: u32) -> Result<Self> {
        Ok(DifficultyTier::Pro(DigitCount::new(digits)?))
    }

    /// Inclusive range numbers are drawn from.
    #[must_use]
    pub fn range(&self) -> RangeInclusive<u32> {
        match self {
            DifficultyTier::Beginner => 1..=10,
            DifficultyTier::Intermediate => 11..=31,
            DifficultyTier::Advanced => 100..=999,
            DifficultyTier::Pro(digits) => {
                let d = digits.get();
                10u32.pow(d - 1)..=10u32.pow(d) - 1
            }
        }
    }

    /// Numbers per round.
    #[must_use]
    pub fn cardinality(&self) -> usize {
        match self {
            DifficultyTier::Pro(_) => 3,
            _ => 1,
        }
    }

    /// True for tiers whose rounds hold a single number.
    #[must_use]
    pub fn is_single(&self) -> bool {
        self.cardinality() == 1
    }

    #[must_use]
    pub fn presentation(&self) -> PresentationMode {
        match self {
            DifficultyTier::Beginner => PresentationMode::Rods,
            DifficultyTier::Intermediate | DifficultyTier::Advanced => PresentationMode::PlaceValue,
            DifficultyTier::Pro(_) => PresentationMode::ClassTable,
        }
    }

    /// Translation key for the tier title.
    #[must_use]
    pub fn title_key(&self) -> &'static str {
        match self {
            DifficultyTier::Beginner => "beginner_level",
            DifficultyTier::Intermediate => "intermediate_level",
            DifficultyTier::Advanced => "advanced_level",
            DifficultyTier::Pro(_) => "pro_level",
        }
    }
}

impl std::fmt::Display for DifficultyTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DifficultyTier::Beginner => f.write_str("Beginner"),
            DifficultyTier::Intermediate => f.write_str("Intermediate"),
            DifficultyTier::Advanced => f.write_str("Advanced"),
            DifficultyTier::Pro(digits) => write!(f, "Pro({} digits)", digits.get()),
        }
    }
}
