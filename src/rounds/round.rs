//! Rounds: the target numbers presented for one classification.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::Parity;

/// One round of target numbers.
///
/// Immutable once built. Single-number tiers hold one number, Pro holds
/// three. SmallVec keeps every round inline.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Round {
    numbers: SmallVec<[u32; 3]>,
}

impl Round {
    /// Build a round from its target numbers.
    ///
    /// Normally produced by a `RoundSource`.
    #[must_use]
    pub fn new(numbers: &[u32]) -> Self {
        assert!(!numbers.is_empty(), "Round must hold at least 1 number");
        Self {
            numbers: SmallVec::from_slice(numbers),
        }
    }

    /// Single-number round.
    #[must_use]
    pub fn single(number: u32) -> Self {
        Self::new(&[number])
    }

    #[must_use]
    pub fn numbers(&self) -> &[u32] {
        &self.numbers
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    /// Always false; rounds hold at least one number.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }

    #[must_use]
    pub fn contains(&self, number: u32) -> bool {
        self.numbers.contains(&number)
    }

    /// The number of a single-number round.
    #[must_use]
    pub fn single_number(&self) -> Option<u32> {
        match self.numbers.as_slice() {
            [n] => Some(*n),
            _ => None,
        }
    }

    /// Ground truth for every number, in order.
    pub fn parities(&self) -> impl Iterator<Item = (u32, Parity)> + '_ {
        self.numbers.iter().map(|&n| (n, Parity::of(i64::from(n))))
    }
}
