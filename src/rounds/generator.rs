//! Round generation.
//!
//! `RoundSource` is the seam the level controller draws rounds through.
//! `RoundGenerator` is the random implementation used in play;
//! `ScriptedRounds` replays fixed rounds for demos and tests.

use std::collections::VecDeque;

use smallvec::SmallVec;

use crate::core::{GameRng, GameRngState};

use super::round::Round;
use super::tier::DifficultyTier;

/// Produces the next round for a tier.
pub trait RoundSource {
    /// Produce a round for `tier`.
    ///
    /// `previous` is the round just played, if any. Single-number tiers
    /// must not repeat its number.
    fn next_round(&mut self, tier: &DifficultyTier, previous: Option<&Round>) -> Round;
}

/// Random round generator.
///
/// Draws uniformly from the tier range and resamples until the
/// distinctness rule holds. Every tier range is at least ten wide, so
/// expected retries are O(1).
#[derive(Clone, Debug)]
pub struct RoundGenerator {
    rng: GameRng,
}

impl RoundGenerator {
    /// Deterministic generator from a seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }

    /// Generator seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: GameRng::from_entropy(),
        }
    }

    /// Capture the RNG position so a session can be replayed.
    #[must_use]
    pub fn checkpoint(&self) -> GameRngState {
        self.rng.state()
    }

    /// Resume from a captured RNG position.
    #[must_use]
    pub fn restore(state: &GameRngState) -> Self {
        Self {
            rng: GameRng::from_state(state),
        }
    }

    /// Generate a round for `tier`.
    pub fn generate(&mut self, tier: &DifficultyTier, previous: Option<&Round>) -> Round {
        let range = tier.range();

        if tier.is_single() {
            let last = previous.and_then(Round::single_number);
            loop {
                let n = self.rng.gen_range_inclusive(range.clone());
                if Some(n) != last {
                    return Round::single(n);
                }
            }
        }

        let mut numbers: SmallVec<[u32; 3]> = SmallVec::new();
        while numbers.len() < tier.cardinality() {
            let n = self.rng.gen_range_inclusive(range.clone());
            if !numbers.contains(&n) {
                numbers.push(n);
            }
        }
        Round::new(&numbers)
    }
}

impl RoundSource for RoundGenerator {
    fn next_round(&mut self, tier: &DifficultyTier, previous: Option<&Round>) -> Round {
        self.generate(tier, previous)
    }
}

/// Replays queued rounds, then falls back to random generation.
#[derive(Clone, Debug)]
pub struct ScriptedRounds {
    queue: VecDeque<Round>,
    fallback: RoundGenerator,
}

impl ScriptedRounds {
    /// Queue `rounds`; `seed` drives the fallback generator.
    pub fn new(rounds: impl IntoIterator<Item = Round>, seed: u64) -> Self {
        Self {
            queue: rounds.into_iter().collect(),
            fallback: RoundGenerator::new(seed),
        }
    }

    /// Append a round to the queue.
    pub fn push(&mut self, round: Round) {
        self.queue.push_back(round);
    }

    /// Rounds still queued.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl RoundSource for ScriptedRounds {
    fn next_round(&mut self, tier: &DifficultyTier, previous: Option<&Round>) -> Round {
        self.queue
            .pop_front()
            .unwrap_or_else(|| self.fallback.generate(tier, previous))
    }
}
