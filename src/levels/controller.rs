//! Level controller: glues round generation, validation and session state
//! into one playable round-trip for any tier.
//!
//! ## Round lifecycle
//!
//! 1. `start_level` resets the session and deals the first round.
//! 2. The player answers via `choose` (single-number tiers) or `label` +
//!    `submit_labels` (Pro). Incomplete answers are rejected, not faults.
//! 3. A resolved round locks until the advancement delay runs out, either
//!    through `advance_time` or an external timer calling `fire_advance`.
//! 4. Losing the last life ends the session: no round is dealt until
//!    `restart` or a new `start_level`.
//!
//! Restart and navigation bump the generation, so advancement tokens from
//! before are ignored.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

use crate::core::{GameConfig, GameState, Parity, Result, SessionPhase};
use crate::rounds::{DifficultyTier, Round, RoundGenerator, RoundSource};
use crate::rules::{AnswerValidator, Labels, ParityValidator};

use super::feedback::{feedback_for, RoundResult};
use super::partition::{Bucket, Partition};
use super::timer::{AdvanceToken, Countdown, TickTimer};

/// Why an action was ignored. No state changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("no round in play")]
    NoRound,
    #[error("session is paused")]
    Paused,
    #[error("round is locked until the next one is dealt")]
    Locked,
    #[error("{missing} number(s) still unlabelled")]
    Incomplete { missing: usize },
    #[error("{remaining} item(s) not placed in a group")]
    Unplaced { remaining: usize },
    #[error("number {0} is not in this round")]
    UnknownNumber(u32),
    #[error("item {0} does not exist")]
    UnknownItem(usize),
    #[error("a single choice cannot answer a multi-number round")]
    NeedsLabels,
    #[error("partition mode is not active")]
    NoPartition,
}

/// A player's answer for the current round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Submission {
    /// One label for a single-number round.
    Choice(Parity),
    /// A label per number.
    Labels(Labels),
}

/// Result of feeding elapsed time to the controller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TimeReport {
    /// Elapsed-seconds ticks applied.
    pub ticks: u32,
    /// A new round was dealt.
    pub advanced: bool,
}

/// Read-only view for rendering.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub tier: Option<DifficultyTier>,
    pub phase: SessionPhase,
    pub lives: u8,
    pub score: u32,
    pub progress: u8,
    pub elapsed_seconds: u64,
    pub is_playing: bool,
    pub is_paused: bool,
    pub current_round: Option<Round>,
    /// Labels chosen so far, sorted by number.
    pub labels: Vec<(u32, Parity)>,
    pub partition: Option<Partition>,
    pub last_result: Option<RoundResult>,
    /// Feedback is showing and the next round is pending.
    pub awaiting_advance: bool,
    /// A submission right now would be accepted.
    pub can_submit: bool,
}

/// One controller for every tier.
pub struct LevelController<S = RoundGenerator, V = ParityValidator> {
    config: GameConfig,
    state: GameState,
    source: S,
    validator: V,

    tier: Option<DifficultyTier>,
    round: Option<Round>,
    labels: Labels,
    partition: Option<Partition>,
    last_result: Option<RoundResult>,

    // === Timers ===
    generation: u64,
    serial: u64,
    pending: Option<Countdown>,
    ticker: TickTimer,
}

impl LevelController {
    /// Controller with an entropy-seeded generator.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self::with_parts(config, RoundGenerator::from_entropy(), ParityValidator)
    }

    /// Controller with a deterministic generator.
    #[must_use]
    pub fn seeded(config: GameConfig, seed: u64) -> Self {
        Self::with_parts(config, RoundGenerator::new(seed), ParityValidator)
    }
}

impl<S: RoundSource, V: AnswerValidator> LevelController<S, V> {
    /// Controller over a custom round source and validator.
    pub fn with_parts(config: GameConfig, source: S, validator: V) -> Self {
        Self {
            state: GameState::new(&config),
            ticker: TickTimer::new(config.tick_interval()),
            config,
            source,
            validator,
            tier: None,
            round: None,
            labels: Labels::default(),
            partition: None,
            last_result: None,
            generation: 0,
            serial: 0,
            pending: None,
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn tier(&self) -> Option<DifficultyTier> {
        self.tier
    }

    #[must_use]
    pub fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    #[must_use]
    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    #[must_use]
    pub fn partition(&self) -> Option<&Partition> {
        self.partition.as_ref()
    }

    #[must_use]
    pub fn last_result(&self) -> Option<&RoundResult> {
        self.last_result.as_ref()
    }

    /// Current session generation.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Token of the pending advancement, if feedback is showing.
    #[must_use]
    pub fn pending_advance(&self) -> Option<AdvanceToken> {
        self.pending.map(|c| c.token())
    }

    /// Time left before the pending round is dealt.
    #[must_use]
    pub fn advance_remaining(&self) -> Option<Duration> {
        self.pending.map(|c| c.remaining())
    }

    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }

    // === Session lifecycle ===

    /// Start a fresh session on `tier` and deal its first round.
    ///
    /// Any session in progress is discarded.
    pub fn start_level(&mut self, tier: DifficultyTier) -> &Round {
        self.invalidate();
        self.state.reset();
        self.tier = Some(tier);
        self.last_result = None;
        self.state.start();
        tracing::info!(%tier, generation = self.generation, "level started");
        self.deal(tier, None)
    }

    /// Start the Pro tier with `digits`-digit numbers.
    ///
    /// Fails on a digit count outside 4..=9 instead of clamping it.
    pub fn start_pro(&mut self, digits: u32) -> Result<&Round> {
        let tier = DifficultyTier::pro(digits)?;
        Ok(self.start_level(tier))
    }

    /// Reset the session and start the current tier over.
    ///
    /// With no tier selected this only resets.
    pub fn restart(&mut self) -> Option<&Round> {
        tracing::info!(generation = self.generation, "restart requested");
        match self.tier {
            Some(tier) => Some(self.start_level(tier)),
            None => {
                self.invalidate();
                self.state.reset();
                None
            }
        }
    }

    /// Leave the level for the tier selector.
    pub fn navigate_back(&mut self) {
        self.invalidate();
        self.state.reset();
        self.tier = None;
        self.round = None;
        self.labels.clear();
        self.partition = None;
        self.last_result = None;
        tracing::info!(generation = self.generation, "returned to selector");
    }

    pub fn pause(&mut self) -> bool {
        if self.state.pause() {
            self.ticker.cancel();
            return true;
        }
        false
    }

    pub fn resume(&mut self) -> bool {
        self.state.resume()
    }

    /// Single play/pause control.
    pub fn toggle_pause(&mut self) -> bool {
        match self.state.phase() {
            SessionPhase::Playing => self.pause(),
            SessionPhase::Paused => self.resume(),
            _ => false,
        }
    }

    // === Answers ===

    /// Answer a single-number round.
    pub fn choose(&mut self, parity: Parity) -> std::result::Result<RoundResult, Rejection> {
        self.submit(Submission::Choice(parity))
    }

    /// Label one number of the current round. Relabelling overwrites.
    pub fn label(&mut self, number: u32, parity: Parity) -> std::result::Result<(), Rejection> {
        let round = self.check_open()?;
        if !round.contains(number) {
            return Err(Rejection::UnknownNumber(number));
        }
        self.labels.insert(number, parity);
        Ok(())
    }

    /// Remove the label from one number.
    pub fn clear_label(&mut self, number: u32) -> std::result::Result<(), Rejection> {
        let round = self.check_open()?;
        if !round.contains(number) {
            return Err(Rejection::UnknownNumber(number));
        }
        self.labels.remove(&number);
        Ok(())
    }

    /// Submit the labels collected through `label`.
    pub fn submit_labels(&mut self) -> std::result::Result<RoundResult, Rejection> {
        self.submit(Submission::Labels(self.labels.clone()))
    }

    /// Place a partition item into a group.
    pub fn place_item(&mut self, item: usize, bucket: Bucket) -> std::result::Result<(), Rejection> {
        self.check_open()?;
        let partition = self.partition.as_mut().ok_or(Rejection::NoPartition)?;
        if !partition.place(item, bucket) {
            return Err(Rejection::UnknownItem(item));
        }
        Ok(())
    }

    /// Take a partition item back out of its group.
    pub fn remove_item(&mut self, item: usize) -> std::result::Result<(), Rejection> {
        self.check_open()?;
        let partition = self.partition.as_mut().ok_or(Rejection::NoPartition)?;
        if item >= partition.items() {
            return Err(Rejection::UnknownItem(item));
        }
        partition.remove(item);
        Ok(())
    }

    /// Resolve the current round.
    ///
    /// On acceptance the round is validated, the session updated, and the
    /// round locked until the next one is dealt.
    pub fn submit(&mut self, submission: Submission) -> std::result::Result<RoundResult, Rejection> {
        let round = self.check_open()?.clone();
        let tier = self.tier.ok_or(Rejection::NoRound)?;

        if let Some(partition) = &self.partition {
            if !partition.is_complete() {
                return Err(Rejection::Unplaced {
                    remaining: partition.unplaced(),
                });
            }
        }

        let labels: Labels = match submission {
            Submission::Choice(parity) => {
                let number = round.single_number().ok_or(Rejection::NeedsLabels)?;
                std::iter::once((number, parity)).collect()
            }
            Submission::Labels(labels) => labels,
        };

        if let Some(&unknown) = labels.keys().find(|&&n| !round.contains(n)) {
            return Err(Rejection::UnknownNumber(unknown));
        }
        let missing = round
            .numbers()
            .iter()
            .filter(|n| !labels.contains_key(n))
            .count();
        if missing > 0 {
            return Err(Rejection::Incomplete { missing });
        }

        let verdict = self.validator.validate_round(&round, &labels);
        let (feedback, hint) = feedback_for(&tier, &round, &verdict);

        let mut ring_filled = false;
        let mut session_ended = false;
        if verdict.correct {
            ring_filled = self.state.record_correct();
        } else {
            session_ended = self.state.record_incorrect();
        }

        let advance = if session_ended {
            self.ticker.cancel();
            self.round = None;
            self.partition = None;
            tracing::info!(
                score = self.state.score(),
                elapsed = self.state.elapsed_seconds(),
                "game over"
            );
            None
        } else {
            self.serial += 1;
            let token = AdvanceToken {
                generation: self.generation,
                serial: self.serial,
            };
            self.pending = Some(Countdown::new(token, self.config.advance_delay()));
            Some(token)
        };

        tracing::debug!(
            correct = verdict.correct,
            lives = self.state.lives(),
            progress = self.state.progress(),
            score = self.state.score(),
            "round resolved"
        );

        self.labels = labels;
        let result = RoundResult {
            tier,
            round,
            verdict,
            feedback,
            hint,
            ring_filled,
            session_ended,
            advance,
        };
        self.last_result = Some(result.clone());
        Ok(result)
    }

    // === Timers ===

    /// Feed elapsed real time to both timers.
    ///
    /// Ticks only count while Playing. The advancement delay runs in any
    /// phase once scheduled.
    pub fn advance_time(&mut self, elapsed: Duration) -> TimeReport {
        let mut report = TimeReport::default();

        if self.state.is_ticking() {
            report.ticks = self.ticker.advance(elapsed);
            for _ in 0..report.ticks {
                self.state.tick();
            }
        }

        let due = self
            .pending
            .as_mut()
            .map(|countdown| countdown.advance(elapsed))
            .unwrap_or(false);
        if due {
            report.advanced = self.advance_round();
        }

        report
    }

    /// Deal the pending round now, for callers that run their own timer.
    ///
    /// Returns false and changes nothing if `token` is stale.
    pub fn fire_advance(&mut self, token: AdvanceToken) -> bool {
        match self.pending_advance() {
            Some(pending) if pending == token && token.generation == self.generation => {
                self.advance_round()
            }
            _ => {
                tracing::debug!(?token, generation = self.generation, "discarding stale advancement");
                false
            }
        }
    }

    // === Snapshot ===

    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        let mut labels: Vec<(u32, Parity)> = self.labels.iter().map(|(&n, &p)| (n, p)).collect();
        labels.sort_unstable_by_key(|(n, _)| *n);

        GameSnapshot {
            tier: self.tier,
            phase: self.state.phase(),
            lives: self.state.lives(),
            score: self.state.score(),
            progress: self.state.progress(),
            elapsed_seconds: self.state.elapsed_seconds(),
            is_playing: self.state.is_playing(),
            is_paused: self.state.is_paused(),
            current_round: self.round.clone(),
            labels,
            partition: self.partition.clone(),
            last_result: self.last_result.clone(),
            awaiting_advance: self.pending.is_some(),
            can_submit: self.can_submit(),
        }
    }

    /// Would a submission of the current labels be accepted?
    #[must_use]
    pub fn can_submit(&self) -> bool {
        let Ok(round) = self.check_open() else {
            return false;
        };
        let placed = self.partition.as_ref().map_or(true, Partition::is_complete);
        let labelled = round.len() == 1 || round.numbers().iter().all(|n| self.labels.contains_key(n));
        placed && labelled
    }

    // === Internals ===

    /// The current round, if it accepts input.
    fn check_open(&self) -> std::result::Result<&Round, Rejection> {
        let round = self.round.as_ref().ok_or(Rejection::NoRound)?;
        match self.state.phase() {
            SessionPhase::Playing => {}
            SessionPhase::Paused => return Err(Rejection::Paused),
            SessionPhase::Idle | SessionPhase::GameOver => return Err(Rejection::NoRound),
        }
        if self.pending.is_some() {
            return Err(Rejection::Locked);
        }
        Ok(round)
    }

    fn deal(&mut self, tier: DifficultyTier, previous: Option<&Round>) -> &Round {
        let round = self.source.next_round(&tier, previous);
        tracing::debug!(%tier, numbers = ?round.numbers(), "round dealt");

        self.labels.clear();
        self.partition = if self.config.beginner_partition() && tier == DifficultyTier::Beginner {
            round.single_number().map(Partition::new)
        } else {
            None
        };
        self.round.insert(round)
    }

    fn advance_round(&mut self) -> bool {
        self.pending = None;
        let Some(tier) = self.tier else {
            return false;
        };
        let previous = self.round.take();
        self.deal(tier, previous.as_ref());
        true
    }

    /// Cancel both timers and invalidate outstanding tokens.
    fn invalidate(&mut self) {
        self.generation += 1;
        self.serial = 0;
        self.pending = None;
        self.ticker.cancel();
    }
}
