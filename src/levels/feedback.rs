//! Round results and the semantic feedback keys shown with them.
//!
//! The core never holds display text. Presentation resolves keys through a
//! `Translator`.

use serde::{Deserialize, Serialize};

use crate::rounds::{DifficultyTier, Round};
use crate::rules::Verdict;

use super::timer::AdvanceToken;

/// Feedback message keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeedbackKey {
    /// Correct answer.
    GreatJob,
    /// Incorrect answer.
    AlmostThere,
    /// An odd Beginner number was called even: one item has no partner.
    OopsNoPair,
}

impl FeedbackKey {
    /// Translation key.
    #[must_use]
    pub const fn as_key(self) -> &'static str {
        match self {
            FeedbackKey::GreatJob => "great_job",
            FeedbackKey::AlmostThere => "almost_there",
            FeedbackKey::OopsNoPair => "oops_no_pair",
        }
    }
}

impl std::fmt::Display for FeedbackKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_key())
    }
}

/// Outcome of one resolved round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    pub tier: DifficultyTier,
    pub round: Round,
    pub verdict: Verdict,
    pub feedback: FeedbackKey,
    /// Extra explanation shown under the feedback line.
    pub hint: Option<FeedbackKey>,
    /// The progress ring wrapped and the score increased.
    pub ring_filled: bool,
    /// The last life was lost; no further round will follow.
    pub session_ended: bool,
    /// Token for the pending next round. `None` once the session ended.
    pub advance: Option<AdvanceToken>,
}

impl RoundResult {
    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.verdict.correct
    }

    /// Whether presentation should play the success celebration.
    #[must_use]
    pub fn celebrate(&self) -> bool {
        self.verdict.correct
    }
}

/// Pick the feedback line and optional hint for a verdict.
pub(crate) fn feedback_for(
    tier: &DifficultyTier,
    round: &Round,
    verdict: &Verdict,
) -> (FeedbackKey, Option<FeedbackKey>) {
    if verdict.correct {
        return (FeedbackKey::GreatJob, None);
    }

    let odd_target = round.single_number().map(|n| n % 2 == 1).unwrap_or(false);
    let hint = (*tier == DifficultyTier::Beginner && odd_target).then_some(FeedbackKey::OopsNoPair);
    (FeedbackKey::AlmostThere, hint)
}
