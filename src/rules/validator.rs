//! Answer validation.
//!
//! Validation is a query: it never mutates session state.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::Parity;
use crate::rounds::Round;

/// Labels submitted for a round, keyed by target number.
pub type Labels = FxHashMap<u32, Parity>;

/// Outcome for one number of a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberMark {
    pub number: u32,
    /// `None` if the number was never labelled.
    pub submitted: Option<Parity>,
    pub correct: bool,
}

/// Outcome for a whole round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    /// AND over every number's mark.
    pub correct: bool,
    pub marks: SmallVec<[NumberMark; 3]>,
}

/// Checks submitted labels against ground truth.
///
/// ## Implementation Notes
///
/// - `validate`: the single-number rule; must hold for zero and negatives
/// - `validate_round`: provided; one wrong or missing label fails the round
pub trait AnswerValidator {
    /// Is `label` the right classification for `number`?
    fn validate(&self, number: i64, label: Parity) -> bool;

    /// Validate every number of a round.
    fn validate_round(&self, round: &Round, labels: &Labels) -> Verdict {
        let marks: SmallVec<[NumberMark; 3]> = round
            .numbers()
            .iter()
            .map(|&number| {
                let submitted = labels.get(&number).copied();
                let correct = submitted
                    .map(|label| self.validate(i64::from(number), label))
                    .unwrap_or(false);
                NumberMark {
                    number,
                    submitted,
                    correct,
                }
            })
            .collect();

        Verdict {
            correct: marks.iter().all(|m| m.correct),
            marks,
        }
    }
}

/// Standard even/odd validator.
#[derive(Clone, Copy, Debug, Default)]
pub struct ParityValidator;

impl AnswerValidator for ParityValidator {
    fn validate(&self, number: i64, label: Parity) -> bool {
        match label {
            Parity::Even => number % 2 == 0,
            Parity::Odd => number % 2 != 0,
        }
    }
}
