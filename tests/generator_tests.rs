//! Round generation and validation property tests.
//!
//! These tests verify the distinctness rules of every tier and the parity
//! rule over the whole integer range.

use even_odd::core::Parity;
use even_odd::rounds::{DifficultyTier, DigitCount, RoundGenerator};
use even_odd::rules::{AnswerValidator, Labels, ParityValidator};
use proptest::prelude::*;

// =============================================================================
// Generation
// =============================================================================

/// Test that single-number tiers never repeat the previous number.
#[test]
fn test_no_immediate_repeat_10k() {
    for tier in [
        DifficultyTier::Beginner,
        DifficultyTier::Intermediate,
        DifficultyTier::Advanced,
    ] {
        let mut generator = RoundGenerator::new(2024);
        let mut previous = generator.generate(&tier, None);

        for _ in 0..10_000 {
            let next = generator.generate(&tier, Some(&previous));
            let n = next.single_number().unwrap();
            assert_ne!(Some(n), previous.single_number(), "{} repeated {}", tier, n);
            assert!(tier.range().contains(&n));
            previous = next;
        }
    }
}

/// Test that every Beginner value is reachable.
#[test]
fn test_beginner_covers_range() {
    let mut generator = RoundGenerator::new(11);
    let mut seen = [false; 11];

    let mut previous = None;
    for _ in 0..2_000 {
        let round = generator.generate(&DifficultyTier::Beginner, previous.as_ref());
        seen[round.single_number().unwrap() as usize] = true;
        previous = Some(round);
    }

    assert!(!seen[0]);
    assert!(seen[1..].iter().all(|&s| s));
}

/// Test that Pro rounds hold three distinct in-range numbers for every digit count.
#[test]
fn test_pro_distinct_all_digit_counts() {
    let mut generator = RoundGenerator::new(77);

    for digits in DigitCount::all() {
        let tier = DifficultyTier::Pro(digits);
        let range = tier.range();

        for _ in 0..2_000 {
            let round = generator.generate(&tier, None);
            let n = round.numbers();
            assert_eq!(n.len(), 3);
            assert!(n[0] != n[1] && n[0] != n[2] && n[1] != n[2]);
            assert!(n.iter().all(|x| range.contains(x)));
            assert_eq!(n[0].to_string().len() as u32, digits.get());
        }
    }
}

// =============================================================================
// Validation
// =============================================================================

proptest! {
    /// validate(n, even) matches n % 2 == 0 for every integer.
    #[test]
    fn prop_even_rule(n in any::<i64>()) {
        prop_assert_eq!(ParityValidator.validate(n, Parity::Even), n % 2 == 0);
        prop_assert_eq!(ParityValidator.validate(n, Parity::Odd), n % 2 != 0);
    }

    /// Exactly one label is correct for any number.
    #[test]
    fn prop_exactly_one_label(n in any::<i64>()) {
        let even = ParityValidator.validate(n, Parity::Even);
        let odd = ParityValidator.validate(n, Parity::Odd);
        prop_assert!(even ^ odd);
        prop_assert!(ParityValidator.validate(n, Parity::of(n)));
    }

    /// A Pro round passes only when every label is right.
    #[test]
    fn prop_round_is_and(seed in any::<u64>(), wrong in 0usize..4) {
        let mut generator = RoundGenerator::new(seed);
        let round = generator.generate(&DifficultyTier::pro(5).unwrap(), None);

        let labels: Labels = round
            .parities()
            .enumerate()
            .map(|(i, (n, p))| (n, if i == wrong { p.flip() } else { p }))
            .collect();

        let verdict = ParityValidator.validate_round(&round, &labels);
        prop_assert_eq!(verdict.correct, wrong == 3);
    }
}
