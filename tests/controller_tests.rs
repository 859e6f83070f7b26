//! Level controller integration tests.
//!
//! These tests play whole sessions through `LevelController` for every
//! tier, including timer cancellation across restarts and navigation.

use std::time::Duration;

use even_odd::core::{GameConfig, Parity, SessionPhase};
use even_odd::levels::{FeedbackKey, LevelController, Rejection, Submission};
use even_odd::rounds::{DifficultyTier, Round, ScriptedRounds};
use even_odd::rules::{Labels, ParityValidator};

const FEEDBACK_DELAY: Duration = Duration::from_secs(2);

fn scripted(rounds: Vec<Round>) -> LevelController<ScriptedRounds> {
    LevelController::with_parts(
        GameConfig::new(),
        ScriptedRounds::new(rounds, 42),
        ParityValidator,
    )
}

fn right_answer(round: &Round) -> Labels {
    round.parities().collect()
}

// =============================================================================
// Scenarios
// =============================================================================

/// Test Beginner: 7 answered "odd" is correct and costs no life.
#[test]
fn test_beginner_seven_odd() {
    let mut controller = scripted(vec![Round::single(7)]);
    controller.start_level(DifficultyTier::Beginner);

    let result = controller.choose(Parity::Odd).unwrap();

    assert!(result.is_correct());
    assert_eq!(result.feedback, FeedbackKey::GreatJob);
    assert_eq!(controller.state().progress(), 1);
    assert_eq!(controller.state().lives(), 3);
}

/// Test Pro: one wrong label fails the whole round and costs a life.
#[test]
fn test_pro_one_wrong_label() {
    let mut controller = scripted(vec![Round::new(&[1042, 5891, 7734])]);
    controller.start_pro(4).unwrap();

    let labels: Labels = [
        (1042, Parity::Even),
        (5891, Parity::Odd),
        (7734, Parity::Odd),
    ]
    .into_iter()
    .collect();
    let result = controller.submit(Submission::Labels(labels)).unwrap();

    assert!(!result.is_correct());
    assert_eq!(result.feedback, FeedbackKey::AlmostThere);
    assert_eq!(result.hint, None);
    assert!(!result.verdict.marks[2].correct);
    assert_eq!(controller.state().lives(), 2);
    assert_eq!(controller.state().progress(), 0);
}

/// Test Beginner hint when an odd number is called even.
#[test]
fn test_beginner_no_pair_hint() {
    let mut controller = scripted(vec![Round::single(5)]);
    controller.start_level(DifficultyTier::Beginner);

    let result = controller.choose(Parity::Even).unwrap();

    assert_eq!(result.hint, Some(FeedbackKey::OopsNoPair));
}

// =============================================================================
// Full sessions
// =============================================================================

/// Test a long correct streak on every single-number tier.
#[test]
fn test_streak_every_tier() {
    for tier in [
        DifficultyTier::Beginner,
        DifficultyTier::Intermediate,
        DifficultyTier::Advanced,
    ] {
        let mut controller = LevelController::seeded(GameConfig::new(), 9);
        controller.start_level(tier);

        let mut previous: Option<Round> = None;
        for _ in 0..25 {
            let round = controller.round().unwrap().clone();
            if let Some(prev) = &previous {
                assert_ne!(prev, &round);
            }
            let n = round.single_number().unwrap();
            let result = controller.choose(Parity::of(i64::from(n))).unwrap();
            assert!(result.is_correct());
            assert!(controller.advance_time(FEEDBACK_DELAY).advanced);
            previous = Some(round);
        }

        assert_eq!(controller.state().score(), 200);
        assert_eq!(controller.state().progress(), 5);
        assert_eq!(controller.state().lives(), 3);
    }
}

/// Test a Pro session until game over.
#[test]
fn test_pro_until_game_over() {
    let mut controller = LevelController::seeded(GameConfig::new(), 5);
    controller.start_pro(9).unwrap();

    // One right round, then three wrong.
    let round = controller.round().unwrap().clone();
    controller.submit(Submission::Labels(right_answer(&round))).unwrap();
    controller.advance_time(FEEDBACK_DELAY);

    let mut ended = false;
    for _ in 0..3 {
        let round = controller.round().unwrap().clone();
        for (n, p) in round.parities() {
            controller.label(n, p.flip()).unwrap();
        }
        let result = controller.submit_labels().unwrap();
        ended = result.session_ended;
        controller.advance_time(FEEDBACK_DELAY);
    }

    assert!(ended);
    assert_eq!(controller.state().phase(), SessionPhase::GameOver);
    assert_eq!(controller.state().progress(), 1);
    assert_eq!(controller.round(), None);

    let snapshot = controller.snapshot();
    assert_eq!(snapshot.lives, 0);
    assert!(!snapshot.is_playing);
    assert!(!snapshot.can_submit);
    assert!(snapshot.last_result.unwrap().session_ended);

    // Restart begins a fresh session on the same tier
    let round = controller.restart().cloned().unwrap();
    assert_eq!(round.len(), 3);
    assert_eq!(controller.state().lives(), 3);
    assert_eq!(controller.state().phase(), SessionPhase::Playing);
}

// =============================================================================
// Timers and cancellation
// =============================================================================

/// Test that submissions during the feedback delay are ignored.
#[test]
fn test_reentrant_submission_ignored() {
    let mut controller = scripted(vec![Round::single(3), Round::single(6)]);
    controller.start_level(DifficultyTier::Beginner);

    controller.choose(Parity::Odd).unwrap();
    assert_eq!(controller.choose(Parity::Even), Err(Rejection::Locked));
    assert_eq!(controller.state().progress(), 1);
    assert_eq!(controller.state().lives(), 3);
}

/// Test that switching tiers cancels the pending advancement.
#[test]
fn test_switch_tier_cancels_pending() {
    let mut controller = scripted(vec![Round::single(3), Round::single(22), Round::single(8)]);
    controller.start_level(DifficultyTier::Beginner);
    let token = controller.choose(Parity::Odd).unwrap().advance.unwrap();

    controller.start_level(DifficultyTier::Intermediate);
    assert_eq!(controller.round(), Some(&Round::single(22)));

    assert!(!controller.fire_advance(token));
    assert!(!controller.advance_time(FEEDBACK_DELAY * 2).advanced);
    assert_eq!(controller.round(), Some(&Round::single(22)));
    assert!(controller.generation() > token.generation);
}

/// Test that navigating away drops timer callbacks.
#[test]
fn test_navigate_back_discards_callbacks() {
    let mut controller = scripted(vec![Round::single(3)]);
    controller.start_level(DifficultyTier::Beginner);
    controller.advance_time(Duration::from_millis(1500));
    let token = controller.choose(Parity::Odd).unwrap().advance.unwrap();

    controller.navigate_back();

    assert!(!controller.fire_advance(token));
    let report = controller.advance_time(Duration::from_secs(10));
    assert_eq!(report.ticks, 0);
    assert!(!report.advanced);
    assert_eq!(controller.round(), None);
    assert_eq!(controller.state().elapsed_seconds(), 0);
}

/// Test that the feedback delay keeps running while paused.
#[test]
fn test_advance_while_paused() {
    let mut controller = scripted(vec![Round::single(3), Round::single(4)]);
    controller.start_level(DifficultyTier::Beginner);
    controller.choose(Parity::Odd).unwrap();

    controller.pause();
    let report = controller.advance_time(FEEDBACK_DELAY);

    assert!(report.advanced);
    assert_eq!(report.ticks, 0);
    assert_eq!(controller.choose(Parity::Even), Err(Rejection::Paused));
    controller.resume();
    assert!(controller.choose(Parity::Even).unwrap().is_correct());
}

/// Test a custom feedback delay from config.
#[test]
fn test_custom_advance_delay() {
    let config = GameConfig::new().with_advance_delay(Duration::from_millis(300));
    let mut controller = LevelController::with_parts(
        config,
        ScriptedRounds::new([Round::single(3), Round::single(4)], 1),
        ParityValidator,
    );
    controller.start_level(DifficultyTier::Beginner);
    controller.choose(Parity::Odd).unwrap();

    assert_eq!(controller.advance_remaining(), Some(Duration::from_millis(300)));
    assert!(controller.advance_time(Duration::from_millis(300)).advanced);
}

// =============================================================================
// Configuration
// =============================================================================

/// Test that a loaded config with no lives never reaches a controller.
#[test]
fn test_loaded_config_without_lives_rejected() {
    let mut value = serde_json::to_value(GameConfig::new()).unwrap();
    value["starting_lives"] = serde_json::json!(0);

    let err = serde_json::from_value::<GameConfig>(value).unwrap_err();
    assert!(err.to_string().contains("at least 1 life"));
}

/// Test that a loaded config drives a playable session.
#[test]
fn test_loaded_config_plays() {
    let json = serde_json::to_string(&GameConfig::new().with_starting_lives(1)).unwrap();
    let config: GameConfig = serde_json::from_str(&json).unwrap();

    let mut controller = LevelController::with_parts(
        config,
        ScriptedRounds::new([Round::single(4)], 3),
        ParityValidator,
    );
    controller.start_level(DifficultyTier::Beginner);
    assert_eq!(controller.state().phase(), SessionPhase::Playing);

    let result = controller.choose(Parity::Odd).unwrap();
    assert!(result.session_ended);
}

// =============================================================================
// Snapshot
// =============================================================================

/// Test that snapshots serialize for the presentation layer.
#[test]
fn test_snapshot_json() {
    let mut controller = scripted(vec![Round::single(7)]);
    controller.start_level(DifficultyTier::Beginner);
    controller.choose(Parity::Odd).unwrap();

    let snapshot = controller.snapshot();
    assert!(snapshot.awaiting_advance);

    let json = serde_json::to_string(&snapshot).unwrap();
    assert!(json.contains("\"GreatJob\""));
    assert!(json.contains("\"odd\""));

    let back: even_odd::levels::GameSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back, snapshot);
}
