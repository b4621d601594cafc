//! Transition domain: tests for the fade sequence and busy guard.

use super::fader::FadePhase;
use super::SceneFader;
use crate::content::FaderTuning;
use crate::core::GameState;

fn fader() -> SceneFader {
    SceneFader::new(&FaderTuning::default())
}

/// Tick until the fader asks for a scene load, returning the request.
fn run_until_load(fader: &mut SceneFader, current: GameState) -> Option<GameState> {
    for _ in 0..200 {
        if let Some(target) = fader.tick(0.01, current) {
            return Some(target);
        }
    }
    None
}

#[test]
fn test_idle_fader_does_nothing() {
    let mut fader = fader();
    assert!(!fader.is_busy());
    assert_eq!(fader.tick(1.0, GameState::MainMenu), None);
    assert_eq!(fader.alpha, 0.0);
}

#[test]
fn test_full_sequence_reaches_target_and_clears() {
    let mut fader = fader();
    assert!(fader.fade_to(GameState::WorldSelect));
    assert!(fader.is_busy());

    let requested = run_until_load(&mut fader, GameState::MainMenu);
    assert_eq!(requested, Some(GameState::WorldSelect));
    assert_eq!(fader.alpha, 1.0);
    assert_eq!(fader.phase, FadePhase::Loading);

    // Still loading while the old state is active
    fader.tick(0.1, GameState::MainMenu);
    assert_eq!(fader.phase, FadePhase::Loading);

    fader.tick(0.0, GameState::WorldSelect);
    assert!(matches!(fader.phase, FadePhase::FadingIn(_)));

    fader.tick(0.1, GameState::WorldSelect);
    assert!(fader.alpha > 0.0 && fader.alpha < 1.0);

    fader.tick(1.0, GameState::WorldSelect);
    assert!(!fader.is_busy());
    assert_eq!(fader.alpha, 0.0);
    assert_eq!(fader.target(), None);
}

#[test]
fn test_alpha_rises_during_fade_out() {
    let mut fader = fader();
    fader.fade_to(GameState::QuizBattle);

    fader.tick(0.05, GameState::WorldSelect);
    let early = fader.alpha;
    fader.tick(0.1, GameState::WorldSelect);
    assert!(fader.alpha > early);
    assert!(fader.alpha < 1.0);
}

#[test]
fn test_requests_while_busy_are_ignored() {
    let mut fader = fader();
    assert!(fader.fade_to(GameState::WorldSelect));
    assert!(!fader.fade_to(GameState::QuizBattle));
    assert_eq!(fader.target(), Some(GameState::WorldSelect));
}

#[test]
fn test_load_requested_exactly_once() {
    let mut fader = fader();
    fader.fade_to(GameState::MainMenu);

    let mut requests = 0;
    for _ in 0..200 {
        if fader.tick(0.01, GameState::QuizBattle).is_some() {
            requests += 1;
        }
    }
    assert_eq!(requests, 1);
}

#[test]
fn test_zero_hold_loads_straight_after_fade_out() {
    let mut fader = SceneFader::new(&FaderTuning {
        fade_out: 0.1,
        fade_in: 0.1,
        hold: 0.0,
    });
    fader.fade_to(GameState::WorldSelect);
    assert_eq!(fader.tick(0.2, GameState::MainMenu), Some(GameState::WorldSelect));
}

#[test]
fn test_unknown_scene_name_is_rejected() {
    let mut fader = fader();
    assert!(!fader.fade_to_scene("Credits"));
    assert!(!fader.is_busy());

    assert!(fader.fade_to_scene("QuizBattle"));
    assert_eq!(fader.target(), Some(GameState::QuizBattle));
}
