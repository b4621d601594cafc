//! Tween domain: tests for timers, fades and oscillators.

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::{AlphaFade, Oscillation, Tween, cycling_hue, random_in_circle};

// -----------------------------------------------------------------------------
// Tween tests
// -----------------------------------------------------------------------------

#[test]
fn test_tween_progress_and_finish() {
    let mut tween = Tween::new(0.5);
    assert_eq!(tween.progress(), 0.0);

    let p = tween.tick(0.25);
    assert!((p - 0.5).abs() < 1e-5);
    assert!(!tween.finished());

    tween.tick(1.0);
    assert_eq!(tween.progress(), 1.0);
    assert!(tween.finished());
}

#[test]
fn test_tween_finishes_on_summed_frame_deltas() {
    // Frame deltas rarely sum to the duration exactly
    let mut tween = Tween::new(0.3);
    tween.tick(0.1);
    tween.tick(0.2);
    assert!(tween.finished());
    assert_eq!(tween.progress(), 1.0);
}

#[test]
fn test_tween_eases_with_cubic_curves() {
    let mut tween = Tween::new(1.0);
    tween.tick(0.5);
    assert!(tween.eased(EaseFunction::CubicOut) > 0.8);
    assert!(tween.eased(EaseFunction::CubicIn) < 0.2);

    tween.tick(0.5);
    assert_eq!(tween.eased(EaseFunction::CubicOut), 1.0);
    assert_eq!(tween.duration(), 1.0);
}

#[test]
fn test_zero_duration_tween_finishes_on_first_tick() {
    let mut tween = Tween::new(0.0);
    tween.tick(0.016);
    assert!(tween.finished());
}

#[test]
fn test_alpha_fade_reaches_target_exactly() {
    let mut fade = AlphaFade::new(1.0);
    fade.fade_to(0.0, 0.2);
    assert!(fade.is_fading());

    fade.tick(0.1);
    assert!(fade.alpha < 1.0 && fade.alpha > 0.0);

    fade.tick(0.2);
    assert_eq!(fade.alpha, 0.0);
    assert!(!fade.is_fading());
}

#[test]
fn test_alpha_fade_restarts_from_current_value() {
    let mut fade = AlphaFade::new(1.0);
    fade.fade_to(0.0, 1.0);
    fade.tick(0.5);
    let midway = fade.alpha;

    fade.fade_to(1.0, 1.0);
    fade.tick(0.0);
    assert!((fade.alpha - midway).abs() < 1e-5);

    fade.tick(1.0);
    assert_eq!(fade.alpha, 1.0);
}

// -----------------------------------------------------------------------------
// Oscillation tests
// -----------------------------------------------------------------------------

#[test]
fn test_oscillation_stays_within_amplitude() {
    let osc = Oscillation::default();
    for i in 0..200 {
        let sample = osc.sample(i as f32 * 0.1, 1.3);
        assert!(sample.offset_y.abs() <= osc.float_amplitude + 1e-4);
        assert!(sample.rotation.abs() <= osc.rot_amplitude + 1e-4);
        assert!((sample.scale - 1.0).abs() <= osc.scale_amplitude + 1e-4);
    }
}

#[test]
fn test_phase_desynchronizes_items() {
    let osc = Oscillation::default();
    let a = osc.sample(1.0, 0.0);
    let b = osc.sample(1.0, 2.0);
    assert_ne!(a.offset_y, b.offset_y);
}

#[test]
fn test_random_in_circle_respects_radius() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    for _ in 0..100 {
        let offset = random_in_circle(&mut rng, 0.3);
        assert!(offset.length() <= 0.3 + 1e-5);
    }
    assert_eq!(random_in_circle(&mut rng, 0.0).length(), 0.0);
}

#[test]
fn test_cycling_hue_wraps() {
    assert_eq!(cycling_hue(0.0, 0.5), 0.0);
    assert!((cycling_hue(1.0, 0.5) - 180.0).abs() < 1e-3);
    assert!(cycling_hue(2.0, 0.5) < 1e-3);
}
